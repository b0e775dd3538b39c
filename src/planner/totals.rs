use crate::models::{FoodCatalog, PlanEntry, Totals};
use crate::planner::constants::round2;

/// Sum a day's plan entries into realized macro totals.
///
/// An entry whose food id is missing from the catalog contributes zero and
/// is otherwise ignored; plans authored against an older catalog keep
/// working after foods are removed. The chosen basis resolves within the
/// food's variant list, falling back to the first variant. Quantities are
/// clamped non-negative; sums are rounded once at the end rather than per
/// entry so rounding error does not compound.
pub fn aggregate_totals(entries: &[PlanEntry], catalog: &FoodCatalog) -> Totals {
    let mut totals = Totals::default();

    for entry in entries {
        let Some(food) = catalog.find(&entry.food_id) else {
            continue;
        };
        let Some(variant) = food.resolve_variant(&entry.basis) else {
            continue;
        };

        let ratio = entry.quantity.max(0.0) / 100.0;
        totals.protein += variant.protein * ratio;
        totals.carbs += variant.carbs * ratio;
        totals.fats += variant.fats * ratio;
        totals.kcal += variant.kcal.unwrap_or(0.0) * ratio;
    }

    Totals {
        protein: round2(totals.protein),
        carbs: round2(totals.carbs),
        fats: round2(totals.fats),
        kcal: round2(totals.kcal),
    }
}
