use crate::models::{DayTarget, FoodCatalog, FoodCategory, PlanEntry};
use crate::planner::constants::*;

/// Densities of an entry's resolved variant, cached so the search loop does
/// not hit the catalog on every trial move. `None` marks an entry whose
/// food id is absent from the catalog; it contributes nothing and its
/// quantity is never touched.
struct ResolvedEntry {
    category: FoodCategory,
    protein: f64,
    carbs: f64,
    fats: f64,
}

impl ResolvedEntry {
    fn macro_density(&self, macro_index: usize) -> f64 {
        match macro_index {
            0 => self.protein,
            1 => self.carbs,
            _ => self.fats,
        }
    }
}

/// Macro fed by a food category during seeding. Fixed one-to-one mapping;
/// `Other` foods are left for the local search to pick up.
fn seeded_macro(category: FoodCategory) -> Option<usize> {
    match category {
        FoodCategory::Protein => Some(0),
        FoodCategory::Carb => Some(1),
        FoodCategory::Fat => Some(2),
        FoodCategory::Other => None,
    }
}

fn target_macro(target: &DayTarget, macro_index: usize) -> f64 {
    match macro_index {
        0 => target.protein,
        1 => target.carbs,
        _ => target.fats,
    }
}

fn resolve_entries(entries: &[PlanEntry], catalog: &FoodCatalog) -> Vec<Option<ResolvedEntry>> {
    entries
        .iter()
        .map(|entry| {
            let food = catalog.find(&entry.food_id)?;
            let variant = food.resolve_variant(&entry.basis)?;
            Some(ResolvedEntry {
                category: food.category,
                protein: variant.protein,
                carbs: variant.carbs,
                fats: variant.fats,
            })
        })
        .collect()
}

/// L1 deviation of the arena's implied totals from the day target,
/// unweighted across the three macros.
fn deviation(quantities: &[f64], resolved: &[Option<ResolvedEntry>], target: &DayTarget) -> f64 {
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fats = 0.0;

    for (quantity, entry) in quantities.iter().zip(resolved) {
        let Some(entry) = entry else { continue };
        let ratio = quantity.max(0.0) / 100.0;
        protein += entry.protein * ratio;
        carbs += entry.carbs * ratio;
        fats += entry.fats * ratio;
    }

    (target.protein - protein).abs() + (target.carbs - carbs).abs() + (target.fats - fats).abs()
}

/// Phase 1: for each macro, rank that macro's category group by density and
/// greedily fill until `SEED_FILL_FRACTION` of the target is met. The
/// undershoot is deliberate — coarse density estimates overshoot badly when
/// pushed to 100%, and the local search closes the gap.
fn seed_quantities(
    quantities: &mut [f64],
    resolved: &[Option<ResolvedEntry>],
    target: &DayTarget,
) {
    for macro_index in 0..3 {
        let macro_target = target_macro(target, macro_index);
        if macro_target <= 0.0 {
            continue;
        }

        let mut group: Vec<(usize, f64)> = resolved
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let entry = entry.as_ref()?;
                if seeded_macro(entry.category) != Some(macro_index) {
                    return None;
                }
                let density = entry.macro_density(macro_index);
                (density > 0.0).then_some((i, density))
            })
            .collect();

        group.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut remaining = macro_target * SEED_FILL_FRACTION;
        for (index, density) in group {
            if remaining <= 0.0 {
                break;
            }
            let added = (remaining / density) * 100.0;
            quantities[index] += added;
            remaining -= (added * density) / 100.0;
        }
    }
}

/// Phase 2: steepest single-coordinate descent with a fixed ±5-unit step.
///
/// Each iteration tries +step then -step on every entry, keeps the single
/// best improving move, and stops at convergence, at a local optimum, or at
/// the iteration cap. The step never anneals, so a target unreachable by
/// 5-unit-quantized combinations ends at whichever bound hits first.
fn refine_quantities(
    quantities: &mut [f64],
    resolved: &[Option<ResolvedEntry>],
    target: &DayTarget,
) {
    for _ in 0..SOLVER_MAX_ITERATIONS {
        let current = deviation(quantities, resolved, target);
        if current < CONVERGENCE_THRESHOLD {
            break;
        }

        let mut best: Option<(usize, f64, f64)> = None;

        for index in 0..quantities.len() {
            if resolved[index].is_none() {
                continue;
            }
            for delta in [SOLVER_STEP, -SOLVER_STEP] {
                let trial = quantities[index] + delta;
                if trial < 0.0 {
                    continue;
                }

                let saved = quantities[index];
                quantities[index] = trial;
                let score = deviation(quantities, resolved, target);
                quantities[index] = saved;

                let improves = score < current - IMPROVEMENT_EPSILON;
                let beats_best = best.map_or(true, |(_, _, s)| score < s);
                if improves && beats_best {
                    best = Some((index, delta, score));
                }
            }
        }

        let Some((index, delta, _)) = best else {
            break; // local optimum
        };
        quantities[index] = (quantities[index] + delta).max(0.0);
    }
}

/// Assign quantities to the selected foods so the day's realized totals
/// approach its target.
///
/// Entry identities are preserved: the output has the same foods in the
/// same order, only quantities differ, and every quantity is non-negative.
/// Quantities are re-derived from scratch on each call, so identical inputs
/// produce identical outputs. An empty selection or an all-zero target is a
/// no-op returning the input unchanged.
pub fn solve_quantities(
    entries: &[PlanEntry],
    catalog: &FoodCatalog,
    target: &DayTarget,
) -> Vec<PlanEntry> {
    if entries.is_empty()
        || (target.protein <= 0.0 && target.carbs <= 0.0 && target.fats <= 0.0)
    {
        return entries.to_vec();
    }

    let resolved = resolve_entries(entries, catalog);
    let mut quantities = vec![0.0_f64; entries.len()];

    seed_quantities(&mut quantities, &resolved, target);
    refine_quantities(&mut quantities, &resolved, target);

    entries
        .iter()
        .zip(&quantities)
        .map(|(entry, &quantity)| PlanEntry {
            food_id: entry.food_id.clone(),
            basis: entry.basis.clone(),
            quantity: round2(quantity.max(0.0)),
        })
        .collect()
}
