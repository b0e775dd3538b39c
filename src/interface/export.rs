use std::path::Path;

use crate::error::Result;
use crate::models::FoodCatalog;
use crate::state::PlanSession;

/// Export the cycle as CSV: one row per day with targets and realized
/// totals side by side.
pub fn write_cycle_csv(path: &Path, session: &PlanSession, catalog: &FoodCatalog) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "type",
        "target_protein",
        "target_carbs",
        "target_fats",
        "actual_protein",
        "actual_carbs",
        "actual_fats",
        "actual_kcal",
    ])?;

    let targets = session.targets();
    for target in &targets.day_targets {
        let totals = session.day_totals(target.day, catalog)?;
        wtr.write_record([
            (target.day + 1).to_string(),
            target.day_type.label().to_string(),
            format!("{:.2}", target.protein),
            format!("{:.2}", target.carbs),
            format!("{:.2}", target.fats),
            format!("{:.2}", totals.protein),
            format!("{:.2}", totals.carbs),
            format!("{:.2}", totals.fats),
            format!("{:.2}", totals.kcal),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
