use crate::models::{DayTarget, FoodCatalog, PlanEntry, Totals};
use crate::planner::{CycleTargets, ProfileIssue};

/// Display the cycle's day targets in a formatted table.
pub fn display_cycle_targets(targets: &CycleTargets) {
    println!();
    println!("=== Cycle Targets ===");
    println!();
    println!(
        "Protein per day: {:.2} g | Cycle carbs: {:.2} g | Cycle fats: {:.2} g",
        targets.protein_per_day, targets.carb_total, targets.fat_total
    );
    println!();
    println!("Day | Type   | Protein | Carbs   | Fats");

    for target in &targets.day_targets {
        println!(
            "{:>3} | {:<6} | {:>7.2} | {:>7.2} | {:>6.2}",
            target.day + 1,
            target.day_type.label(),
            target.protein,
            target.carbs,
            target.fats
        );
    }
    println!();
}

/// Display validation issues, or a confirmation when there are none.
pub fn display_issues(issues: &[ProfileIssue]) {
    if issues.is_empty() {
        println!("Profile is valid.");
        return;
    }

    println!("Profile has {} issue(s):", issues.len());
    for issue in issues {
        println!("  - {}", issue);
    }
}

/// Display one day's plan with realized totals against the target.
pub fn display_day_plan(
    entries: &[PlanEntry],
    totals: &Totals,
    target: &DayTarget,
    catalog: &FoodCatalog,
) {
    println!();
    println!(
        "=== Day {} ({}) ===",
        target.day + 1,
        target.day_type.label()
    );
    println!();

    if entries.is_empty() {
        println!("No foods planned for this day.");
        return;
    }

    let max_name_len = entries
        .iter()
        .map(|e| {
            catalog
                .find(&e.food_id)
                .map(|f| f.name.len())
                .unwrap_or(e.food_id.len())
        })
        .max()
        .unwrap_or(10);

    for entry in entries {
        let name = catalog
            .find(&entry.food_id)
            .map(|f| f.name.as_str())
            .unwrap_or(entry.food_id.as_str());
        let missing = if catalog.find(&entry.food_id).is_none() {
            "  [not in catalog]"
        } else {
            ""
        };

        println!(
            "  {:<width$} ({}) - {:>7.2} g{}",
            name,
            entry.basis,
            entry.quantity,
            missing,
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals vs target ---");
    print_macro_line("Protein", totals.protein, target.protein);
    print_macro_line("Carbs", totals.carbs, target.carbs);
    print_macro_line("Fats", totals.fats, target.fats);
    if totals.kcal > 0.0 {
        println!("{:<8} {:>8.2}", "Kcal", totals.kcal);
    }

    let deviation = (target.protein - totals.protein).abs()
        + (target.carbs - totals.carbs).abs()
        + (target.fats - totals.fats).abs();
    println!("Total deviation: {:.2}", deviation);
    println!();
}

fn print_macro_line(label: &str, actual: f64, target: f64) {
    let diff = actual - target;
    let sign = if diff >= 0.0 { "+" } else { "" };
    println!(
        "{:<8} {:>8.2} / {:>8.2}  ({}{:.2})",
        label, actual, target, sign, diff
    );
}
