use crate::models::{BodyType, DayTarget, Profile};
use crate::planner::constants::*;

/// Allocation result for a whole cycle.
///
/// `protein_per_day` is flat across the cycle; carb and fat cycle totals are
/// split across categories by the profile's share mappings.
#[derive(Debug, Clone)]
pub struct CycleTargets {
    pub day_targets: Vec<DayTarget>,
    pub protein_per_day: f64,
    pub carb_total: f64,
    pub fat_total: f64,
}

/// Per-weight coefficients for the profile's body type.
///
/// Ectomorph uses fixed carb and fat coefficients; endomorph trades carbs
/// down and takes its fat coefficient from the profile's fat_rate.
fn body_type_coefficients(profile: &Profile) -> (f64, f64) {
    match profile.body_type {
        BodyType::Ectomorph => (ECTO_CARB_COEFF, ECTO_FAT_COEFF),
        BodyType::Endomorph => (ENDO_CARB_COEFF, profile.fat_rate),
    }
}

/// Per-day amount for one category: its share of the cycle total divided by
/// its day count. Categories with no assigned days get zero.
fn per_day_for_category(total: f64, share: f64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (total * share) / count as f64
}

/// Compute per-day macro targets for every position of the placement
/// sequence.
pub fn allocate_targets(profile: &Profile) -> CycleTargets {
    let (carb_per_weight, fat_per_weight) = body_type_coefficients(profile);

    let protein_per_day = profile.weight * profile.protein_rate;
    let carb_total = profile.weight * carb_per_weight * profile.cycle_days as f64;
    let fat_total = profile.weight * fat_per_weight * profile.cycle_days as f64;

    let day_targets = profile
        .placement
        .iter()
        .enumerate()
        .map(|(day, &day_type)| {
            let count = profile.day_counts.get(day_type);
            let carbs =
                per_day_for_category(carb_total, profile.carb_shares.get(day_type), count);
            let fats = per_day_for_category(fat_total, profile.fat_shares.get(day_type), count);

            DayTarget {
                day,
                day_type,
                protein: round2(protein_per_day),
                carbs: round2(carbs),
                fats: round2(fats),
            }
        })
        .collect();

    CycleTargets {
        day_targets,
        protein_per_day: round2(protein_per_day),
        carb_total: round2(carb_total),
        fat_total: round2(fat_total),
    }
}
