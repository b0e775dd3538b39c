/// Carbohydrate grams per kg per cycle day for the ectomorph variant.
pub const ECTO_CARB_COEFF: f64 = 2.0;

/// Fat grams per kg per cycle day for the ectomorph variant.
pub const ECTO_FAT_COEFF: f64 = 0.8;

/// Carbohydrate grams per kg per cycle day for the endomorph variant.
/// The endomorph fat coefficient comes from the profile's fat_rate instead.
pub const ENDO_CARB_COEFF: f64 = 1.5;

/// Tolerance when checking that category shares sum to 1.
pub const SHARE_TOLERANCE: f64 = 1e-6;

/// Fraction of a macro target filled during the solver's seeding phase.
/// Seeding undershoots on purpose, leaving room for local-search refinement.
pub const SEED_FILL_FRACTION: f64 = 0.7;

/// Quantity delta tried for each entry during local search, in mass units.
pub const SOLVER_STEP: f64 = 5.0;

/// Hard cap on local-search iterations.
pub const SOLVER_MAX_ITERATIONS: usize = 1500;

/// Local search stops once the L1 deviation falls below this.
pub const CONVERGENCE_THRESHOLD: f64 = 1.0;

/// A move must improve the score by more than this to be accepted.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Round to 2 decimal places, half away from zero.
///
/// Reporting precision for targets, totals and solved quantities; cycle
/// totals are never re-derived from rounded per-day values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
