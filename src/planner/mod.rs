pub mod constants;
pub mod placement;
pub mod solver;
pub mod targets;
pub mod totals;
pub mod validation;

pub use constants::*;
pub use placement::normalize_placement;
pub use solver::solve_quantities;
pub use targets::{allocate_targets, CycleTargets};
pub use totals::aggregate_totals;
pub use validation::{validate_profile, ProfileIssue};
