use thiserror::Error;

use crate::models::{DayType, DayTypeCounts, Profile};
use crate::planner::constants::SHARE_TOLERANCE;

/// One self-consistency problem found in a profile.
///
/// Advisory only: validation never mutates state. Hosts block solver
/// invocation while any issue exists and render the messages to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileIssue {
    #[error("day counts sum to {actual}, expected {expected} (cycle length)")]
    DayCountSum { expected: u32, actual: u32 },

    #[error("carb shares sum to {sum:.6}, expected 1")]
    CarbShareSum { sum: f64 },

    #[error("fat shares sum to {sum:.6}, expected 1")]
    FatShareSum { sum: f64 },

    #[error("placement has {actual} {category} days, profile requires {required}")]
    PlacementCount {
        category: &'static str,
        required: u32,
        actual: u32,
    },
}

/// Run every consistency check against the profile.
///
/// All checks are evaluated independently; an empty result means the
/// profile is valid.
pub fn validate_profile(profile: &Profile) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();

    let count_sum = profile.day_counts.total();
    if count_sum != profile.cycle_days {
        issues.push(ProfileIssue::DayCountSum {
            expected: profile.cycle_days,
            actual: count_sum,
        });
    }

    let carb_sum = profile.carb_shares.sum();
    if (carb_sum - 1.0).abs() > SHARE_TOLERANCE {
        issues.push(ProfileIssue::CarbShareSum { sum: carb_sum });
    }

    let fat_sum = profile.fat_shares.sum();
    if (fat_sum - 1.0).abs() > SHARE_TOLERANCE {
        issues.push(ProfileIssue::FatShareSum { sum: fat_sum });
    }

    let placement_counts = DayTypeCounts::tally(&profile.placement);
    for day_type in DayType::ALL {
        let required = profile.day_counts.get(day_type);
        let actual = placement_counts.get(day_type);
        if required != actual {
            issues.push(ProfileIssue::PlacementCount {
                category: day_type.label(),
                required,
                actual,
            });
        }
    }

    issues
}
