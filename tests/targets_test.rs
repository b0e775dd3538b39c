use assert_float_eq::assert_float_absolute_eq;

use carb_cycler_rs::models::{
    BodyType, DayType, DayTypeCounts, DayTypeShares, Profile,
};
use carb_cycler_rs::planner::{allocate_targets, normalize_placement, validate_profile};

fn make_profile() -> Profile {
    Profile {
        weight: 70.0,
        body_type: BodyType::Ectomorph,
        protein_rate: 1.2,
        fat_rate: 1.0,
        cycle_days: 5,
        day_counts: DayTypeCounts {
            high: 2,
            medium: 2,
            low: 1,
        },
        carb_shares: DayTypeShares {
            high: 0.5,
            medium: 0.35,
            low: 0.15,
        },
        fat_shares: DayTypeShares {
            high: 0.2,
            medium: 0.35,
            low: 0.45,
        },
        placement: vec![
            DayType::High,
            DayType::High,
            DayType::Medium,
            DayType::Medium,
            DayType::Low,
        ],
    }
}

#[test]
fn test_cycle_totals_for_70kg_ectomorph() {
    let targets = allocate_targets(&make_profile());

    assert_float_absolute_eq!(targets.protein_per_day, 84.0, 1e-9);
    assert_float_absolute_eq!(targets.carb_total, 700.0, 1e-9);
    assert_float_absolute_eq!(targets.fat_total, 280.0, 1e-9);
}

#[test]
fn test_per_day_carb_targets_by_category() {
    let targets = allocate_targets(&make_profile());

    // high: 700 * 0.5 / 2, medium: 700 * 0.35 / 2, low: 700 * 0.15 / 1
    assert_float_absolute_eq!(targets.day_targets[0].carbs, 175.0, 1e-9);
    assert_float_absolute_eq!(targets.day_targets[2].carbs, 122.5, 1e-9);
    assert_float_absolute_eq!(targets.day_targets[4].carbs, 105.0, 1e-9);
}

#[test]
fn test_category_totals_reconstruct_from_per_day_targets() {
    let profile = make_profile();
    let targets = allocate_targets(&profile);

    for day_type in DayType::ALL {
        let count = profile.day_counts.get(day_type);
        if count == 0 {
            continue;
        }

        let per_day_carbs = targets
            .day_targets
            .iter()
            .find(|t| t.day_type == day_type)
            .unwrap()
            .carbs;
        let reconstructed = per_day_carbs * count as f64;
        let expected = targets.carb_total * profile.carb_shares.get(day_type);

        // Per-day values carry 2-dp rounding, scaled by the day count.
        assert_float_absolute_eq!(reconstructed, expected, 0.01 * count as f64);
    }
}

#[test]
fn test_validation_gates_on_inconsistent_profile() {
    let mut profile = make_profile();
    profile.day_counts.medium = 3;

    let issues = validate_profile(&profile);
    assert!(!issues.is_empty());

    // Messages must render for the host to display.
    for issue in &issues {
        assert!(!issue.to_string().is_empty());
    }
}

#[test]
fn test_normalize_repairs_one_tail_position() {
    let mut profile = make_profile();
    // 3 high, 1 medium, 1 low against required 2/2/1.
    profile.placement = vec![
        DayType::High,
        DayType::High,
        DayType::Medium,
        DayType::High,
        DayType::Low,
    ];

    let normalized = normalize_placement(&profile);

    // Exactly one high flips to medium, chosen from the tail; the rest
    // stay put.
    assert_eq!(
        normalized,
        vec![
            DayType::High,
            DayType::High,
            DayType::Medium,
            DayType::Medium,
            DayType::Low,
        ]
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let mut profile = make_profile();
    profile.placement = vec![DayType::Low; 5];

    let once = normalize_placement(&profile);
    profile.placement = once.clone();
    let twice = normalize_placement(&profile);

    assert_eq!(once, twice);
}

#[test]
fn test_normalize_always_matches_required_counts() {
    let inputs = [
        vec![DayType::High; 5],
        vec![DayType::Medium; 5],
        vec![],
        vec![DayType::Low, DayType::Low, DayType::High],
        vec![DayType::Medium; 9],
    ];

    for placement in inputs {
        let mut profile = make_profile();
        profile.placement = placement;

        let normalized = normalize_placement(&profile);
        assert_eq!(normalized.len(), profile.cycle_days as usize);
        assert_eq!(DayTypeCounts::tally(&normalized), profile.day_counts);
    }
}

#[test]
fn test_normalized_profile_passes_validation() {
    let mut profile = make_profile();
    profile.placement = vec![DayType::High; 5];

    profile.placement = normalize_placement(&profile);
    assert!(validate_profile(&profile).is_empty());
}
