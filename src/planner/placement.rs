use crate::models::{DayType, DayTypeCounts, Profile};

/// Repair the profile's placement sequence so its per-category counts match
/// the profile's required counts.
///
/// The sequence is first truncated or right-padded with `Low` to the cycle
/// length. Positions are then scanned from the tail; a position whose
/// category is over-represented is reassigned to the first category (in
/// High, Medium, Low order) that is still under-represented. Positions of
/// correctly-counted categories are never touched, so an already-normalized
/// sequence comes back unchanged.
pub fn normalize_placement(profile: &Profile) -> Vec<DayType> {
    let len = profile.cycle_days as usize;

    let mut placement: Vec<DayType> = profile.placement.iter().copied().take(len).collect();
    placement.resize(len, DayType::Low);

    let current = DayTypeCounts::tally(&placement);
    let required = profile.day_counts;

    let mut excess = DayTypeCounts {
        high: current.high.saturating_sub(required.high),
        medium: current.medium.saturating_sub(required.medium),
        low: current.low.saturating_sub(required.low),
    };
    let mut deficit = DayTypeCounts {
        high: required.high.saturating_sub(current.high),
        medium: required.medium.saturating_sub(current.medium),
        low: required.low.saturating_sub(current.low),
    };

    for slot in placement.iter_mut().rev() {
        if deficit.total() == 0 {
            break;
        }
        if excess.get(*slot) == 0 {
            continue;
        }

        let Some(wanted) = DayType::ALL.into_iter().find(|dt| deficit.get(*dt) > 0) else {
            break;
        };

        *excess.get_mut(*slot) -= 1;
        *deficit.get_mut(wanted) -= 1;
        *slot = wanted;
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyType, DayTypeShares};

    fn profile_with(placement: Vec<DayType>, counts: DayTypeCounts, cycle_days: u32) -> Profile {
        Profile {
            weight: 70.0,
            body_type: BodyType::Ectomorph,
            protein_rate: 1.2,
            fat_rate: 1.0,
            cycle_days,
            day_counts: counts,
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
            placement,
        }
    }

    #[test]
    fn test_reassigns_excess_high_from_tail() {
        let profile = profile_with(
            vec![
                DayType::High,
                DayType::High,
                DayType::Medium,
                DayType::High,
                DayType::Low,
            ],
            DayTypeCounts {
                high: 2,
                medium: 2,
                low: 1,
            },
            5,
        );

        let normalized = normalize_placement(&profile);

        // The tail-most excess high (position 3) flips to medium; everything
        // else stays put.
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
    fn test_idempotent_on_normalized_sequence() {
        let profile = profile_with(
            vec![
                DayType::High,
                DayType::Medium,
                DayType::Low,
                DayType::High,
                DayType::Medium,
            ],
            DayTypeCounts {
                high: 2,
                medium: 2,
                low: 1,
            },
            5,
        );

        let once = normalize_placement(&profile);
        assert_eq!(once, profile.placement);

        let again_profile = profile_with(once.clone(), profile.day_counts, 5);
        assert_eq!(normalize_placement(&again_profile), once);
    }

    #[test]
    fn test_pads_short_sequence_with_low() {
        let profile = profile_with(
            vec![DayType::High],
            DayTypeCounts {
                high: 1,
                medium: 1,
                low: 1,
            },
            3,
        );

        let normalized = normalize_placement(&profile);
        assert_eq!(normalized.len(), 3);
        assert_eq!(DayTypeCounts::tally(&normalized), profile.day_counts);
    }

    #[test]
    fn test_truncates_long_sequence() {
        let profile = profile_with(
            vec![DayType::High; 7],
            DayTypeCounts {
                high: 2,
                medium: 1,
                low: 0,
            },
            3,
        );

        let normalized = normalize_placement(&profile);
        assert_eq!(normalized.len(), 3);
        assert_eq!(DayTypeCounts::tally(&normalized), profile.day_counts);
    }

    #[test]
    fn test_counts_always_match_required() {
        let profile = profile_with(
            vec![DayType::Low; 6],
            DayTypeCounts {
                high: 3,
                medium: 2,
                low: 1,
            },
            6,
        );

        let normalized = normalize_placement(&profile);
        assert_eq!(DayTypeCounts::tally(&normalized), profile.day_counts);
    }
}
