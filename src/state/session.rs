use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{FoodCatalog, PlanEntry, Profile, Totals};
use crate::planner::{
    aggregate_totals, allocate_targets, normalize_placement, solve_quantities, validate_profile,
    CycleTargets, ProfileIssue,
};

/// A planning session: the profile plus one entry list per cycle day.
///
/// The session owns this state; day targets and totals are derived on
/// demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSession {
    profile: Profile,
    days: Vec<Vec<PlanEntry>>,
}

impl PlanSession {
    pub fn new(profile: Profile) -> Self {
        let days = vec![Vec::new(); profile.cycle_days as usize];
        Self { profile, days }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the profile, resizing the per-day entry lists to the new
    /// cycle length. Days past the new length are dropped; new days start
    /// empty.
    pub fn set_profile(&mut self, profile: Profile) {
        self.days.resize(profile.cycle_days as usize, Vec::new());
        self.profile = profile;
    }

    pub fn cycle_days(&self) -> usize {
        self.days.len()
    }

    pub fn day_entries(&self, day: usize) -> Result<&[PlanEntry]> {
        self.days
            .get(day)
            .map(Vec::as_slice)
            .ok_or(PlanError::DayOutOfRange(day))
    }

    pub fn set_day_entries(&mut self, day: usize, entries: Vec<PlanEntry>) -> Result<()> {
        let slot = self
            .days
            .get_mut(day)
            .ok_or(PlanError::DayOutOfRange(day))?;
        *slot = entries;
        Ok(())
    }

    pub fn targets(&self) -> CycleTargets {
        allocate_targets(&self.profile)
    }

    pub fn validate(&self) -> Vec<ProfileIssue> {
        validate_profile(&self.profile)
    }

    /// Repair the placement sequence in place. Returns true if it changed.
    pub fn normalize_placement(&mut self) -> bool {
        let normalized = normalize_placement(&self.profile);
        if normalized == self.profile.placement {
            return false;
        }
        self.profile.placement = normalized;
        true
    }

    /// Solve one day's quantities against its target, storing the result.
    ///
    /// Fails if the profile has outstanding validation issues; the solver
    /// contract assumes a consistent profile.
    pub fn solve_day(&mut self, day: usize, catalog: &FoodCatalog) -> Result<()> {
        let issues = self.validate();
        if !issues.is_empty() {
            let joined = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PlanError::InvalidProfile(joined));
        }

        let targets = self.targets();
        let target = targets
            .day_targets
            .get(day)
            .ok_or(PlanError::DayOutOfRange(day))?;

        let entries = self.day_entries(day)?;
        let solved = solve_quantities(entries, catalog, target);
        self.set_day_entries(day, solved)
    }

    pub fn day_totals(&self, day: usize, catalog: &FoodCatalog) -> Result<Totals> {
        Ok(aggregate_totals(self.day_entries(day)?, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyType, DayType, DayTypeCounts, DayTypeShares};

    fn sample_profile() -> Profile {
        Profile {
            weight: 70.0,
            body_type: BodyType::Ectomorph,
            protein_rate: 1.2,
            fat_rate: 1.0,
            cycle_days: 3,
            day_counts: DayTypeCounts {
                high: 1,
                medium: 1,
                low: 1,
            },
            carb_shares: DayTypeShares {
                high: 0.5,
                medium: 0.3,
                low: 0.2,
            },
            fat_shares: DayTypeShares {
                high: 0.2,
                medium: 0.3,
                low: 0.5,
            },
            placement: vec![DayType::High, DayType::Medium, DayType::Low],
        }
    }

    #[test]
    fn test_new_session_has_empty_days() {
        let session = PlanSession::new(sample_profile());
        assert_eq!(session.cycle_days(), 3);
        assert!(session.day_entries(0).unwrap().is_empty());
    }

    #[test]
    fn test_day_out_of_range() {
        let session = PlanSession::new(sample_profile());
        assert!(matches!(
            session.day_entries(5),
            Err(PlanError::DayOutOfRange(5))
        ));
    }

    #[test]
    fn test_set_profile_resizes_days() {
        let mut session = PlanSession::new(sample_profile());
        session
            .set_day_entries(2, vec![PlanEntry::new("rice", "dry", 100.0)])
            .unwrap();

        let mut longer = sample_profile();
        longer.cycle_days = 5;
        longer.day_counts.low = 3;
        longer.placement = vec![
            DayType::High,
            DayType::Medium,
            DayType::Low,
            DayType::Low,
            DayType::Low,
        ];
        session.set_profile(longer);

        assert_eq!(session.cycle_days(), 5);
        // Existing entries survive, new days start empty.
        assert_eq!(session.day_entries(2).unwrap().len(), 1);
        assert!(session.day_entries(4).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_placement_reports_change() {
        let mut profile = sample_profile();
        profile.placement = vec![DayType::High, DayType::High, DayType::Low];
        let mut session = PlanSession::new(profile);

        assert!(session.normalize_placement());
        assert!(session.validate().is_empty());
        assert!(!session.normalize_placement());
    }

    #[test]
    fn test_solve_day_blocked_by_invalid_profile() {
        let mut profile = sample_profile();
        profile.carb_shares.high = 0.9;
        let mut session = PlanSession::new(profile);

        let catalog = FoodCatalog {
            version: 1,
            unit: "g".to_string(),
            foods: Vec::new(),
        };
        assert!(matches!(
            session.solve_day(0, &catalog),
            Err(PlanError::InvalidProfile(_))
        ));
    }
}
