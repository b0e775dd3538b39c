use serde::{Deserialize, Serialize};

/// Carbohydrate load category of a cycle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    High,
    Medium,
    Low,
}

impl DayType {
    /// Fixed enumeration order used by the placement normalizer when
    /// choosing a deficit category to reassign into.
    pub const ALL: [DayType; 3] = [DayType::High, DayType::Medium, DayType::Low];

    pub fn label(&self) -> &'static str {
        match self {
            DayType::High => "high",
            DayType::Medium => "medium",
            DayType::Low => "low",
        }
    }
}

/// Day counts per category. The key set is closed, so this is a fixed
/// three-field record rather than a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl DayTypeCounts {
    pub fn get(&self, day_type: DayType) -> u32 {
        match day_type {
            DayType::High => self.high,
            DayType::Medium => self.medium,
            DayType::Low => self.low,
        }
    }

    pub fn get_mut(&mut self, day_type: DayType) -> &mut u32 {
        match day_type {
            DayType::High => &mut self.high,
            DayType::Medium => &mut self.medium,
            DayType::Low => &mut self.low,
        }
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }

    /// Count categories over a placement sequence.
    pub fn tally(placement: &[DayType]) -> Self {
        let mut counts = DayTypeCounts {
            high: 0,
            medium: 0,
            low: 0,
        };
        for day_type in placement {
            *counts.get_mut(*day_type) += 1;
        }
        counts
    }
}

/// Per-category share of a cycle total. Shares must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTypeShares {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl DayTypeShares {
    pub fn get(&self, day_type: DayType) -> f64 {
        match day_type {
            DayType::High => self.high,
            DayType::Medium => self.medium,
            DayType::Low => self.low,
        }
    }

    pub fn sum(&self) -> f64 {
        self.high + self.medium + self.low
    }
}

/// Body-type variant selecting the carb/fat per-weight coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Endomorph,
}

/// User profile driving target allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Body weight in kg.
    pub weight: f64,

    pub body_type: BodyType,

    /// Protein grams per kg per day.
    pub protein_rate: f64,

    /// Fat grams per kg per day; consulted only for the endomorph variant.
    /// Expected range 1.0 to 1.2.
    pub fat_rate: f64,

    /// Cycle length in days.
    pub cycle_days: u32,

    pub day_counts: DayTypeCounts,

    pub carb_shares: DayTypeShares,

    pub fat_shares: DayTypeShares,

    /// Category assigned to each day of the cycle, length = cycle_days.
    pub placement: Vec<DayType>,
}

/// Macro targets for one day of the cycle. Derived from the profile and
/// recomputed whenever it changes; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTarget {
    pub day: usize,
    pub day_type: DayType,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// One planned food on a day: catalog reference, chosen preparation basis
/// and quantity in mass units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub food_id: String,
    pub basis: String,
    pub quantity: f64,
}

impl PlanEntry {
    pub fn new(food_id: impl Into<String>, basis: impl Into<String>, quantity: f64) -> Self {
        Self {
            food_id: food_id.into(),
            basis: basis.into(),
            quantity,
        }
    }
}

/// Realized macro totals over a set of plan entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_placement() {
        let placement = vec![
            DayType::High,
            DayType::Low,
            DayType::High,
            DayType::Medium,
        ];
        let counts = DayTypeCounts::tally(&placement);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_shares_sum() {
        let shares = DayTypeShares {
            high: 0.5,
            medium: 0.35,
            low: 0.15,
        };
        assert!((shares.sum() - 1.0).abs() < 1e-9);
    }
}
