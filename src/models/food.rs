use serde::{Deserialize, Serialize};

/// Dominant-macro category of a food, used to group entries during the
/// solver's seeding phase. Foods tagged `Other` never seed any macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carb,
    Fat,
    #[serde(other)]
    Other,
}

/// A preparation state of a food with its own nutrient densities.
///
/// Densities are per 100 mass units of the catalog's unit (usually grams).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodVariant {
    /// Basis tag, e.g. "raw" or "cooked".
    pub basis: String,

    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    /// Energy per 100 units; not every catalog records it.
    #[serde(default)]
    pub kcal: Option<f64>,
}

/// A catalog food with one or more preparation variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    /// Secondary display name for localized rendering.
    #[serde(default)]
    pub localized_name: Option<String>,

    pub category: FoodCategory,

    pub variants: Vec<FoodVariant>,
}

impl FoodItem {
    /// Resolve a variant by basis tag, falling back to the first variant.
    ///
    /// Returns `None` only for a food with no variants at all; the catalog
    /// loader filters those out before they reach the planner.
    pub fn resolve_variant(&self, basis: &str) -> Option<&FoodVariant> {
        self.variants
            .iter()
            .find(|v| v.basis == basis)
            .or_else(|| self.variants.first())
    }

    /// True if the food's id or either display name equals `needle`.
    /// Expects an already-lowercased needle.
    pub fn matches_name(&self, needle: &str) -> bool {
        self.id.to_lowercase() == needle
            || self.name.to_lowercase() == needle
            || self
                .localized_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase() == needle)
    }
}

/// The read-only food catalog consumed by the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalog {
    pub version: u32,

    /// Mass unit label, e.g. "g".
    pub unit: String,

    pub foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Look up a food by id.
    ///
    /// A miss returns `None` rather than an error: plan entries may
    /// reference foods that were later removed from the catalog, and those
    /// entries contribute zero instead of breaking the plan.
    pub fn find(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
