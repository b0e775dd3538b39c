pub mod food;
pub mod profile;

pub use food::{FoodCatalog, FoodCategory, FoodItem, FoodVariant};
pub use profile::{
    BodyType, DayTarget, DayType, DayTypeCounts, DayTypeShares, PlanEntry, Profile, Totals,
};
