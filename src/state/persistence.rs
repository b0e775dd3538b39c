use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodCatalog;
use crate::state::PlanSession;

/// Load the food catalog from a JSON file.
///
/// Items without variants are dropped here so the planner can rely on
/// variant resolution always finding something; the planner itself does no
/// catalog validation.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let mut catalog: FoodCatalog = serde_json::from_str(&content)?;
    catalog.foods.retain(|f| !f.variants.is_empty());
    Ok(catalog)
}

/// Load a planning session from a JSON file.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<PlanSession> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a planning session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, session: &PlanSession) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json)?;
    Ok(())
}
