use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{
    BodyType, DayType, DayTypeCounts, DayTypeShares, FoodCatalog, FoodItem, PlanEntry, Profile,
};

fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Not a number: '{}'", input.trim())))
}

fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    parse_number(&input)
}

fn prompt_u32(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Not a whole number: '{}'", input.trim())))
}

fn prompt_shares(label: &str, defaults: DayTypeShares) -> Result<DayTypeShares> {
    Ok(DayTypeShares {
        high: prompt_f64(&format!("{} share for high days", label), defaults.high)?,
        medium: prompt_f64(&format!("{} share for medium days", label), defaults.medium)?,
        low: prompt_f64(&format!("{} share for low days", label), defaults.low)?,
    })
}

/// Default placement for fresh profiles: high days first, then medium,
/// then low.
fn default_placement(counts: DayTypeCounts) -> Vec<DayType> {
    let mut placement = Vec::with_capacity(counts.total() as usize);
    for day_type in DayType::ALL {
        placement.extend(std::iter::repeat_n(day_type, counts.get(day_type) as usize));
    }
    placement
}

/// Collect a full profile interactively.
pub fn prompt_profile() -> Result<Profile> {
    let weight = prompt_f64("Body weight (kg)", 70.0)?;
    if weight <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }

    let body_types = ["Ectomorph", "Endomorph"];
    let selection = Select::new()
        .with_prompt("Body type")
        .items(&body_types)
        .default(0)
        .interact()?;
    let body_type = if selection == 0 {
        BodyType::Ectomorph
    } else {
        BodyType::Endomorph
    };

    let protein_rate = prompt_f64("Protein rate (g per kg per day)", 1.2)?;

    // Only the endomorph coefficients consult this; keep the default for
    // ectomorphs so switching body type later behaves sensibly.
    let fat_rate = match body_type {
        BodyType::Endomorph => prompt_f64("Fat rate (g per kg per day, 1.0-1.2)", 1.0)?,
        BodyType::Ectomorph => 1.0,
    };

    let cycle_days = prompt_u32("Cycle length (days)", 5)?;
    if cycle_days == 0 || cycle_days > 14 {
        return Err(PlanError::InvalidInput(
            "Cycle length must be between 1 and 14 days".to_string(),
        ));
    }

    let day_counts = DayTypeCounts {
        high: prompt_u32("High-carb days", 2)?,
        medium: prompt_u32("Medium-carb days", 2)?,
        low: prompt_u32("Low-carb days", 1)?,
    };

    let carb_shares = prompt_shares(
        "Carb",
        DayTypeShares {
            high: 0.5,
            medium: 0.35,
            low: 0.15,
        },
    )?;
    let fat_shares = prompt_shares(
        "Fat",
        DayTypeShares {
            high: 0.2,
            medium: 0.35,
            low: 0.45,
        },
    )?;

    Ok(Profile {
        weight,
        body_type,
        protein_rate,
        fat_rate,
        cycle_days,
        day_counts,
        carb_shares,
        fat_shares,
        placement: default_placement(day_counts),
    })
}

/// Find a catalog food by typed name: exact id or name match first
/// (case-insensitive), then fuzzy matching with disambiguation.
fn match_food<'a>(catalog: &'a FoodCatalog, input: &str) -> Result<Option<&'a FoodItem>> {
    let needle = input.to_lowercase();

    let exact = catalog.foods.iter().find(|f| f.matches_name(&needle));
    if exact.is_some() {
        return Ok(exact);
    }

    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Pick foods for one day. Quantities start at zero; the solver assigns
/// them.
pub fn prompt_day_entries(catalog: &FoodCatalog) -> Result<Vec<PlanEntry>> {
    let mut entries = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Add a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(food) = match_food(catalog, input)? else {
            continue;
        };

        let basis = if food.variants.len() == 1 {
            food.variants[0].basis.clone()
        } else {
            let bases: Vec<&str> = food.variants.iter().map(|v| v.basis.as_str()).collect();
            let selection = Select::new()
                .with_prompt(format!("Preparation for '{}'", food.name))
                .items(&bases)
                .default(0)
                .interact()?;
            bases[selection].to_string()
        };

        entries.push(PlanEntry::new(food.id.clone(), basis, 0.0));
        println!("Added: {}", food.name);
    }

    Ok(entries)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
