use clap::Parser;
use std::path::Path;

use carb_cycler_rs::cli::{Cli, Command};
use carb_cycler_rs::error::{PlanError, Result};
use carb_cycler_rs::interface::{
    display_cycle_targets, display_day_plan, display_issues, prompt_day_entries, prompt_profile,
    prompt_yes_no, write_cycle_csv,
};
use carb_cycler_rs::models::FoodCatalog;
use carb_cycler_rs::state::{load_catalog, load_session, save_session, PlanSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Targets => cmd_targets(&cli.session),
        Command::Validate => cmd_validate(&cli.session),
        Command::Normalize => cmd_normalize(&cli.session),
        Command::Plan { day } => cmd_plan(&cli.session, &cli.catalog, day),
        Command::Solve { day } => cmd_solve(&cli.session, &cli.catalog, day),
        Command::Export { output } => cmd_export(&cli.session, &cli.catalog, &output),
    }
}

/// Load the session, creating one interactively if the file is missing.
fn open_session(path: &str) -> Result<PlanSession> {
    if Path::new(path).exists() {
        return load_session(path);
    }

    println!("No session found at {}; let's set up a profile.", path);
    let profile = prompt_profile()?;
    let session = PlanSession::new(profile);
    save_session(path, &session)?;
    println!("Session saved to {}.", path);
    Ok(session)
}

fn open_catalog(path: &str) -> Result<FoodCatalog> {
    if !Path::new(path).exists() {
        return Err(PlanError::InvalidInput(format!(
            "Food catalog not found: {}",
            path
        )));
    }
    let catalog = load_catalog(path)?;
    println!("Loaded {} foods ({})", catalog.len(), catalog.unit);
    Ok(catalog)
}

fn cmd_targets(session_path: &str) -> Result<()> {
    let session = open_session(session_path)?;

    let issues = session.validate();
    if !issues.is_empty() {
        display_issues(&issues);
        println!();
    }

    display_cycle_targets(&session.targets());
    Ok(())
}

fn cmd_validate(session_path: &str) -> Result<()> {
    let session = open_session(session_path)?;
    display_issues(&session.validate());
    Ok(())
}

fn cmd_normalize(session_path: &str) -> Result<()> {
    let mut session = open_session(session_path)?;

    if session.normalize_placement() {
        save_session(session_path, &session)?;
        println!("Placement repaired and session saved.");
    } else {
        println!("Placement already matches the required counts.");
    }

    let placement: Vec<&str> = session
        .profile()
        .placement
        .iter()
        .map(|dt| dt.label())
        .collect();
    println!("Placement: {}", placement.join(", "));
    Ok(())
}

fn cmd_plan(session_path: &str, catalog_path: &str, day: usize) -> Result<()> {
    let mut session = open_session(session_path)?;
    let catalog = open_catalog(catalog_path)?;
    let day_index = to_day_index(&session, day)?;

    println!("Pick foods for day {}.", day);
    let entries = prompt_day_entries(&catalog)?;
    if entries.is_empty() {
        println!("No foods picked; nothing to solve.");
        return Ok(());
    }

    session.set_day_entries(day_index, entries)?;
    solve_and_show(&mut session, &catalog, day_index)?;

    if prompt_yes_no("Save session?", true)? {
        save_session(session_path, &session)?;
        println!("Session saved.");
    }
    Ok(())
}

fn cmd_solve(session_path: &str, catalog_path: &str, day: usize) -> Result<()> {
    let mut session = open_session(session_path)?;
    let catalog = open_catalog(catalog_path)?;
    let day_index = to_day_index(&session, day)?;

    if session.day_entries(day_index)?.is_empty() {
        println!("Day {} has no foods; use 'plan {}' to pick some.", day, day);
        return Ok(());
    }

    solve_and_show(&mut session, &catalog, day_index)?;
    save_session(session_path, &session)?;
    println!("Session saved.");
    Ok(())
}

fn cmd_export(session_path: &str, catalog_path: &str, output: &str) -> Result<()> {
    let session = open_session(session_path)?;
    let catalog = open_catalog(catalog_path)?;

    write_cycle_csv(Path::new(output), &session, &catalog)?;
    println!("Wrote cycle plan to {}", output);
    Ok(())
}

fn to_day_index(session: &PlanSession, day: usize) -> Result<usize> {
    if day == 0 || day > session.cycle_days() {
        return Err(PlanError::DayOutOfRange(day));
    }
    Ok(day - 1)
}

fn solve_and_show(session: &mut PlanSession, catalog: &FoodCatalog, day_index: usize) -> Result<()> {
    session.solve_day(day_index, catalog)?;

    let targets = session.targets();
    let totals = session.day_totals(day_index, catalog)?;
    display_day_plan(
        session.day_entries(day_index)?,
        &totals,
        &targets.day_targets[day_index],
        catalog,
    );
    Ok(())
}
