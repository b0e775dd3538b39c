use clap::{Parser, Subcommand};

/// CarbCycler — a carb-cycling planner that allocates per-day macro targets
/// and solves food quantities to meet them.
#[derive(Parser, Debug)]
#[command(name = "carb_cycler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub catalog: String,

    /// Path to the planning session JSON file.
    #[arg(short, long, default_value = "plan_session.json")]
    pub session: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show per-day macro targets for the cycle.
    Targets,

    /// Check the profile for consistency problems.
    Validate,

    /// Repair the day-type placement to match the required counts.
    Normalize,

    /// Pick foods for a day and solve their quantities.
    Plan {
        /// Day of the cycle, 1-based.
        day: usize,
    },

    /// Re-solve quantities for a day's existing foods.
    Solve {
        /// Day of the cycle, 1-based.
        day: usize,
    },

    /// Export targets and realized totals as CSV.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "cycle_plan.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Targets
    }
}
