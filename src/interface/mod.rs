pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_cycle_csv;
pub use prompts::{prompt_day_entries, prompt_profile, prompt_yes_no};
pub use render::{display_cycle_targets, display_day_plan, display_issues};
