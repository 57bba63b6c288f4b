pub mod prompts;
pub mod render;

pub use prompts::{prompt_craving, prompt_yes_no, suggest_archetypes};
pub use render::{display_catalog, display_craving_report, export_catalog};
