use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::decoder::CravingCatalog;
use crate::error::Result;

/// Minimum similarity for a catalog key to count as a "closest archetype".
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Prompt for the next craving to decode. Returns `None` when the user
/// submits an empty line, which ends the session.
pub fn prompt_craving() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("What are you craving? (press Enter to quit)")
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Catalog entries whose canonical name is close to `query`, best first.
///
/// Used after a fallback decode to point the user at known archetypes that
/// substring matching missed (typos, mostly).
pub fn suggest_archetypes<'a>(catalog: &'a CravingCatalog, query: &str) -> Vec<(&'a str, f64)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&str, f64)> = catalog
        .entries()
        .map(|(key, _)| (key, jaro_winkler(key, &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}
