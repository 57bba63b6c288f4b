//! Typed decoding for the networked decoder variant's responses.
//!
//! A sibling front end POSTs `{ "craving": ... }` to a local recipe server
//! and gets back either a JSON array of recipe hits or an `{ "error": ... }`
//! payload. The server itself is an external collaborator; this module only
//! turns its response body into validated records, failing closed on
//! anything malformed. Transport (and the unreachable-server case) is the
//! caller's problem, surfaced as a recoverable error, never a panic.

use serde::{Deserialize, Serialize};

use crate::error::{CraveError, Result};

/// One recipe suggestion returned by the remote decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeHit {
    pub title: String,
    pub calories: f64,
    pub region: String,
    pub continent: String,
    pub health_score: f64,
    pub ingredients: Vec<String>,
}

impl RecipeHit {
    /// Reject hits the UI could not meaningfully display.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CraveError::RemoteRejected(
                "recipe hit with empty title".to_string(),
            ));
        }
        if !self.calories.is_finite() || self.calories < 0.0 {
            return Err(CraveError::RemoteRejected(format!(
                "recipe '{}' has invalid calories: {}",
                self.title, self.calories
            )));
        }
        if !self.health_score.is_finite() || !(0.0..=100.0).contains(&self.health_score) {
            return Err(CraveError::RemoteRejected(format!(
                "recipe '{}' has out-of-range health score: {}",
                self.title, self.health_score
            )));
        }
        Ok(())
    }
}

/// The two body shapes the server emits: a hit array on success, an error
/// object otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DecodeResponse {
    Hits(Vec<RecipeHit>),
    Failure { error: String },
}

/// Parse and validate a decode response body.
///
/// Malformed JSON, an error payload, a hit that fails validation, and an
/// empty hit list are all recoverable errors.
pub fn parse_decode_response(body: &str) -> Result<Vec<RecipeHit>> {
    let response: DecodeResponse = serde_json::from_str(body)?;

    match response {
        DecodeResponse::Failure { error } => Err(CraveError::RemoteRejected(error)),
        DecodeResponse::Hits(hits) => {
            if hits.is_empty() {
                return Err(CraveError::NoAlternativesFound);
            }
            for hit in &hits {
                hit.validate()?;
            }
            Ok(hits)
        }
    }
}
