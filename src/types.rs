// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search feature.
//!
//! A [`Document`] is one indexed page; the engine hands back [`MatchResult`]s
//! that borrow documents from the index. The index is built once at page load
//! and never mutated; every type here is read-only after construction.
//!
//! # Invariants
//!
//! - **MatchResult**: `score` is finite and non-negative; lower is better.
//! - **MatchSpan**: `start < end ∧ end ≤ field.len()` in normalized-text bytes.
//! - Result ordering: ascending by score, ties broken by document index.

use serde::{Deserialize, Serialize};

/// Maximum number of results the renderer will show. No pagination.
pub const MAX_RESULTS: usize = 20;

/// One indexed page: title, plain-text body, and canonical link.
///
/// Serialized camelCase so the same JSON feeds the browser build and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    /// Plain-text rendering of the page content (markup already stripped).
    pub body: String,
    pub url: String,
}

/// Which field a match landed in. Title matches weigh twice as much as body
/// matches in the default [`EngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Body,
}

/// Byte range of a matched token within the normalized field text.
///
/// Only populated when [`EngineConfig::include_matches`] is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    pub field: MatchField,
    pub start: usize,
    pub end: usize,
}

/// A matched document with its fuzziness score and match locations.
///
/// Borrows the document from the engine's index; the engine returns these
/// pre-ranked (ascending score) and the caller does not re-sort.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub doc: &'a Document,
    /// Lower = better. 0.0 is an exact hit in every field.
    pub score: f64,
    pub spans: Vec<MatchSpan>,
}

/// Engine operating point.
///
/// The defaults are the tuned values for blog-sized corpora: title weighted
/// twice as heavily as body, tokens under 2 characters unmatchable, and up to
/// 40% of a token's length tolerated as edit distance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub title_weight: f64,
    pub body_weight: f64,
    /// Record match spans on results.
    pub include_matches: bool,
    /// Query tokens shorter than this never match.
    pub min_match_char_length: usize,
    /// Fraction of a token's length tolerated as edit distance (lower = stricter).
    pub threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title_weight: 2.0,
            body_weight: 1.0,
            include_matches: true,
            min_match_char_length: 2,
            threshold: 0.4,
        }
    }
}

/// Load the document index from its JSON form (an array of documents).
///
/// The index is produced by the site build step; by the time search starts it
/// is fully materialized, so this is the only deserialization path.
pub fn documents_from_json(json: &str) -> serde_json::Result<Vec<Document>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_round_trip_camel_case() {
        let json = r#"[{"title":"Hello","body":"world","url":"/posts/hello/"}]"#;
        let docs = documents_from_json(json).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Hello");
        assert_eq!(docs[0].url, "/posts/hello/");
    }

    #[test]
    fn default_config_matches_operating_point() {
        let config = EngineConfig::default();
        assert_eq!(config.title_weight, 2.0);
        assert_eq!(config.body_weight, 1.0);
        assert!(config.include_matches);
        assert_eq!(config.min_match_char_length, 2);
        assert!((config.threshold - 0.4).abs() < f64::EPSILON);
    }
}
