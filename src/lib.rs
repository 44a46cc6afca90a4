//! Client-side incremental fuzzy search for static blogs.
//!
//! This crate is the search feature of a static site, in library form: it
//! indexes pre-rendered page content, matches a typed query against that
//! index with typo tolerance, and renders ranked, highlighted result
//! snippets. The index is materialized fully in memory before search begins;
//! there is no server, no persistence, and no network fetching.
//!
//! # Architecture
//!
//! ```text
//! keystroke ──▶ controller.rs ──▶ engine.rs ──▶ render.rs ──▶ teaser.rs
//!              (debounce,         (fuzzy         (fragments,   (excerpt +
//!               panel state)       ranking)       truncation)   <em> marks)
//! ```
//!
//! The controller owns the pipeline: it debounces raw input events, runs the
//! engine with the trimmed query, and hands the ranked matches plus the split
//! term set to the renderer. Collaborators (engine, input, panel) are
//! injected at bind time; a missing collaborator produces a disabled no-op
//! controller rather than an error.
//!
//! # Usage
//!
//! ```ignore
//! use teasel::{documents_from_json, Engine, Matcher, render_results, MAX_RESULTS};
//!
//! let docs = documents_from_json(&index_json)?;
//! let engine = Engine::with_defaults(docs);
//!
//! let matches = engine.search("photgraphy");   // typo-tolerant
//! let html = render_results(&matches, &terms, MAX_RESULTS);
//! ```

// Module declarations
pub mod cli;
mod controller;
mod engine;
mod fuzzy;
mod render;
mod teaser;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use controller::{Debouncer, QueryInput, ResultsPanel, SearchController, DEBOUNCE_MS};
pub use engine::{Engine, Matcher};
pub use fuzzy::bounded_levenshtein;
pub use render::{format_result, render_results, NO_RESULTS_HTML};
pub use teaser::{build_teaser, TEASER_CONTEXT_CHARS, TEASER_WINDOW_CHARS};
pub use types::{
    documents_from_json, Document, EngineConfig, MatchField, MatchResult, MatchSpan, MAX_RESULTS,
};
pub use utils::normalize;
