//! WebAssembly bindings for the search widget.
//!
//! The blog's JS shim constructs a [`TeaselSearch`] from the index JSON it
//! embeds at build time, then calls `search` / `render` from a debounced
//! input handler. Everything is single-threaded; the browser event loop is
//! the scheduler.

use crate::engine::{Engine, Matcher};
use crate::render::render_results;
use crate::teaser::build_teaser;
use crate::types::{Document, EngineConfig, MAX_RESULTS};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput {
    title: String,
    url: String,
    /// Highlighted excerpt, `<em>`-marked HTML.
    teaser: String,
    /// Fuzziness: lower is better, 0.0 is exact.
    score: f64,
}

/// Engine options passed from JavaScript. All fields optional.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EngineOptions {
    title_weight: f64,
    body_weight: f64,
    include_matches: bool,
    min_match_char_length: usize,
    threshold: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            title_weight: config.title_weight,
            body_weight: config.body_weight,
            include_matches: config.include_matches,
            min_match_char_length: config.min_match_char_length,
            threshold: config.threshold,
        }
    }
}

impl From<EngineOptions> for EngineConfig {
    fn from(options: EngineOptions) -> Self {
        Self {
            title_weight: options.title_weight,
            body_weight: options.body_weight,
            include_matches: options.include_matches,
            min_match_char_length: options.min_match_char_length,
            threshold: options.threshold,
        }
    }
}

/// WASM-accessible search widget over the page's document index.
#[wasm_bindgen]
pub struct TeaselSearch {
    engine: Engine,
}

#[wasm_bindgen]
impl TeaselSearch {
    /// Create a widget from an array of `{title, body, url}` records.
    ///
    /// `options` may be `undefined` to use the default operating point.
    #[wasm_bindgen(constructor)]
    pub fn new(documents: JsValue, options: JsValue) -> Result<TeaselSearch, JsValue> {
        let docs: Vec<Document> = from_value(documents)
            .map_err(|e| JsValue::from(format!("invalid document index: {e}")))?;
        let options: EngineOptions = if options.is_undefined() || options.is_null() {
            EngineOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from(format!("invalid options: {e}")))?
        };
        Ok(TeaselSearch {
            engine: Engine::new(docs, options.into()),
        })
    }

    /// Ranked results as `{title, url, teaser, score}` records, truncated to
    /// the display limit.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_string).collect();
        let output: Vec<SearchResultOutput> = self
            .engine
            .search(query.trim())
            .into_iter()
            .take(MAX_RESULTS)
            .map(|m| SearchResultOutput {
                title: m.doc.title.clone(),
                url: m.doc.url.clone(),
                teaser: build_teaser(&m.doc.body, &terms),
                score: m.score,
            })
            .collect();
        to_value(&output).map_err(|e| JsValue::from(e.to_string()))
    }

    /// The assembled HTML fragment for the results list, placeholder included.
    #[wasm_bindgen]
    pub fn render(&self, query: &str) -> String {
        let trimmed = query.trim();
        let terms: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
        let matches = self.engine.search(trimmed);
        render_results(&matches, &terms, MAX_RESULTS)
    }

    #[wasm_bindgen]
    pub fn doc_count(&self) -> usize {
        self.engine.docs().len()
    }
}
