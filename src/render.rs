// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rendering: matches in, display fragments out.
//!
//! Each fragment carries the title, the teaser, and a link whose label and
//! target are both the document URL. Titles are rendered verbatim; the index
//! is produced from the site's own pre-sanitized content, so the renderer
//! trusts it. The list is truncated to [`MAX_RESULTS`](crate::types::MAX_RESULTS)
//! with a separator between adjacent fragments and a placeholder when nothing
//! matched.

use crate::teaser::build_teaser;
use crate::types::{Document, MatchResult};

/// Shown when a non-empty query matches nothing. Not an error state.
pub const NO_RESULTS_HTML: &str = "<div class=\"search-no-results\">No results found.</div>";

const SEPARATOR_HTML: &str = "<hr class=\"search-result-separator\">";

/// Render one matched document as a display fragment.
///
/// `is_last` suppresses the trailing separator on the final fragment of the
/// truncated list.
pub fn format_result(doc: &Document, terms: &[String], is_last: bool) -> String {
    let teaser = build_teaser(&doc.body, terms);

    let mut fragment = String::with_capacity(teaser.len() + doc.title.len() + 128);
    fragment.push_str("<div class=\"search-result\">");
    fragment.push_str("<h3 class=\"search-result-title\">");
    fragment.push_str(&doc.title);
    fragment.push_str("</h3>");
    fragment.push_str("<p class=\"search-result-teaser\">");
    fragment.push_str(&teaser);
    fragment.push_str("</p>");
    fragment.push_str(&format!(
        "<a class=\"search-result-link\" href=\"{url}\">{url}</a>",
        url = doc.url
    ));
    fragment.push_str("</div>");
    if !is_last {
        fragment.push_str(SEPARATOR_HTML);
    }
    fragment
}

/// Assemble the visible result list, truncated to `max_items`.
pub fn render_results(matches: &[MatchResult<'_>], terms: &[String], max_items: usize) -> String {
    if matches.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }

    let shown = matches.len().min(max_items);
    matches[..shown]
        .iter()
        .enumerate()
        .map(|(i, m)| format_result(m.doc, terms, i + 1 == shown))
        .collect()
}
