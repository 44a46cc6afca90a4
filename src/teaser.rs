// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Teaser extraction: a bounded excerpt of the body around the first match.
//!
//! The window math is in **characters** to match what the browser shows: at
//! most 200 characters, starting 50 before the earliest term occurrence, with
//! `…` marking a clipped edge. Matched terms are wrapped in `<em>` by one
//! global case-insensitive replacement pass per term, in the given order.
//!
//! Known quirk, kept on purpose: later terms' passes run over the already
//! marked string, so overlapping terms produce nested or duplicated `<em>`
//! markup. Downstream CSS renders that identically, and fixing it would
//! change behavior the tests pin.

use regex::Regex;

/// Maximum teaser length in characters, before ellipses and markup.
pub const TEASER_WINDOW_CHARS: usize = 200;

/// Characters of context kept before the first term occurrence.
pub const TEASER_CONTEXT_CHARS: usize = 50;

const ELLIPSIS: char = '…';

/// Extract a highlighted excerpt of `body` around the earliest occurrence of
/// any of `terms`.
///
/// Pure and total: empty body gives an empty string, and a body where no term
/// occurs falls back to an excerpt from position 0. Terms are matched
/// case-insensitively and literally: regex metacharacters in a term are
/// escaped, so `"$5.00"` highlights exactly `$5.00`.
pub fn build_teaser(body: &str, terms: &[String]) -> String {
    if body.is_empty() {
        return String::new();
    }

    let body_len = body.chars().count();
    // Clamp: lowercasing can expand character counts (İ → i̇), so the anchor
    // measured in the lowercased body may overshoot the original.
    let anchor = first_occurrence_char(body, terms).unwrap_or(0).min(body_len);

    let start = anchor.saturating_sub(TEASER_CONTEXT_CHARS);
    let end = body_len.min(start + TEASER_WINDOW_CHARS);

    let excerpt: String = body.chars().skip(start).take(end - start).collect();
    let marked = mark_terms(&excerpt, terms);

    let mut teaser = String::with_capacity(marked.len() + 8);
    if start > 0 {
        teaser.push(ELLIPSIS);
    }
    teaser.push_str(&marked);
    if end < body_len {
        teaser.push(ELLIPSIS);
    }
    teaser
}

/// Character position of the earliest case-insensitive occurrence of any term.
fn first_occurrence_char(body: &str, terms: &[String]) -> Option<usize> {
    let lower = body.to_lowercase();
    let mut first: Option<usize> = None;

    for term in terms {
        let term_lower = term.to_lowercase();
        if term_lower.is_empty() {
            continue;
        }
        if let Some(pos) = lower.find(&term_lower) {
            if first.map_or(true, |p| pos < p) {
                first = Some(pos);
            }
        }
    }

    // Byte position in the lowercased body → character position. Lowercasing
    // preserves character counts for the text we index.
    first.map(|pos| lower[..pos].chars().count())
}

/// One global case-insensitive replacement pass per term, in order. Each pass
/// operates on the output of the previous one.
fn mark_terms(excerpt: &str, terms: &[String]) -> String {
    let mut marked = excerpt.to_string();

    for term in terms {
        if term.is_empty() {
            continue;
        }
        let pattern = format!("(?i){}", regex::escape(term));
        // regex::escape output always parses; skip the term rather than panic
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        marked = re.replace_all(&marked, "<em>${0}</em>").into_owned();
    }

    marked
}
