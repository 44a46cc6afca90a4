// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The approximate matching engine.
//!
//! Blog indexes are small (tens to low hundreds of documents), so the engine
//! scans every document per query instead of maintaining posting lists. Each
//! query token is scored against each field: exact substring containment is a
//! perfect 0.0, otherwise the best bounded edit distance over the field's
//! words gives `distance / token_length`. Field scores combine through the
//! configured weights, so a title hit outranks an equally good body hit.
//!
//! Scores are fuzziness: **lower is better**, 0.0 is exact. Results come back
//! pre-ranked and callers must not re-sort.
//!
//! # Invariants
//!
//! - A document is returned iff at least one token matched at least one field
//!   within the threshold.
//! - Ordering: ascending score, ties broken by document index (deterministic
//!   for identical inputs).

use crate::fuzzy::bounded_levenshtein;
use crate::types::{Document, EngineConfig, MatchField, MatchResult, MatchSpan};
use crate::utils::{normalize, words_with_offsets};

/// Seam between the controller and whatever does the matching.
///
/// The production implementation is [`Engine`]; tests substitute counting or
/// canned matchers to observe controller behavior.
pub trait Matcher {
    /// Run the query against the index, returning ranked matches.
    fn search(&self, query: &str) -> Vec<MatchResult<'_>>;
}

/// A normalized field plus the byte spans of its words.
struct FieldText {
    norm: String,
    /// (start, end) byte ranges of each word in `norm`.
    words: Vec<(usize, usize)>,
}

impl FieldText {
    fn new(raw: &str) -> Self {
        let norm = normalize(raw);
        let words = words_with_offsets(&norm)
            .into_iter()
            .map(|(start, word)| (start, start + word.len()))
            .collect();
        Self { norm, words }
    }
}

/// Per-token outcome within one field.
struct TokenHit {
    /// `distance / token_length`, 0.0 for substring containment.
    score: f64,
    span: (usize, usize),
}

/// The in-memory fuzzy search engine over a static document index.
///
/// Normalized field texts are computed once at construction; `search` itself
/// allocates only per-result state.
pub struct Engine {
    docs: Vec<Document>,
    fields: Vec<[FieldText; 2]>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(docs: Vec<Document>, config: EngineConfig) -> Self {
        let fields = docs
            .iter()
            .map(|doc| [FieldText::new(&doc.title), FieldText::new(&doc.body)])
            .collect();
        Self {
            docs,
            fields,
            config,
        }
    }

    /// Build with the default operating point (title ×2, threshold 0.4).
    pub fn with_defaults(docs: Vec<Document>) -> Self {
        Self::new(docs, EngineConfig::default())
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one token against one field. `None` when the token matches
    /// nowhere in the field within the edit budget.
    fn score_token(&self, field: &FieldText, token: &str, token_chars: usize) -> Option<TokenHit> {
        // Exact substring containment is a perfect hit.
        if let Some(pos) = field.norm.find(token) {
            return Some(TokenHit {
                score: 0.0,
                span: (pos, pos + token.len()),
            });
        }

        // Edit budget: up to threshold × token length, rounded down. Tokens of
        // two characters get budget 0, so they only ever match exactly.
        let max_edits = (self.config.threshold * token_chars as f64).floor() as usize;
        if max_edits == 0 {
            return None;
        }

        let mut best: Option<(usize, (usize, usize))> = None;
        for &(start, end) in &field.words {
            let word = &field.norm[start..end];
            if let Some(dist) = bounded_levenshtein(word, token, max_edits) {
                if best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, (start, end)));
                }
            }
        }

        best.map(|(dist, span)| TokenHit {
            score: dist as f64 / token_chars as f64,
            span,
        })
    }

    /// Mean per-token score for a field, counting unmatched tokens as 1.0.
    ///
    /// Returns the score, the spans of matched tokens, and whether anything
    /// matched at all.
    fn score_field(
        &self,
        field: &FieldText,
        kind: MatchField,
        tokens: &[(String, usize)],
        spans: &mut Vec<MatchSpan>,
    ) -> (f64, bool) {
        let mut total = 0.0;
        let mut matched = false;

        for (token, token_chars) in tokens {
            match self.score_token(field, token, *token_chars) {
                Some(hit) => {
                    total += hit.score;
                    matched = true;
                    if self.config.include_matches {
                        spans.push(MatchSpan {
                            field: kind,
                            start: hit.span.0,
                            end: hit.span.1,
                        });
                    }
                }
                None => total += 1.0,
            }
        }

        (total / tokens.len() as f64, matched)
    }
}

impl Matcher for Engine {
    fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        let tokens: Vec<(String, usize)> = normalize(query)
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| (t.to_string(), t.chars().count()))
            .filter(|(_, chars)| *chars >= self.config.min_match_char_length)
            .collect();

        if tokens.is_empty() {
            return Vec::new();
        }

        let weight_sum = self.config.title_weight + self.config.body_weight;
        let mut results: Vec<(usize, f64, Vec<MatchSpan>)> = Vec::new();

        for (doc_id, [title, body]) in self.fields.iter().enumerate() {
            let mut spans = Vec::new();
            let (title_score, title_hit) =
                self.score_field(title, MatchField::Title, &tokens, &mut spans);
            let (body_score, body_hit) =
                self.score_field(body, MatchField::Body, &tokens, &mut spans);

            if !(title_hit || body_hit) {
                continue;
            }

            let score = (self.config.title_weight * title_score
                + self.config.body_weight * body_score)
                / weight_sum;
            results.push((doc_id, score, spans));
        }

        // Ascending: lower fuzziness first. Tie-break on document index so
        // identical queries always produce identical orderings.
        results.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        results
            .into_iter()
            .map(|(doc_id, score, spans)| MatchResult {
                doc: &self.docs[doc_id],
                score,
                spans,
            })
            .collect()
    }
}
