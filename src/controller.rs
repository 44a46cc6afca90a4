// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search controller: keystrokes in, rendered results out.
//!
//! The controller owns the match engine, reads the query input through
//! [`QueryInput`], and drives the results panel through [`ResultsPanel`].
//! Keystrokes are debounced: each input event re-arms a single deadline
//! 150 time units out, and only a `tick` past that deadline evaluates the
//! query. Everything runs on one thread: the hosting event loop calls
//! `on_input` and `tick`, and no evaluation can re-enter another.
//!
//! # States
//!
//! - **Idle**: a collaborator was missing at bind time. The controller is a
//!   permanent no-op; this is a deliberate silent skip, not an error.
//! - **Armed**: bound, panel hidden, `current_term` empty.
//! - **Active**: panel visible with the last non-empty query rendered.
//!
//! Invariant: the panel is visible iff the last accepted query is non-empty.

use crate::engine::Matcher;
use crate::render::render_results;
use crate::types::MAX_RESULTS;

/// Quiet period after the last keystroke before evaluation runs, in the
/// hosting environment's time units (milliseconds in the browser).
pub const DEBOUNCE_MS: u64 = 150;

/// Read side of the query input affordance.
pub trait QueryInput {
    /// Current raw input value.
    fn value(&self) -> String;
}

/// Write side of the results panel.
pub trait ResultsPanel {
    fn set_visible(&mut self, visible: bool);
    fn set_results(&mut self, html: &str);
    fn clear(&mut self);
}

/// Cancellable deadline: each recorded event supersedes the previous one, so
/// a burst of keystrokes collapses into a single evaluation.
#[derive(Debug, Default)]
pub struct Debouncer {
    delay: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(delay: u64) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event at `now`, re-arming the deadline.
    pub fn record(&mut self, now: u64) {
        self.deadline = Some(now + self.delay);
    }

    /// Consume the deadline if it has passed. Returns true at most once per
    /// armed deadline.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Wires the engine, input, and panel together.
///
/// Collaborators are injected at bind time; if any is absent the controller
/// binds disabled and every method is a no-op.
pub struct SearchController<M, I, P> {
    inner: Option<Bound<M, I, P>>,
}

struct Bound<M, I, P> {
    matcher: M,
    input: I,
    panel: P,
    debounce: Debouncer,
    /// Last query string actually rendered. Suppresses redundant re-renders
    /// when the debounced input fires with an unchanged value.
    current_term: String,
    max_results: usize,
}

impl<M: Matcher, I: QueryInput, P: ResultsPanel> SearchController<M, I, P> {
    /// Bind to the collaborators, or become a permanent no-op if any is
    /// missing (missing index or input element on a page without search).
    pub fn bind(matcher: Option<M>, input: Option<I>, panel: Option<P>) -> Self {
        let inner = match (matcher, input, panel) {
            (Some(matcher), Some(input), Some(panel)) => Some(Bound {
                matcher,
                input,
                panel,
                debounce: Debouncer::new(DEBOUNCE_MS),
                current_term: String::new(),
                max_results: MAX_RESULTS,
            }),
            _ => None,
        };
        Self { inner }
    }

    /// Whether the controller bound successfully.
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// The last rendered query, empty when the panel is hidden.
    pub fn current_term(&self) -> &str {
        self.inner
            .as_ref()
            .map(|b| b.current_term.as_str())
            .unwrap_or("")
    }

    /// Notify the controller of a raw input event at `now`.
    pub fn on_input(&mut self, now: u64) {
        if let Some(bound) = self.inner.as_mut() {
            bound.debounce.record(now);
        }
    }

    /// Advance time. Runs the pending evaluation once the quiet period has
    /// elapsed since the last input event.
    pub fn tick(&mut self, now: u64) {
        if let Some(bound) = self.inner.as_mut() {
            if bound.debounce.fire(now) {
                bound.evaluate();
            }
        }
    }

    /// Whether an evaluation is scheduled but not yet run.
    pub fn evaluation_pending(&self) -> bool {
        self.inner
            .as_ref()
            .map(|b| b.debounce.pending())
            .unwrap_or(false)
    }
}

impl<M: Matcher, I: QueryInput, P: ResultsPanel> Bound<M, I, P> {
    fn evaluate(&mut self) {
        let term = self.input.value().trim().to_string();

        // Unchanged value: focus/blur churn or a repeated submission. Leave
        // the rendered list and panel exactly as they are.
        if term == self.current_term {
            return;
        }

        self.current_term = term.clone();
        self.panel.set_visible(!term.is_empty());
        self.panel.clear();

        if term.is_empty() {
            return;
        }

        // The raw trimmed value goes to the engine; the split term set goes
        // to the renderer for highlighting.
        let terms: Vec<String> = term.split_whitespace().map(str::to_string).collect();
        let matches = self.matcher.search(&term);
        let html = render_results(&matches, &terms, self.max_results);
        self.panel.set_results(&html);
    }
}
