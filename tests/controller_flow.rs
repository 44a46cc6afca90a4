//! Controller state-machine scenarios driven through the public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use teasel::{
    Document, Engine, Matcher, MatchResult, QueryInput, ResultsPanel, SearchController,
    DEBOUNCE_MS,
};

#[derive(Clone, Default)]
struct ScriptedInput(Rc<RefCell<String>>);

impl ScriptedInput {
    fn type_in(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

impl QueryInput for ScriptedInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

#[derive(Clone, Default)]
struct RecordingPanel {
    visible: Rc<Cell<bool>>,
    html: Rc<RefCell<String>>,
    clears: Rc<Cell<usize>>,
}

impl ResultsPanel for RecordingPanel {
    fn set_visible(&mut self, visible: bool) {
        self.visible.set(visible);
    }
    fn set_results(&mut self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
    }
    fn clear(&mut self) {
        self.html.borrow_mut().clear();
        self.clears.set(self.clears.get() + 1);
    }
}

struct CountingEngine {
    engine: Engine,
    searches: Rc<Cell<usize>>,
}

impl Matcher for CountingEngine {
    fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        self.searches.set(self.searches.get() + 1);
        self.engine.search(query)
    }
}

fn blog_docs() -> Vec<Document> {
    vec![
        Document {
            title: "Climbing Diary".to_string(),
            body: "notes from a week of climbing in the alps".to_string(),
            url: "/climbing/".to_string(),
        },
        Document {
            title: "Sourdough".to_string(),
            body: "a starter guide to baking sourdough bread".to_string(),
            url: "/sourdough/".to_string(),
        },
    ]
}

#[allow(clippy::type_complexity)]
fn bind() -> (
    SearchController<CountingEngine, ScriptedInput, RecordingPanel>,
    ScriptedInput,
    RecordingPanel,
    Rc<Cell<usize>>,
) {
    let searches = Rc::new(Cell::new(0));
    let matcher = CountingEngine {
        engine: Engine::with_defaults(blog_docs()),
        searches: Rc::clone(&searches),
    };
    let input = ScriptedInput::default();
    let panel = RecordingPanel::default();
    let controller =
        SearchController::bind(Some(matcher), Some(input.clone()), Some(panel.clone()));
    (controller, input, panel, searches)
}

#[test]
fn burst_of_keystrokes_evaluates_once_with_final_value() {
    let (mut controller, input, panel, searches) = bind();

    // Three input events at 50-unit intervals, then silence
    input.type_in("c");
    controller.on_input(0);
    input.type_in("cl");
    controller.on_input(50);
    input.type_in("climbing");
    controller.on_input(100);

    // Nothing fires during the burst or before the quiet period ends
    controller.tick(100);
    controller.tick(100 + DEBOUNCE_MS - 1);
    assert_eq!(searches.get(), 0);

    // Exactly one evaluation, 150 units after the last event
    controller.tick(100 + DEBOUNCE_MS);
    assert_eq!(searches.get(), 1);
    assert_eq!(controller.current_term(), "climbing");
    assert!(panel.visible.get());
    assert!(panel.html.borrow().contains("Climbing Diary"));
}

#[test]
fn resubmitting_the_same_query_is_a_noop() {
    let (mut controller, input, panel, searches) = bind();

    input.type_in("sourdough");
    controller.on_input(0);
    controller.tick(DEBOUNCE_MS);
    assert_eq!(searches.get(), 1);
    assert_eq!(panel.clears.get(), 1);
    let first_render = panel.html.borrow().clone();

    controller.on_input(500);
    controller.tick(500 + DEBOUNCE_MS);

    assert_eq!(searches.get(), 1, "unchanged query must not re-search");
    assert_eq!(panel.clears.get(), 1, "unchanged query must not re-clear");
    assert_eq!(*panel.html.borrow(), first_render);
    assert!(panel.visible.get());
}

#[test]
fn clearing_the_input_hides_the_panel_and_skips_the_engine() {
    let (mut controller, input, panel, searches) = bind();

    input.type_in("bread");
    controller.on_input(0);
    controller.tick(DEBOUNCE_MS);
    assert!(panel.visible.get());
    let searches_after_first = searches.get();

    input.type_in("");
    controller.on_input(300);
    controller.tick(300 + DEBOUNCE_MS);

    assert!(!panel.visible.get());
    assert!(panel.html.borrow().is_empty());
    assert_eq!(controller.current_term(), "");
    assert_eq!(searches.get(), searches_after_first);
}

#[test]
fn leading_and_trailing_whitespace_is_trimmed_before_comparison() {
    let (mut controller, input, panel, searches) = bind();

    input.type_in("climbing");
    controller.on_input(0);
    controller.tick(DEBOUNCE_MS);
    assert_eq!(searches.get(), 1);

    // Same term with padding: trims to an unchanged value
    input.type_in("  climbing  ");
    controller.on_input(400);
    controller.tick(400 + DEBOUNCE_MS);
    assert_eq!(searches.get(), 1);
    assert!(panel.visible.get());
}

#[test]
fn multi_word_query_highlights_each_term() {
    let (mut controller, input, panel, _searches) = bind();

    input.type_in("sourdough bread");
    controller.on_input(0);
    controller.tick(DEBOUNCE_MS);

    let html = panel.html.borrow();
    assert!(html.contains("<em>sourdough</em>"));
    assert!(html.contains("<em>bread</em>"));
}

#[test]
fn no_match_query_shows_placeholder_not_error() {
    let (mut controller, input, panel, _searches) = bind();

    input.type_in("zzzzzzzz");
    controller.on_input(0);
    controller.tick(DEBOUNCE_MS);

    assert!(panel.visible.get());
    assert!(panel.html.borrow().contains("search-no-results"));
}

#[test]
fn unbound_controller_stays_idle_forever() {
    let mut controller: SearchController<CountingEngine, ScriptedInput, RecordingPanel> =
        SearchController::bind(None, None, None);

    assert!(!controller.is_active());
    controller.on_input(0);
    controller.tick(10_000);
    assert!(!controller.evaluation_pending());
    assert_eq!(controller.current_term(), "");
}
