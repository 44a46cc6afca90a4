//! End-to-end tests through the public API: index JSON in, HTML out.

use teasel::{
    build_teaser, documents_from_json, render_results, Document, Engine, Matcher, MatchResult,
    MAX_RESULTS, NO_RESULTS_HTML,
};

fn fixture_json() -> String {
    let docs: Vec<Document> = (0..25)
        .map(|i| Document {
            title: format!("Post number {i}"),
            body: format!("shared keyword plus filler text for post {i}"),
            url: format!("/posts/{i}/"),
        })
        .collect();
    serde_json::to_string(&docs).unwrap()
}

#[test]
fn json_index_loads_and_searches() {
    let docs = documents_from_json(&fixture_json()).unwrap();
    assert_eq!(docs.len(), 25);

    let engine = Engine::with_defaults(docs);
    let matches = engine.search("keyword");
    assert_eq!(matches.len(), 25);
}

#[test]
fn rendered_list_truncates_at_twenty_with_separators_between() {
    let docs = documents_from_json(&fixture_json()).unwrap();
    let engine = Engine::with_defaults(docs);

    let matches = engine.search("keyword");
    let html = render_results(&matches, &["keyword".to_string()], MAX_RESULTS);

    assert_eq!(html.matches("<div class=\"search-result\">").count(), 20);
    assert_eq!(
        html.matches("<hr class=\"search-result-separator\">").count(),
        19
    );
    assert!(!html.ends_with("<hr class=\"search-result-separator\">"));
}

#[test]
fn empty_match_list_renders_placeholder() {
    let matches: Vec<MatchResult<'_>> = Vec::new();
    let html = render_results(&matches, &["term".to_string()], MAX_RESULTS);
    assert_eq!(html, NO_RESULTS_HTML);
}

#[test]
fn teaser_survives_metacharacter_queries_end_to_end() {
    let json = r#"[{"title": "Pricing", "body": "the sale price: $5.00 while stocks last", "url": "/pricing/"}]"#;
    let docs = documents_from_json(json).unwrap();
    let engine = Engine::with_defaults(docs);

    // "$5.00" survives normalization as a single token
    let matches = engine.search("$5.00");
    assert_eq!(matches.len(), 1);

    let html = render_results(&matches, &["$5.00".to_string()], MAX_RESULTS);
    assert!(html.contains("<em>$5.00</em>"));
}

#[test]
fn overlapping_term_passes_nest_markup_without_failing() {
    let body = "cat catalog";
    let once = build_teaser(body, &["cat".to_string()]);
    assert_eq!(once, "<em>cat</em> <em>cat</em>alog");

    // Re-running over marked output nests markup but never errors
    let twice = build_teaser(&once, &["cat".to_string()]);
    assert!(twice.contains("cat"));
}

#[test]
fn long_body_teaser_centers_on_the_match() {
    let filler = "lorem ipsum dolor sit amet ".repeat(40);
    let body = format!("{filler}unique_needle and a tail that keeps going afterwards");
    let docs = vec![Document {
        title: "Long".to_string(),
        body,
        url: "/long/".to_string(),
    }];
    let engine = Engine::with_defaults(docs);

    let matches = engine.search("unique_needle");
    assert_eq!(matches.len(), 1);

    let teaser = build_teaser(&matches[0].doc.body, &["unique_needle".to_string()]);
    assert!(teaser.starts_with('…'));
    assert!(teaser.contains("<em>unique_needle</em>"));
}
