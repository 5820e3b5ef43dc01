//! Initial page population from a data directory.

use reqwest::Url;
use scholarsite::app::{Controls, bootstrap};
use scholarsite::state::{SortMode, TargetId};
use scholarsite::view::Page;

use crate::fixtures::{attrs, full_site, serve, site, texts, TEACHING};

fn origin() -> Url {
    Url::parse("https://mysite.example/").expect("origin")
}

#[tokio::test]
/// What: Every surface is populated from a complete site.
///
/// Inputs:
/// - Full fixture site, all targets present, default controls.
///
/// Output:
/// - News newest first, all courses, publications under both headings, the empty
///   presentations placeholder, research lead and topics.
async fn bootstrap_populates_every_surface() {
    let (_tmp, source) = full_site();
    let view = bootstrap(&source, Page::with_all_targets(origin()), Controls::default()).await;
    let html = view.to_html();

    assert_eq!(
        texts(&html, "#news-list .news-item__title"),
        vec!["Paper accepted", "Started at the institute"]
    );
    // Blank summary is suppressed.
    assert_eq!(texts(&html, "#news-list li .muted"), vec!["At SODA."]);

    assert_eq!(
        texts(&html, "#teaching-list article h3"),
        vec!["Algorithms", "Discrete Mathematics", "Logic Seminar"]
    );
    assert_eq!(texts(&html, "#teaching-list article:nth-child(3) ul.resources").len(), 0);

    assert_eq!(
        texts(&html, "#publications-list .pub-section > .badge"),
        vec!["Preprints / In Communication", "Peer-reviewed"]
    );
    assert_eq!(
        texts(&html, "#publications-list .publication h3"),
        vec!["alpha sketches", "Beta bounds", "Gamma notes"]
    );
    assert_eq!(
        texts(&html, "#publications-list .pub-section:nth-child(2) p.muted"),
        vec!["No entries yet."]
    );

    assert_eq!(
        texts(&html, "#presentations-list p.muted"),
        vec!["No presentations yet. Update data/presentations.json."]
    );
    assert_eq!(texts(&html, "#research-lead"), vec!["I study graphs."]);
    assert_eq!(
        texts(&html, "#research-topics article h3"),
        vec!["Graph minors", "Sparsity"]
    );
    assert_eq!(attrs(&html, "#teaching-search-clear", "disabled"), vec![Some(String::new())]);
}

#[tokio::test]
/// What: The initial sort and query from the controls apply on first render.
///
/// Inputs:
/// - Full site with `oldest` sort and the query `notes`.
///
/// Output:
/// - 2021 papers first in loaded order; only the course whose label matches remains.
async fn initial_controls_apply() {
    let (_tmp, source) = full_site();
    let view = bootstrap(
        &source,
        Page::with_all_targets(origin()),
        Controls::new("notes", SortMode::Oldest),
    )
    .await;
    let html = view.to_html();
    assert_eq!(
        texts(&html, "#publications-list .publication h3"),
        vec!["Beta bounds", "Gamma notes", "alpha sketches"]
    );
    assert_eq!(texts(&html, "#teaching-list article h3"), vec!["Discrete Mathematics"]);
    assert_eq!(attrs(&html, "#teaching-search-clear", "disabled"), vec![None]);
}

#[tokio::test]
/// What: Missing and malformed resources leave their surfaces empty without affecting others.
///
/// Inputs:
/// - Site with malformed teaching JSON, wrong-shaped publications, valid research only.
///
/// Output:
/// - Teaching and publications empty; research rendered; nothing else loaded.
async fn failed_loads_leave_surfaces_empty() {
    let (_tmp, source) = site(&[
        ("teaching.json", "{not json"),
        ("publications.json", "[1, 2, 3]"),
        ("research.json", r#"{"topics": []}"#),
    ]);
    let view = bootstrap(&source, Page::with_all_targets(origin()), Controls::default()).await;
    let page = view.page();
    assert!(page.surface(TargetId::TeachingList).expect("teaching").is_empty());
    assert!(page.surface(TargetId::PublicationsList).expect("pubs").is_empty());
    assert!(page.surface(TargetId::NewsList).expect("news").is_empty());
    assert!(page.surface(TargetId::ResearchLead).expect("lead").is_empty());
    assert_eq!(
        page.surface(TargetId::ResearchTopics).expect("topics").text_content(),
        "No research topics added yet."
    );
    assert!(view.publications().is_none());
}

#[tokio::test]
/// What: A remote root with missing resources fills only the surfaces it serves.
///
/// Inputs:
/// - Local HTTP server serving only `data/teaching.json`; every other resource is 404.
///
/// Output:
/// - Teaching rendered from the remote body; news and publications stay empty.
async fn remote_not_found_leaves_surfaces_empty() {
    let (source, server) = serve(&[("teaching.json", TEACHING)]).await;
    let view = bootstrap(&source, Page::with_all_targets(origin()), Controls::default()).await;
    server.abort();
    let page = view.page();
    assert!(page.surface(TargetId::NewsList).expect("news").is_empty());
    assert!(page.surface(TargetId::PublicationsList).expect("pubs").is_empty());
    assert_eq!(
        texts(&view.to_html(), "#teaching-list article h3"),
        vec!["Algorithms", "Discrete Mathematics", "Logic Seminar"]
    );
}
