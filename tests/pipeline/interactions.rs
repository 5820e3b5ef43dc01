//! Search, clear and sort interactions after bootstrap.

use reqwest::Url;
use scholarsite::app::{Controls, EventOutcome, PageEvent, bootstrap};
use scholarsite::state::{SortMode, TargetId};
use scholarsite::view::Page;

use crate::fixtures::{attrs, full_site, texts};

async fn loaded() -> (tempfile::TempDir, scholarsite::app::PageView) {
    let (tmp, source) = full_site();
    let origin = Url::parse("https://mysite.example/").expect("origin");
    let view = bootstrap(&source, Page::with_all_targets(origin), Controls::default()).await;
    (tmp, view)
}

#[tokio::test]
/// What: Typing filters over name, term, description and labels; no-match shows the query.
///
/// Inputs:
/// - Queries `algorithms`, `FALL 2024`, `syllabus`, `  Quantum `.
///
/// Output:
/// - Matching subsequences in loaded order, then the no-match message.
async fn typing_filters_courses() {
    let (_tmp, mut view) = loaded().await;
    let cases: [(&str, &[&str]); 3] = [
        ("algorithms", &["Algorithms"][..]),
        ("FALL 2024", &["Algorithms", "Logic Seminar"][..]),
        ("syllabus", &["Algorithms"][..]),
    ];
    for (query, expected) in cases {
        assert_eq!(
            view.dispatch(PageEvent::SearchInput(query.into())),
            EventOutcome::Rerendered
        );
        assert_eq!(texts(&view.to_html(), "#teaching-list article h3"), expected, "{query}");
    }

    view.dispatch(PageEvent::SearchInput("  Quantum ".into()));
    let html = view.to_html();
    assert_eq!(
        texts(&html, "#teaching-list p.muted"),
        vec!["No courses match \u{201c}Quantum\u{201d}."]
    );
    assert_eq!(attrs(&html, "#teaching-search", "value"), vec![Some("  Quantum ".to_string())]);
}

#[tokio::test]
/// What: Clearing restores the full list, disables the clear control and focuses the input.
///
/// Inputs:
/// - A filtering query followed by a clear.
///
/// Output:
/// - All three courses, empty input value, disabled clear, autofocus on the input.
async fn clear_restores_everything() {
    let (_tmp, mut view) = loaded().await;
    view.dispatch(PageEvent::SearchInput("logic".into()));
    view.dispatch(PageEvent::SearchClear);
    let html = view.to_html();
    assert_eq!(texts(&html, "#teaching-list article h3").len(), 3);
    assert_eq!(attrs(&html, "#teaching-search", "value"), vec![Some(String::new())]);
    assert_eq!(attrs(&html, "#teaching-search-clear", "disabled"), vec![Some(String::new())]);
    assert_eq!(attrs(&html, "#teaching-search", "autofocus"), vec![Some(String::new())]);
    assert_eq!(view.controls().focused, Some(TargetId::TeachingSearch));
}

#[tokio::test]
/// What: Whitespace-only queries take the identity path.
///
/// Inputs:
/// - Query of three spaces.
///
/// Output:
/// - Surface identical to the freshly bootstrapped one; clear stays disabled.
async fn blank_query_is_identity() {
    let (_tmp, mut view) = loaded().await;
    let before = view.page().surface(TargetId::TeachingList).cloned();
    view.dispatch(PageEvent::SearchInput("   ".into()));
    assert_eq!(view.page().surface(TargetId::TeachingList).cloned(), before);
    assert!(view.controls().clear_disabled);
}

#[tokio::test]
/// What: Sort modes re-render both sections from the retained data, repeatably.
///
/// Inputs:
/// - `title`, `title` again, then `newest`.
///
/// Output:
/// - Case-insensitive title order, identical on repeat; newest puts 2023 first and keeps
///   the 2021 tie in loaded order.
async fn sort_modes_rerender() {
    let (_tmp, mut view) = loaded().await;
    view.dispatch(PageEvent::SortChange("title".into()));
    let first = view.to_html();
    assert_eq!(
        texts(&first, "#publications-list .publication h3"),
        vec!["alpha sketches", "Beta bounds", "Gamma notes"]
    );
    view.dispatch(PageEvent::SortChange("title".into()));
    assert_eq!(view.to_html(), first);
    assert_eq!(view.controls().sort, SortMode::Title);

    view.dispatch(PageEvent::SortChange("newest".into()));
    assert_eq!(
        texts(&view.to_html(), "#publications-list .publication h3"),
        vec!["alpha sketches", "Beta bounds", "Gamma notes"]
    );
    assert_eq!(texts(&view.to_html(), "#publications-list .pub-section").len(), 2);
}
