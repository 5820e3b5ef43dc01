//! External link treatment across bootstrap and re-renders.

use reqwest::Url;
use scholarsite::app::{Controls, PageEvent, bootstrap};
use scholarsite::view::Page;

use crate::fixtures::{attrs, full_site};

#[tokio::test]
/// What: Off-site anchors are marked after bootstrap and after every re-render.
///
/// Inputs:
/// - Full site; then a search and a sort change.
///
/// Output:
/// - External anchors carry `target=_blank` and `rel=noopener`; relative ones carry neither.
async fn external_links_marked_after_every_render() {
    let (_tmp, source) = full_site();
    let origin = Url::parse("https://mysite.example/index.html").expect("origin");
    let mut view = bootstrap(&source, Page::with_all_targets(origin), Controls::default()).await;

    let check = |html: &str| {
        assert_eq!(
            attrs(html, "a[href=\"https://notes.example/dm\"]", "target"),
            vec![Some("_blank".to_string())]
        );
        assert_eq!(
            attrs(html, "a[href=\"files/alg-syllabus.pdf\"]", "target"),
            vec![None]
        );
        assert_eq!(
            attrs(html, "a[href=\"https://arxiv.example/g\"]", "rel"),
            vec![Some("noopener".to_string())]
        );
        assert_eq!(attrs(html, "a[href=\"files/beta.pdf\"]", "rel"), vec![None]);
    };
    check(&view.to_html());

    view.dispatch(PageEvent::SearchInput("discrete".into()));
    view.dispatch(PageEvent::SearchClear);
    view.dispatch(PageEvent::SortChange("oldest".into()));
    check(&view.to_html());
}

#[tokio::test]
/// What: Links to the page's own origin are left alone.
///
/// Inputs:
/// - Page origin equal to the host of the news details link.
///
/// Output:
/// - The details anchor has no `target`.
async fn same_origin_links_untouched() {
    let (_tmp, source) = full_site();
    let origin = Url::parse("https://conf.example/").expect("origin");
    let view = bootstrap(&source, Page::with_all_targets(origin), Controls::default()).await;
    assert_eq!(
        attrs(&view.to_html(), "a[href=\"https://conf.example/soda\"]", "target"),
        vec![None]
    );
}
