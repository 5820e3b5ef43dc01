//! Link normalizer: mark cross-origin anchors for new-surface, no-opener navigation.

use reqwest::Url;

use crate::view::Page;

/// What: Check whether an href uses an absolute or protocol-relative form.
///
/// Inputs:
/// - `href`: Raw href attribute value.
///
/// Output:
/// - `true` for `http://`, `https://` (any case) and `//` prefixes.
#[must_use]
pub fn is_absolute_href(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// What: Classify an href as external to the page origin.
///
/// Inputs:
/// - `href`: Raw href attribute value.
/// - `page_url`: URL of the page (its origin is what matters).
///
/// Output:
/// - `true` when the href is absolute and its resolved origin differs from the page's.
///
/// Details:
/// - Protocol-relative hrefs resolve against the page scheme.
/// - Relative hrefs and hrefs that fail to resolve are never external.
/// - Origins compare scheme, host and port, so `https://site.example.evil.test` is external
///   to `https://site.example`.
#[must_use]
pub fn is_external(href: &str, page_url: &Url) -> bool {
    if !is_absolute_href(href) {
        return false;
    }
    match page_url.join(href.trim()) {
        Ok(resolved) => resolved.origin() != page_url.origin(),
        Err(e) => {
            tracing::debug!(href, error = %e, "unresolvable href left untouched");
            false
        }
    }
}

/// What: Mark every external anchor on the page with `target="_blank"` and `rel="noopener"`.
///
/// Inputs:
/// - `page`: Page whose surfaces were just rendered.
///
/// Output:
/// - Number of anchors classified as external in this pass.
///
/// Details:
/// - Must run after every render pass, since freshly rendered anchors are unmarked.
/// - Idempotent: re-running leaves already-marked anchors unchanged.
/// - Same-origin and relative anchors are not modified.
pub fn normalize_links(page: &mut Page) -> usize {
    let origin = page.origin().clone();
    let mut marked = 0;
    for surface in page.surfaces_mut() {
        surface.for_each_element_mut(|el| {
            if el.tag != "a" {
                return;
            }
            let external = el
                .attr("href")
                .filter(|h| !h.is_empty())
                .is_some_and(|h| is_external(h, &origin));
            if external {
                el.set_attr("target", "_blank");
                el.set_attr("rel", "noopener");
                marked += 1;
            }
        });
    }
    tracing::debug!(marked, "normalized external links");
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Announcement, TargetId};
    use crate::view::{EmptyState, cards, render};

    fn site() -> Url {
        Url::parse("https://mysite.example/teaching.html").expect("site url")
    }

    #[test]
    /// What: Classify the canonical external and relative examples.
    ///
    /// Inputs:
    /// - `https://external.example/page`, `/about`, same-origin absolute, protocol-relative,
    ///   and a look-alike host.
    ///
    /// Output:
    /// - Only foreign origins are external.
    fn classifies_hrefs() {
        let page = site();
        assert!(is_external("https://external.example/page", &page));
        assert!(!is_external("/about", &page));
        assert!(!is_external("files/syllabus.pdf", &page));
        assert!(!is_external("https://mysite.example/cv.pdf", &page));
        assert!(is_external("http://mysite.example/cv.pdf", &page));
        assert!(is_external("//cdn.example/x.js", &page));
        assert!(!is_external("//mysite.example/x.js", &page));
        assert!(is_external("https://mysite.example.evil.test/", &page));
        assert!(!is_external("mailto:me@mysite.example", &page));
    }

    #[test]
    /// What: Normalization marks external anchors only and is idempotent.
    ///
    /// Inputs:
    /// - Two announcements: one external details link, one relative.
    ///
    /// Output:
    /// - External anchor gains target/rel once; relative anchor has neither.
    fn marks_external_anchors_idempotently() {
        let news = vec![
            Announcement {
                title: "ext".into(),
                link: Some("https://external.example/page".into()),
                ..Announcement::default()
            },
            Announcement {
                title: "rel".into(),
                link: Some("/about".into()),
                ..Announcement::default()
            },
        ];
        let mut page = Page::with_all_targets(site());
        render(&mut page, TargetId::NewsList, &cards(&news), &EmptyState::news());
        assert_eq!(normalize_links(&mut page), 1);
        assert_eq!(normalize_links(&mut page), 1);
        let anchors: Vec<_> = page
            .surface(TargetId::NewsList)
            .expect("news surface")
            .elements()
            .filter(|e| e.tag == "a")
            .cloned()
            .collect();
        assert_eq!(anchors[0].attr("target"), Some("_blank"));
        assert_eq!(anchors[0].attr("rel"), Some("noopener"));
        assert_eq!(anchors[0].attrs.len(), 4);
        assert_eq!(anchors[1].attr("target"), None);
        assert_eq!(anchors[1].attr("rel"), None);
    }
}
