//! Publication ordering: per-group year and title sorts rendered as fixed sections.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::state::{Publication, PublicationCategory, PublicationGroups, SortMode, TargetId};
use crate::view::{Page, SectionView, cards, render_sections};

/// What: Numeric year key of a publication, flagging unusable tokens.
///
/// Inputs:
/// - `publication`: Record to inspect.
///
/// Output:
/// - `Some(year)` for integer tokens; `None` for missing, blank or non-numeric tokens.
///
/// Details:
/// - Non-numeric, non-blank tokens are logged as a data-quality warning.
fn year_key(publication: &Publication) -> Option<i64> {
    let token = publication.year.as_ref()?;
    let key = token.numeric();
    if key.is_none() && !token.is_blank() {
        tracing::warn!(
            title = %publication.title,
            year = token.as_str(),
            "non-numeric publication year; ranking below numeric years"
        );
    }
    key
}

/// What: Primary collation key of a title.
///
/// Inputs:
/// - `title`: Raw title.
///
/// Output:
/// - Canonically decomposed text with combining marks removed, lowercased.
///
/// Details:
/// - `Élan` keys as `elan`, so accented titles sort beside their base letters.
fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// What: Compare two titles in a dictionary order that ignores case and accents.
///
/// Inputs:
/// - `a`, `b`: Titles.
///
/// Output:
/// - Ordering by collation key, tie-broken by the raw text.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.cmp(b))
}

/// What: Produce a sorted view of one publication group.
///
/// Inputs:
/// - `items`: Group in loaded order (never modified).
/// - `mode`: Ordering to apply.
///
/// Output:
/// - References in the requested order.
///
/// Details:
/// - `Newest`/`Oldest` compare numeric years; missing or non-numeric years rank below every
///   numeric year. Equal keys keep their loaded order (stable sort).
/// - `Title` compares titles case-insensitively.
#[must_use]
pub fn sort_publications(items: &[Publication], mode: SortMode) -> Vec<&Publication> {
    let mut view: Vec<&Publication> = items.iter().collect();
    match mode {
        SortMode::Newest | SortMode::Oldest => {
            let mut keyed: Vec<(Option<i64>, &Publication)> =
                view.iter().map(|p| (year_key(p), *p)).collect();
            if mode == SortMode::Newest {
                keyed.sort_by(|a, b| b.0.cmp(&a.0));
            } else {
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
            }
            view = keyed.into_iter().map(|(_, p)| p).collect();
        }
        SortMode::Title => view.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    view
}

/// What: Sort both publication groups and render them as fixed sections.
///
/// Inputs:
/// - `page`: Page owning the publications surface.
/// - `data`: Original in-memory groups (never modified).
/// - `mode`: Ordering applied to each group independently.
///
/// Output:
/// - `true` when the publications list was rendered.
///
/// Details:
/// - Groups are never merged; both sections are always emitted.
/// - Re-running with the same mode reproduces the same surface.
pub fn present_publications(page: &mut Page, data: &PublicationGroups, mode: SortMode) -> bool {
    let sections: Vec<SectionView> = PublicationCategory::ALL
        .into_iter()
        .map(|category| SectionView {
            heading: category.heading(),
            cards: cards(sort_publications(data.group(category), mode)),
        })
        .collect();
    tracing::debug!(
        mode = mode.as_str(),
        preprints = data.preprints.len(),
        peer_reviewed = data.peer_reviewed.len(),
        "presenting publications"
    );
    render_sections(page, TargetId::PublicationsList, &sections)
}
