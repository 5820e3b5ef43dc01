//! Teaching search: query normalization and order-preserving course filtering.

use crate::state::{Course, TargetId};
use crate::view::{EmptyState, Page, cards, render};

/// What: Normalize a raw search query for matching.
///
/// Inputs:
/// - `raw`: Query text as typed.
///
/// Output:
/// - Trimmed, lowercased query; empty when the input is blank.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What: Build the lowercase search haystack of a course.
///
/// Inputs:
/// - `course`: Course record.
///
/// Output:
/// - Course name, term, description and every resource label joined by single spaces, lowercased.
///
/// Details:
/// - A missing description contributes an empty segment so field boundaries stay consistent.
#[must_use]
pub fn course_haystack(course: &Course) -> String {
    let mut parts: Vec<&str> = vec![
        course.course.as_str(),
        course.term.as_str(),
        course.description.as_deref().unwrap_or(""),
    ];
    parts.extend(course.resources.iter().map(|r| r.label.as_str()));
    parts.join(" ").to_lowercase()
}

/// What: Narrow courses to those matching a free-text query.
///
/// Inputs:
/// - `courses`: Full in-memory collection.
/// - `raw_query`: Query text as typed.
///
/// Output:
/// - Matching courses in their original relative order; every course for a blank query.
///
/// Details:
/// - Substring match on the normalized query; no ranking, no fuzzy matching.
#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], raw_query: &str) -> Vec<&'a Course> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return courses.iter().collect();
    }
    courses
        .iter()
        .filter(|c| course_haystack(c).contains(&query))
        .collect()
}

/// What: Filter the teaching collection and re-render the teaching list.
///
/// Inputs:
/// - `page`: Page owning the teaching surface.
/// - `courses`: Full in-memory collection (never modified).
/// - `raw_query`: Current search input value.
///
/// Output:
/// - `true` when the teaching list was rendered.
///
/// Details:
/// - Blank queries render the full collection with the default placeholder.
/// - Non-blank queries with no matches render `No courses match “<query>”.` using the
///   trimmed query text with its original casing.
pub fn apply_teaching_filter(page: &mut Page, courses: &[Course], raw_query: &str) -> bool {
    let shown = raw_query.trim();
    if shown.is_empty() {
        return render(page, TargetId::TeachingList, &cards(courses), &EmptyState::teaching());
    }
    let matches = filter_courses(courses, raw_query);
    tracing::debug!(
        query = shown,
        matched = matches.len(),
        total = courses.len(),
        "filtered teaching list"
    );
    render(
        page,
        TargetId::TeachingList,
        &cards(matches.iter().copied()),
        &EmptyState::teaching_no_match(shown),
    )
}
