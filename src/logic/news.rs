//! Announcement ordering applied before the news list is rendered.

use chrono::NaiveDate;

use crate::state::Announcement;

/// What: Check whether a date string is a plain `YYYY-MM-DD` calendar date.
///
/// Inputs:
/// - `date`: Raw date string.
///
/// Output:
/// - `true` if it parses as an ISO calendar date.
#[must_use]
pub fn is_iso_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_ok()
}

/// What: Order announcements newest first.
///
/// Inputs:
/// - `items`: Announcements in loaded order (never modified).
///
/// Output:
/// - References sorted by descending `date` string; equal dates keep loaded order.
///
/// Details:
/// - Dates compare lexicographically, which matches chronology for ISO dates.
/// - Non-ISO dates are logged as a data-quality warning and still ordered as strings.
#[must_use]
pub fn order_announcements(items: &[Announcement]) -> Vec<&Announcement> {
    for item in items.iter().filter(|a| !is_iso_date(&a.date)) {
        tracing::warn!(date = %item.date, title = %item.title, "announcement date is not YYYY-MM-DD");
    }
    let mut view: Vec<&Announcement> = items.iter().collect();
    view.sort_by(|a, b| b.date.cmp(&a.date));
    view
}
