//! Query engines applied to in-memory collections before rendering.

pub mod filter;
pub mod links;
pub mod news;
pub mod sort;

pub use filter::{apply_teaching_filter, filter_courses, normalize_query};
pub use links::{is_external, normalize_links};
pub use news::order_announcements;
pub use sort::{present_publications, sort_publications};
