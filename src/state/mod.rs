//! Record types and page addressing shared by loaders, engines and renderers.
//!
//! Records mirror the JSON collections; targets name the page regions the
//! renderers populate.

pub mod targets;
pub mod types;

pub use targets::TargetId;
pub use types::{
    Announcement, Course, CourseResource, Publication, PublicationCategory, PublicationGroups,
    ResearchPage, ResearchTopic, SortMode, Talk, YearToken,
};
