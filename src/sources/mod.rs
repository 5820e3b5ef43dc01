//! Site data retrieval split into submodules.

mod error;
mod loader;

pub use error::{LoadFailure, SourceError};
pub use loader::{DataSource, Resource, load};
