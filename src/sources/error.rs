//! Failure taxonomy for resource retrieval.

use std::fmt;

/// What: Error raised while retrieving or decoding a site data resource.
///
/// Inputs: Produced by the resource loader.
///
/// Output: Implements `Display`/`Error` for logging at the orchestration boundary.
///
/// Details:
/// - `Load` covers I/O failures, network failures and non-success HTTP statuses.
/// - `Parse` covers malformed JSON or JSON of the wrong shape.
#[derive(Debug)]
pub enum SourceError {
    /// The resource could not be retrieved.
    Load {
        /// Resource path relative to the site root.
        path: String,
        /// Why retrieval failed.
        reason: LoadFailure,
    },
    /// The resource was retrieved but did not decode.
    Parse {
        /// Resource path relative to the site root.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Cause of a [`SourceError::Load`].
#[derive(Debug)]
pub enum LoadFailure {
    /// Local file could not be read.
    Io(std::io::Error),
    /// HTTP request failed before a response arrived.
    Http(reqwest::Error),
    /// Server answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The resource path could not be joined onto the remote base.
    Url(String),
}

impl SourceError {
    /// Resource path the error refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Load { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Whether this is a retrieval (not decoding) failure.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Http(err) => write!(f, "request failed: {err}"),
            Self::Status(status) => write!(f, "server responded with {status}"),
            Self::Url(err) => write!(f, "invalid resource url: {err}"),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, reason } => write!(f, "Failed to load {path}: {reason}"),
            Self::Parse { path, source } => write!(f, "Failed to parse {path}: {source}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { reason, .. } => match reason {
                LoadFailure::Io(err) => Some(err),
                LoadFailure::Http(err) => Some(err),
                LoadFailure::Status(_) | LoadFailure::Url(_) => None,
            },
            Self::Parse { source, .. } => Some(source),
        }
    }
}
