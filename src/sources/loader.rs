//! Resource loader: fetch a named site data file and decode it.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::error::{LoadFailure, SourceError};
use crate::state::TargetId;

/// Fixed data resources, one per surface kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `data/news.json`
    News,
    /// `data/teaching.json`
    Teaching,
    /// `data/publications.json`
    Publications,
    /// `data/presentations.json`
    Presentations,
    /// `data/research.json`
    Research,
}

impl Resource {
    /// Path relative to the site root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::News => "data/news.json",
            Self::Teaching => "data/teaching.json",
            Self::Publications => "data/publications.json",
            Self::Presentations => "data/presentations.json",
            Self::Research => "data/research.json",
        }
    }

    /// Surfaces whose presence makes this resource worth loading.
    ///
    /// Research is keyed on the topics list alone; a lead paragraph without topics is
    /// left as authored.
    #[must_use]
    pub const fn targets(self) -> &'static [TargetId] {
        match self {
            Self::News => &[TargetId::NewsList],
            Self::Teaching => &[TargetId::TeachingList],
            Self::Publications => &[TargetId::PublicationsList],
            Self::Presentations => &[TargetId::PresentationsList],
            Self::Research => &[TargetId::ResearchTopics],
        }
    }
}

/// Where the site root lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Site root on the local filesystem.
    Directory(PathBuf),
    /// Site root served over HTTP(S); always ends with `/`.
    Remote(Url),
}

impl DataSource {
    /// What: Interpret a `--data` argument or `data_root` setting.
    ///
    /// Inputs:
    /// - `value`: Directory path or `http(s)://` base URL.
    ///
    /// Output:
    /// - `Ok(DataSource)`; `Err(message)` when a URL-looking value does not parse.
    ///
    /// # Errors
    /// - Returns `Err` for an `http://`/`https://` value that is not a valid URL.
    ///
    /// Details:
    /// - A trailing `/` is added to remote bases so resource paths join beneath them.
    pub fn parse(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let with_slash = if trimmed.ends_with('/') {
                trimmed.to_string()
            } else {
                format!("{trimmed}/")
            };
            return Url::parse(&with_slash)
                .map(Self::Remote)
                .map_err(|e| format!("invalid data url {trimmed}: {e}"));
        }
        Ok(Self::Directory(PathBuf::from(trimmed)))
    }

    /// Base URL of a remote source, used as the default page origin.
    #[must_use]
    pub const fn remote_base(&self) -> Option<&Url> {
        match self {
            Self::Remote(url) => Some(url),
            Self::Directory(_) => None,
        }
    }
}

/// Shared HTTP client with connection pooling for remote data roots.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(20))
        .user_agent(format!("scholarsite/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Build a load error for `path`.
fn load_error(path: &str, reason: LoadFailure) -> SourceError {
    SourceError::Load {
        path: path.to_string(),
        reason,
    }
}

/// What: Retrieve the raw bytes of a resource.
///
/// Inputs:
/// - `source`: Site root.
/// - `path`: Resource path relative to the root.
///
/// Output:
/// - `Ok(bytes)` on success; `Err(SourceError::Load)` otherwise.
async fn fetch_bytes(source: &DataSource, path: &str) -> Result<Vec<u8>, SourceError> {
    match source {
        DataSource::Directory(root) => {
            let full = root.join(path);
            debug!(path = %full.display(), "reading data file");
            tokio::fs::read(&full)
                .await
                .map_err(|e| load_error(path, LoadFailure::Io(e)))
        }
        DataSource::Remote(base) => {
            let url = base
                .join(path)
                .map_err(|e| load_error(path, LoadFailure::Url(e.to_string())))?;
            debug!(url = %url, "fetching data resource");
            let response = HTTP_CLIENT
                .get(url)
                .send()
                .await
                .map_err(|e| load_error(path, LoadFailure::Http(e)))?;
            let status = response.status();
            if !status.is_success() {
                return Err(load_error(path, LoadFailure::Status(status)));
            }
            let body = response
                .bytes()
                .await
                .map_err(|e| load_error(path, LoadFailure::Http(e)))?;
            Ok(body.to_vec())
        }
    }
}

/// What: Load one data resource and decode it into `T`.
///
/// Inputs:
/// - `source`: Site root (directory or remote base).
/// - `resource`: Which fixed resource to load.
///
/// Output:
/// - `Ok(T)` with the decoded value.
///
/// # Errors
/// - `SourceError::Load` when the file is missing, the request fails, or the status is not 2xx.
/// - `SourceError::Parse` when the body is not JSON of the expected shape.
///
/// Details:
/// - No retries; the caller decides how to surface the failure.
pub async fn load<T: DeserializeOwned>(
    source: &DataSource,
    resource: Resource,
) -> Result<T, SourceError> {
    let path = resource.path();
    let bytes = fetch_bytes(source, path).await.inspect_err(|e| {
        warn!(path, error = %e, "data resource unavailable");
    })?;
    info!(path, bytes = bytes.len(), "loaded data resource");
    serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
        path: path.to_string(),
        source,
    })
}
