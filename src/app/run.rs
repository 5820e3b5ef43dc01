//! One-shot render run used by the binary: template, bootstrap, scripted events, output.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;
use tracing::info;

use super::bootstrap::{Controls, PageView, bootstrap};
use super::events::PageEvent;
use super::template::{PageTemplate, discover};
use crate::sources::DataSource;
use crate::state::SortMode;
use crate::theme::ThemeStore;
use crate::view::Page;

/// Page origin assumed for local data roots when none is configured.
pub const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost/";

/// Fully resolved inputs of one render run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Site root.
    pub source: DataSource,
    /// Page URL whose origin classifies links.
    pub origin: Url,
    /// Optional template describing the page's targets.
    pub template: Option<PathBuf>,
    /// Sort override; otherwise the template's, otherwise newest.
    pub sort: Option<SortMode>,
    /// Search text typed after load, if any.
    pub query: Option<String>,
    /// Toggle the stored theme before output.
    pub toggle_theme: bool,
    /// Emit plain text instead of HTML.
    pub text: bool,
    /// Theme preference store.
    pub theme_store: Option<ThemeStore>,
}

/// Fatal problems of a render run.
#[derive(Debug)]
pub enum RunError {
    /// The template could not be read.
    Template {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configured origin or data root is not usable.
    Config(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template { path, source } => {
                write!(f, "Failed to read template {}: {source}", path.display())
            }
            Self::Config(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}

/// What: Resolve the page origin from an explicit value or the data source.
///
/// Inputs:
/// - `explicit`: Configured origin, if any.
/// - `source`: Data root; remote roots double as the origin.
///
/// Output:
/// - Parsed origin URL.
///
/// # Errors
/// - `RunError::Config` when `explicit` is not a valid absolute URL.
pub fn resolve_origin(explicit: Option<&str>, source: &DataSource) -> Result<Url, RunError> {
    if let Some(raw) = explicit {
        return Url::parse(raw.trim()).map_err(|e| RunError::Config(format!("origin {raw}: {e}")));
    }
    if let Some(base) = source.remote_base() {
        return Ok(base.clone());
    }
    Url::parse(DEFAULT_LOCAL_ORIGIN).map_err(|e| RunError::Config(e.to_string()))
}

/// What: Execute one render run.
///
/// Inputs:
/// - `config`: Resolved run configuration.
///
/// Output:
/// - Rendered page view, with the query and theme toggle already applied.
///
/// # Errors
/// - `RunError::Template` when the template file cannot be read.
///
/// Details:
/// - Data failures never fail the run; affected surfaces stay empty.
pub async fn run(config: &RunConfig) -> Result<PageView, RunError> {
    let template = match &config.template {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| RunError::Template {
                    path: path.clone(),
                    source,
                })?;
            discover(&html)
        }
        None => PageTemplate::all_targets(),
    };
    let sort = config
        .sort
        .or(template.initial_sort)
        .unwrap_or_default();
    let page = Page::new(config.origin.clone(), template.targets);
    let controls = Controls::new(template.initial_query, sort);

    let mut view = bootstrap(&config.source, page, controls).await;
    if let Some(store) = &config.theme_store {
        view = view.with_theme_store(store.clone());
    }
    if let Some(query) = &config.query {
        view.dispatch(PageEvent::SearchInput(query.clone()));
    }
    if config.toggle_theme {
        view.dispatch(PageEvent::ThemeToggle);
    }
    info!(
        theme = view.theme().as_str(),
        sort = view.controls().sort.as_str(),
        "render run complete"
    );
    Ok(view)
}

/// What: Serialize a view in the configured output format.
///
/// Inputs:
/// - `view`: Rendered page view.
/// - `text`: Plain text instead of HTML.
///
/// Output:
/// - Output document.
#[must_use]
pub fn render_output(view: &PageView, text: bool) -> String {
    if text { view.to_text() } else { view.to_html() }
}
