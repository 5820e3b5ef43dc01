use std::fs;
use std::path::{Path, PathBuf};

use crate::state::SortMode;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Defaults read from `site.conf`; command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Site root: directory path or `http(s)://` base.
    pub data_root: Option<String>,
    /// Page URL used for external-link classification.
    pub origin: Option<String>,
    /// HTML template describing which targets exist.
    pub template: Option<PathBuf>,
    /// Initial publication ordering.
    pub default_sort: SortMode,
}

/// What: Parse `site.conf` content.
///
/// Inputs:
/// - `content`: File text.
///
/// Output:
/// - Settings with recognized keys applied over defaults.
///
/// Details:
/// - Unknown keys and unrecognized sort values are logged and ignored.
/// - Later occurrences of a key win.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        if val.is_empty() {
            continue;
        }
        match key.as_str() {
            "data_root" | "data" => out.data_root = Some(val),
            "origin" | "site_origin" => out.origin = Some(val),
            "template" => out.template = Some(PathBuf::from(val)),
            "default_sort" | "sort" => match SortMode::parse(&val) {
                Some(mode) => out.default_sort = mode,
                None => tracing::warn!(value = %val, "ignoring unknown default_sort"),
            },
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

/// What: Load settings from `path`, falling back to defaults when missing or unreadable.
///
/// Inputs:
/// - `path`: Location of `site.conf`.
///
/// Output:
/// - Parsed settings or `Settings::default()`.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded site settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no site settings; using defaults");
            Settings::default()
        }
    }
}
