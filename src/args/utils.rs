//! Shared utilities for argument processing.

use crate::app::{RunConfig, RunError, resolve_origin};
use crate::sources::DataSource;
use crate::state::SortMode;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge command-line flags over `site.conf` settings into a run configuration.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from the config directory.
///
/// Output:
/// - `RunConfig` without a theme store (the caller attaches one).
///
/// # Errors
/// - `RunError::Config` for an invalid data URL or origin.
///
/// Details:
/// - Flags win over settings; the data root falls back to the current directory.
/// - `--sort` goes through the selector fallback, so unknown values become newest.
/// - Without `--sort`, `default_sort` applies only when no template supplies a selection.
pub fn resolve_run_config(
    args: &crate::args::Args,
    settings: &Settings,
) -> Result<RunConfig, RunError> {
    let data = args
        .data
        .as_deref()
        .or(settings.data_root.as_deref())
        .unwrap_or(".");
    let source = DataSource::parse(data).map_err(RunError::Config)?;
    let origin = resolve_origin(
        args.origin.as_deref().or(settings.origin.as_deref()),
        &source,
    )?;
    let template = args.template.clone().or_else(|| settings.template.clone());
    let sort = match args.sort.as_deref() {
        Some(value) => Some(SortMode::from_selector(value)),
        None if template.is_none() => Some(settings.default_sort),
        None => None,
    };
    Ok(RunConfig {
        source,
        origin,
        template,
        sort,
        query: args.query.clone(),
        toggle_theme: args.toggle_theme,
        text: args.text,
        theme_store: None,
    })
}
