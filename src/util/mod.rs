//! Small shared helpers: config-line parsing and log timestamp formatting.

pub mod config;

/// What: Format the current local time for log lines.
///
/// Inputs: None.
///
/// Output:
/// - Timestamp in `YYYY-MM-DD-T HH:MM:SS` form.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
