//! Site preferences: config paths, `site.conf` settings and the stored theme flag.

/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme flag persistence.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path, theme_path};
pub use settings::{Settings, load_settings, parse_settings};
pub use store::ThemeStore;
pub use types::{ThemeMode, ToggleAttributes};
