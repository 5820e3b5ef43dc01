use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base.
const APP_DIR: &str = "scholarsite";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Resolve the configuration directory and make sure it exists.
///
/// Inputs:
/// - `override_dir`: Explicit directory (e.g., from `--config-dir`), used verbatim when set.
///
/// Output:
/// - `override_dir`, else `$XDG_CONFIG_HOME/scholarsite`, else `$HOME/.config/scholarsite`.
///
/// Details:
/// - Creation failures are ignored here; later reads and writes log their own errors.
#[must_use]
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    let dir = override_dir.map_or_else(
        || xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR),
        Path::to_path_buf,
    );
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under the config directory (ensured to exist).
#[must_use]
pub fn logs_dir(config: &Path) -> PathBuf {
    let dir = config.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// `site.conf` inside the config directory.
#[must_use]
pub fn settings_path(config: &Path) -> PathBuf {
    config.join("site.conf")
}

/// Stored theme flag inside the config directory.
#[must_use]
pub fn theme_path(config: &Path) -> PathBuf {
    config.join("theme")
}
