use std::fs;
use std::path::PathBuf;

use super::types::{ThemeMode, ToggleAttributes};

/// Single-flag theme preference persisted as a small text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStore {
    /// File holding `light` or `dark`.
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// What: Read the stored flag.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - `Some(mode)` when the file exists and holds a valid flag; `None` otherwise.
    #[must_use]
    pub fn stored(&self) -> Option<ThemeMode> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let mode = ThemeMode::parse(&raw);
        if mode.is_none() {
            tracing::debug!(path = %self.path.display(), "ignoring invalid stored theme");
        }
        mode
    }

    /// Stored mode, or `Light` when absent or invalid.
    #[must_use]
    pub fn preferred(&self) -> ThemeMode {
        self.stored().unwrap_or_default()
    }

    /// What: Persist `mode` and return the attributes to mirror on the toggle.
    ///
    /// Inputs:
    /// - `mode`: Mode being applied.
    ///
    /// Output:
    /// - Toggle attributes for `mode`.
    ///
    /// Details:
    /// - Write failures are logged and otherwise ignored; the mode still applies for this view.
    pub fn apply(&self, mode: ThemeMode) -> ToggleAttributes {
        match fs::write(&self.path, mode.as_str()) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), theme = mode.as_str(), "[Persist] theme stored");
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "[Persist] Failed to store theme");
            }
        }
        mode.toggle_attributes()
    }
}
