//! Display-theme preference.
//!
//! [`SettingsStore`] is the load/save seam for the persisted flag.
//! [`JsonFileSettings`] keeps it in a JSON key-value file on disk.
//! [`MemorySettings`] keeps it in process, for tests and throwaway sessions.
//! None of this feeds into grade computation.

mod file;

pub use file::JsonFileSettings;

use std::cell::Cell;

use anyhow::Result;

/// Key under which the theme flag is stored.
pub const THEME_KEY: &str = "theme";

/// Flag value used when nothing has been stored yet (dark).
pub const DEFAULT_DARK: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_dark(DEFAULT_DARK)
    }
}

/// Persists the dark-mode flag across sessions.
pub trait SettingsStore {
    /// Returns the stored flag, or [`DEFAULT_DARK`] when none is stored.
    fn load(&self) -> bool;

    fn save(&self, dark: bool) -> Result<()>;

    fn theme(&self) -> Theme {
        Theme::from_dark(self.load())
    }

    /// Flips the stored theme and returns the new one.
    fn toggle(&self) -> Result<Theme> {
        let next = self.theme().toggle();
        self.save(next.is_dark())?;
        Ok(next)
    }
}

#[derive(Debug, Default)]
pub struct MemorySettings {
    dark: Cell<Option<bool>>,
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> bool {
        self.dark.get().unwrap_or(DEFAULT_DARK)
    }

    fn save(&self, dark: bool) -> Result<()> {
        self.dark.set(Some(dark));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let store = MemorySettings::default();
        assert!(store.load());
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let store = MemorySettings::default();
        store.save(false).unwrap();
        assert!(!store.load());
    }

    #[test]
    fn test_toggle_twice() {
        let store = MemorySettings::default();
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert!(store.load());
    }
}
