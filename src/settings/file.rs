use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{DEFAULT_DARK, SettingsStore, THEME_KEY};

/// Key-value settings file holding a single JSON object:
///
/// ```json
/// { "theme": true }
/// ```
///
/// Other keys in the object are preserved on save.
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", self.path.display()))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(anyhow::anyhow!(
                "{} does not contain a JSON object",
                self.path.display()
            )),
        }
    }
}

impl SettingsStore for JsonFileSettings {
    fn load(&self) -> bool {
        let map = match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "Unreadable settings, using default theme");
                return DEFAULT_DARK;
            }
        };

        match map.get(THEME_KEY) {
            Some(Value::Bool(dark)) => *dark,
            None | Some(Value::Null) => DEFAULT_DARK,
            Some(other) => {
                warn!(value = %other, "Theme setting is not a boolean, using default");
                DEFAULT_DARK
            }
        }
    }

    fn save(&self, dark: bool) -> Result<()> {
        let mut map = self.read_map().unwrap_or_else(|e| {
            warn!(error = %e, "Overwriting unreadable settings file");
            Map::new()
        });
        map.insert(THEME_KEY.to_string(), Value::Bool(dark));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&map)?)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        debug!(path = %self.path.display(), dark, "Theme saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let path = temp_path("cgpa_calc_settings_missing.json");
        let _ = fs::remove_file(&path);

        assert!(JsonFileSettings::new(&path).load());
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("cgpa_calc_settings_round_trip.json");
        let _ = fs::remove_file(&path);

        let store = JsonFileSettings::new(&path);
        store.save(false).unwrap();
        assert!(!JsonFileSettings::new(&path).load());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let path = temp_path("cgpa_calc_settings_other_keys.json");
        fs::write(&path, r#"{"language": "en", "theme": true}"#).unwrap();

        JsonFileSettings::new(&path).save(false).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["language"], "en");
        assert_eq!(value["theme"], false);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_defaults_to_dark() {
        let path = temp_path("cgpa_calc_settings_malformed.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileSettings::new(&path);
        assert!(store.load());

        store.save(false).unwrap();
        assert!(!store.load());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_non_boolean_value_defaults_to_dark() {
        let path = temp_path("cgpa_calc_settings_string.json");
        fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        assert!(JsonFileSettings::new(&path).load());

        fs::remove_file(&path).unwrap();
    }
}
