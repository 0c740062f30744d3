use super::PreferenceStore;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Preferences kept as a flat JSON object on disk (native builds).
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!("{} is not a JSON object", self.path.display()),
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_all()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        // Keep unrelated keys; a corrupt file is replaced.
        let mut map = self.read_all().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unreadable preference file");
            Map::new()
        });
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, body).with_context(|| format!("writing {}", self.path.display()))?;

        tracing::debug!(key, path = %self.path.display(), "saved preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("prefs.json"));
        assert_eq!(prefs.load("lang").unwrap(), None);
    }

    #[test]
    fn save_creates_parent_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("nested/prefs.json"));
        prefs.save("theme", "dark").unwrap();
        prefs.save("lang", "en").unwrap();
        assert_eq!(prefs.load("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(prefs.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_an_error_on_load_and_replaced_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let prefs = FilePreferences::new(&path);
        assert!(prefs.load("lang").is_err());

        prefs.save("lang", "hi").unwrap();
        assert_eq!(prefs.load("lang").unwrap().as_deref(), Some("hi"));
    }
}
