use std::path::PathBuf;

use crate::i18n::Language;

/// Storage key the active language is persisted under.
pub const LANGUAGE_STORAGE_KEY: &str = "jal-rakshak-language";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Language used when nothing (or garbage) is persisted.
    pub default_language: Language,
    pub language_storage_key: String,
    /// Directory for the native preference file. `None` means preferences
    /// live in memory only.
    pub data_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            default_language: Language::DEFAULT,
            language_storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl PortalConfig {
    /// Reads `JAL_RAKSHAK_LANG` and `JAL_RAKSHAK_DATA_DIR`.
    pub fn from_env() -> Self {
        let lang = std::env::var("JAL_RAKSHAK_LANG").ok();
        let data_dir = std::env::var("JAL_RAKSHAK_DATA_DIR").ok();
        Self::from_values(lang.as_deref(), data_dir.as_deref())
    }

    pub fn from_values(lang: Option<&str>, data_dir: Option<&str>) -> Self {
        let default_language = match lang.map(str::trim).filter(|v| !v.is_empty()) {
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                tracing::warn!(code, "unknown default language, using {}", Language::DEFAULT.code());
                Language::DEFAULT
            }),
            None => Language::DEFAULT,
        };

        let data_dir = data_dir
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(default_data_dir);

        Self {
            default_language,
            language_storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            data_dir,
        }
    }

    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(PREFERENCES_FILE))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jal-rakshak"))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_hindi() {
        let cfg = PortalConfig::from_values(None, Some("/tmp/jal"));
        assert_eq!(cfg.default_language, Language::Hi);
        assert_eq!(cfg.language_storage_key, "jal-rakshak-language");
    }

    #[test]
    fn test_language_override_case_insensitive() {
        let cfg = PortalConfig::from_values(Some("EN"), Some("/tmp/jal"));
        assert_eq!(cfg.default_language, Language::En);
    }

    #[test]
    fn test_invalid_language_defaults_to_hindi() {
        let cfg = PortalConfig::from_values(Some("fr"), Some("/tmp/jal"));
        assert_eq!(cfg.default_language, Language::Hi);
        let cfg = PortalConfig::from_values(Some("   "), Some("/tmp/jal"));
        assert_eq!(cfg.default_language, Language::Hi);
    }

    #[test]
    fn test_preferences_path_under_data_dir() {
        let cfg = PortalConfig::from_values(None, Some("/tmp/jal"));
        assert_eq!(
            cfg.preferences_path(),
            Some(PathBuf::from("/tmp/jal/preferences.json"))
        );
        assert_eq!(PortalConfig::default().preferences_path(), None);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("JAL_RAKSHAK_LANG", "en-IN");
        std::env::set_var("JAL_RAKSHAK_DATA_DIR", "/tmp/jal-env");
        let cfg = PortalConfig::from_env();
        assert_eq!(cfg.default_language, Language::En);
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/jal-env")));
        std::env::remove_var("JAL_RAKSHAK_LANG");
        std::env::remove_var("JAL_RAKSHAK_DATA_DIR");
    }
}
