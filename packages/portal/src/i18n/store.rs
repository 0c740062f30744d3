use super::{translate, Language, TrKey};
use crate::config::PortalConfig;
use crate::preferences::PreferenceStore;

/// Owner of the active language.
///
/// The store is the only writer of the active language; views read it through
/// [`LocaleStore::language`] and the translate helpers. A store built with
/// [`LocaleStore::deferred`] serves the configured default until
/// [`LocaleStore::hydrate`] applies the persisted value, which happens at most
/// once.
pub struct LocaleStore {
    active: Language,
    default_language: Language,
    storage_key: String,
    preferences: Box<dyn PreferenceStore>,
    hydrated: bool,
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .field("default_language", &self.default_language)
            .field("storage_key", &self.storage_key)
            .field("hydrated", &self.hydrated)
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    /// Build the store and load the persisted language right away.
    pub fn open(config: &PortalConfig, preferences: Box<dyn PreferenceStore>) -> Self {
        let mut store = Self::deferred(config, preferences);
        store.hydrate();
        store
    }

    /// Build the store without touching persistence yet.
    pub fn deferred(config: &PortalConfig, preferences: Box<dyn PreferenceStore>) -> Self {
        Self {
            active: config.default_language,
            default_language: config.default_language,
            storage_key: config.language_storage_key.clone(),
            preferences,
            hydrated: false,
        }
    }

    /// Apply the persisted language, once. Later calls return the active
    /// language without reading storage again.
    pub fn hydrate(&mut self) -> Language {
        if self.hydrated {
            return self.active;
        }
        self.hydrated = true;

        if let Some(lang) = self.load_persisted() {
            self.active = lang;
        }
        tracing::debug!(lang = self.active.code(), "locale store hydrated");
        self.active
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    fn load_persisted(&self) -> Option<Language> {
        match self.preferences.load(&self.storage_key) {
            Ok(Some(code)) => {
                let lang = Language::from_code(&code);
                if lang.is_none() {
                    tracing::warn!(code = %code, "ignoring unknown persisted language");
                }
                lang
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "language preference unavailable, using default");
                None
            }
        }
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Switch language and persist the choice. A failed save is logged; the
    /// switch still takes effect for this run.
    pub fn set_language(&mut self, lang: Language) {
        self.active = lang;
        // An explicit choice must not be overwritten by a late hydrate.
        self.hydrated = true;

        if let Err(err) = self.preferences.save(&self.storage_key, lang.code()) {
            tracing::warn!(error = %err, lang = lang.code(), "failed to persist language");
        }
    }

    /// Switch language from a code. Unknown codes are ignored and `false` is
    /// returned.
    pub fn set_language_code(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.set_language(lang);
                true
            }
            None => {
                tracing::debug!(code, "rejected unsupported language code");
                false
            }
        }
    }

    pub fn tr(&self, key: TrKey) -> &'static str {
        key.text(self.active)
    }

    pub fn translate(&self, key: &str) -> String {
        translate(self.active, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;

    fn store_with(prefs: &MemoryPreferences) -> LocaleStore {
        LocaleStore::open(&PortalConfig::default(), Box::new(prefs.clone()))
    }

    #[test]
    fn starts_on_default_without_stored_value() {
        let store = store_with(&MemoryPreferences::default());
        assert_eq!(store.language(), Language::Hi);
        assert!(store.is_hydrated());
    }

    #[test]
    fn set_language_persists_code() {
        let prefs = MemoryPreferences::default();
        let mut store = store_with(&prefs);
        store.set_language(Language::En);
        assert_eq!(prefs.get("jal-rakshak-language").as_deref(), Some("en"));
        assert_eq!(store.tr(TrKey::LayoutLogout), "Logout");
    }

    #[test]
    fn unknown_code_is_a_noop() {
        let prefs = MemoryPreferences::default();
        let mut store = store_with(&prefs);
        assert!(!store.set_language_code("ta"));
        assert_eq!(store.language(), Language::Hi);
        assert_eq!(prefs.get("jal-rakshak-language"), None);
        assert!(store.set_language_code("EN"));
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn deferred_serves_default_until_hydrated() {
        let prefs = MemoryPreferences::default();
        prefs.insert("jal-rakshak-language", "en");
        let mut store = LocaleStore::deferred(&PortalConfig::default(), Box::new(prefs.clone()));
        assert_eq!(store.language(), Language::Hi);
        assert!(!store.is_hydrated());

        assert_eq!(store.hydrate(), Language::En);

        // Applied once: a later change in storage is not picked up.
        prefs.insert("jal-rakshak-language", "hi");
        assert_eq!(store.hydrate(), Language::En);
    }

    #[test]
    fn explicit_choice_beats_late_hydrate() {
        let prefs = MemoryPreferences::default();
        prefs.insert("jal-rakshak-language", "hi");
        let mut store = LocaleStore::deferred(&PortalConfig::default(), Box::new(prefs.clone()));
        store.set_language(Language::En);
        assert_eq!(store.hydrate(), Language::En);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let prefs = MemoryPreferences::default();
        prefs.insert("jal-rakshak-language", "klingon");
        let store = store_with(&prefs);
        assert_eq!(store.language(), Language::Hi);
    }
}
