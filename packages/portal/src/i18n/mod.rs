//! Localization: the language enum, the translation catalog and the store
//! that owns the active language.

mod catalog;
mod language;
mod store;

pub use catalog::TrKey;
pub use language::Language;
pub use store::LocaleStore;

/// Translate a key string for a given language. A key that is not in the
/// catalog is returned unchanged.
pub fn translate(lang: Language, key: &str) -> String {
    match TrKey::from_key(key) {
        Some(key) => key.text(lang).to_string(),
        None => {
            tracing::debug!(key, lang = lang.code(), "missing translation key, showing key");
            key.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate(Language::Hi, "layout.logout"), "लॉगआउट");
        assert_eq!(translate(Language::En, "layout.logout"), "Logout");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        for lang in Language::ALL {
            assert_eq!(translate(lang, "missing.key"), "missing.key");
            assert_eq!(translate(lang, ""), "");
        }
    }
}
