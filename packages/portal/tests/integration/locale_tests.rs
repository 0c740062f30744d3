use anyhow::anyhow;
use portal::{
    FilePreferences, Language, LocaleStore, MemoryPreferences, PortalConfig, PreferenceStore, TrKey,
};

/// Storage that is never reachable, like a browser with storage disabled.
struct Unavailable;

impl PreferenceStore for Unavailable {
    fn load(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Err(anyhow!("storage disabled"))
    }

    fn save(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow!("storage disabled"))
    }
}

fn fresh(prefs: &MemoryPreferences) -> LocaleStore {
    LocaleStore::open(&PortalConfig::default(), Box::new(prefs.clone()))
}

#[test]
fn test_set_then_get_for_every_language() {
    let mut store = fresh(&MemoryPreferences::default());
    for lang in Language::ALL {
        store.set_language(lang);
        assert_eq!(store.language(), lang);
    }
}

#[test]
fn test_set_language_is_idempotent() {
    let once = MemoryPreferences::default();
    let twice = MemoryPreferences::default();
    let mut a = fresh(&once);
    let mut b = fresh(&twice);

    a.set_language(Language::En);
    b.set_language(Language::En);
    b.set_language(Language::En);

    assert_eq!(a.language(), b.language());
    assert_eq!(once.get("jal-rakshak-language"), twice.get("jal-rakshak-language"));
}

#[test]
fn test_every_catalog_key_translates_non_empty() {
    let mut store = fresh(&MemoryPreferences::default());
    for lang in Language::ALL {
        store.set_language(lang);
        for key in TrKey::ALL {
            let text = store.translate(key.as_str());
            assert!(!text.is_empty(), "{key} empty in {lang}");
            assert_eq!(text, store.tr(*key));
        }
    }
}

#[test]
fn test_unknown_keys_come_back_unchanged() {
    let mut store = fresh(&MemoryPreferences::default());
    for lang in Language::ALL {
        store.set_language(lang);
        for key in ["admin.nonexistent", "no_namespace", "home.title.extra"] {
            assert_eq!(store.translate(key), key);
        }
    }
}

#[test]
fn test_language_survives_restart() {
    let prefs = MemoryPreferences::default();
    {
        let mut store = fresh(&prefs);
        store.set_language(Language::En);
    }
    let restarted = fresh(&prefs);
    assert_eq!(restarted.language(), Language::En);
}

#[test]
fn test_language_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortalConfig::from_values(None, dir.path().to_str());
    let path = config.preferences_path().unwrap();

    let mut store = LocaleStore::open(&config, Box::new(FilePreferences::new(&path)));
    assert_eq!(store.language(), Language::Hi);
    store.set_language(Language::En);
    drop(store);

    let restarted = LocaleStore::open(&config, Box::new(FilePreferences::new(&path)));
    assert_eq!(restarted.language(), Language::En);
}

#[test]
fn test_no_stored_language_uses_configured_default() {
    let store = fresh(&MemoryPreferences::default());
    assert_eq!(store.language(), Language::Hi);
    assert_eq!(store.tr(TrKey::HomeTitle), "जल रक्षक");

    let english_default = PortalConfig {
        default_language: Language::En,
        ..PortalConfig::default()
    };
    let store = LocaleStore::open(&english_default, Box::new(MemoryPreferences::default()));
    assert_eq!(store.language(), Language::En);
}

#[test]
fn test_unavailable_storage_never_blocks() {
    let mut store = LocaleStore::open(&PortalConfig::default(), Box::new(Unavailable));
    assert_eq!(store.language(), Language::Hi);

    store.set_language(Language::En);
    assert_eq!(store.language(), Language::En);
    assert_eq!(store.translate("layout.logout"), "Logout");
}
