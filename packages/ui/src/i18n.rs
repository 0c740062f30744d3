use dioxus::prelude::*;
use portal::{Language, LocaleStore, PortalConfig, TrKey};

/// Handle to the shared locale store. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct I18n {
    store: Signal<LocaleStore>,
}

impl I18n {
    pub fn language(&self) -> Language {
        self.store.read().language()
    }

    pub fn set_language(&self, lang: Language) {
        let mut store = self.store;
        store.write().set_language(lang);
    }

    pub fn t(&self, key: TrKey) -> &'static str {
        self.store.read().tr(key)
    }
}

fn new_store() -> LocaleStore {
    let config = PortalConfig::from_env();
    LocaleStore::deferred(&config, crate::storage::platform_preferences(&config))
}

/// Provide the locale store to the component tree. Starts on the configured
/// default and applies the saved language after mount, so server-rendered
/// markup and the first client render agree.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut store = use_signal(new_store);
    use_context_provider(|| I18n { store });

    use_effect(move || {
        store.write().hydrate();
    });

    rsx! { {children} }
}

pub fn use_i18n() -> I18n {
    if let Some(i18n) = try_use_context::<I18n>() {
        return i18n;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("missing I18nProvider context, using a local locale store");
    let store = use_signal(new_store);
    I18n { store }
}

/// Translate a key for a given language.
pub fn t(lang: Language, key: TrKey) -> &'static str {
    key.text(lang)
}

/// Language switcher: one button per supported language.
#[component]
pub fn LanguageMenu() -> Element {
    let i18n = use_i18n();
    let active = i18n.language();

    rsx! {
        div { class: "lang_menu", title: i18n.t(TrKey::CommonLanguage),
            for lang in Language::ALL {
                button {
                    key: "{lang}",
                    class: if lang == active { "btn lang_btn active" } else { "btn lang_btn" },
                    onclick: move |_| i18n.set_language(lang),
                    {lang.native_name()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_t_matches_catalog() {
        assert_eq!(t(Language::En, TrKey::LayoutLogout), "Logout");
        assert_eq!(t(Language::Hi, TrKey::LayoutLogout), "लॉगआउट");
    }
}
