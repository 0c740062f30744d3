use dioxus::prelude::*;
use portal::TrKey;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

const FEATURES: [(TrKey, TrKey); 4] = [
    (TrKey::HomeFeature1, TrKey::HomeFeature1Desc),
    (TrKey::HomeFeature2, TrKey::HomeFeature2Desc),
    (TrKey::HomeFeature3, TrKey::HomeFeature3Desc),
    (TrKey::HomeFeature4, TrKey::HomeFeature4Desc),
];

/// Landing page. `portal_href` is where "get started" leads.
#[component]
pub fn Hero(portal_href: String) -> Element {
    let i18n = crate::use_i18n();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        header { class: "portal_nav",
            span { class: "brand_name", {i18n.t(TrKey::HomeTitle)} }
            div { class: "nav_links",
                crate::LanguageMenu {}
                crate::ThemeToggle {}
            }
        }

        div { id: "hero",
            h1 { {i18n.t(TrKey::HomeTitle)} }
            p { class: "hero_subtitle", {i18n.t(TrKey::HomeSubtitle)} }
            p { class: "hint", {i18n.t(TrKey::HomeDescription)} }
            a { class: "btn primary", href: "{portal_href}", {i18n.t(TrKey::HomeGetStarted)} }
        }

        div { class: "panel",
            h2 { {i18n.t(TrKey::HomeAbout)} }
            p { {i18n.t(TrKey::HomeAboutDesc)} }
        }

        div { class: "panel",
            h2 { {i18n.t(TrKey::HomeFeatures)} }
            div { class: "card_grid",
                for (title, desc) in FEATURES {
                    div { key: "{title}", class: "card",
                        h3 { {i18n.t(title)} }
                        p { class: "hint", {i18n.t(desc)} }
                    }
                }
            }
        }

        div { class: "panel cta",
            h3 { {i18n.t(TrKey::HomeStartToday)} }
            p { class: "hint", {i18n.t(TrKey::HomeStartTodayDesc)} }
            a { class: "btn", href: "{portal_href}", {i18n.t(TrKey::HomeLoginNow)} }
        }
    }
}
