use dioxus::prelude::*;
use portal::TrKey;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme_light",
            Theme::Dark => "theme_dark",
        }
    }
}

/// Stylesheet plus a light/dark wrapper. The choice is not persisted.
#[component]
pub fn PortalTheme(children: Element) -> Element {
    let theme = use_signal(|| Theme::Light);
    use_context_provider(|| theme);
    let theme_class = theme().class();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div { class: "portal_root {theme_class}", {children} }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let i18n = crate::use_i18n();
    let label = match theme() {
        Theme::Light => i18n.t(TrKey::CommonDarkMode),
        Theme::Dark => i18n.t(TrKey::CommonLightMode),
    };

    rsx! {
        button {
            class: "btn",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            {label}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Light.class(), Theme::Dark.class());
    }
}
