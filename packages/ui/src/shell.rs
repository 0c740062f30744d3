use dioxus::prelude::*;
use portal::{Role, TrKey, ViewKey};

use crate::dashboards::{AdminDashboard, CitizenDashboard, CommitteeDashboard, TechnicianDashboard};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Mounts the view the session selects: the login page when signed out,
/// otherwise the dashboard for the signed-in role inside the portal chrome.
#[component]
pub fn PortalShell(on_logout: EventHandler<()>) -> Element {
    let session = crate::use_session();
    let view = session.view();

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        div { class: "portal_shell", "data-view": view.as_str(),
            PortalNav { on_logout }
            main { class: "portal_main",
                {match view {
                    ViewKey::Login => rsx! { crate::LoginPage {} },
                    ViewKey::Dashboard(role) => rsx! { RoleDashboard { role } },
                }}
            }
            PortalFooter {}
        }
    }
}

#[component]
fn RoleDashboard(role: Role) -> Element {
    match role {
        Role::Citizen => rsx! { CitizenDashboard {} },
        Role::Technician => rsx! { TechnicianDashboard {} },
        Role::Committee => rsx! { CommitteeDashboard {} },
        Role::Administrator => rsx! { AdminDashboard {} },
    }
}

#[component]
fn PortalNav(on_logout: EventHandler<()>) -> Element {
    let i18n = crate::use_i18n();
    let role = crate::use_session().role();

    rsx! {
        nav { class: "portal_nav",
            div { class: "brand",
                span { class: "brand_mark" }
                div {
                    span { class: "brand_name", {i18n.t(TrKey::LoginTitle)} }
                    p { class: "hint", {i18n.t(TrKey::LoginSubtitle)} }
                }
            }
            div { class: "nav_links",
                if let Some(role) = role {
                    crate::RoleBadge { role }
                }
                crate::LanguageMenu {}
                crate::ThemeToggle {}
                if role.is_some() {
                    crate::LogoutButton { on_logout }
                }
            }
        }
    }
}

#[component]
fn PortalFooter() -> Element {
    let i18n = crate::use_i18n();

    rsx! {
        footer { class: "portal_footer",
            p { {i18n.t(TrKey::LayoutFooterTitle)} }
            div { class: "hint",
                p { {i18n.t(TrKey::LayoutFooterCopyright)} }
                p { {i18n.t(TrKey::LayoutFooterSlogan)} }
            }
        }
    }
}
