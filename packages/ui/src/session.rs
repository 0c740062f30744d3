use dioxus::prelude::*;
use portal::{Role, Session, SessionRouter, ViewKey};

/// Handle to the shared session router.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    router: Signal<SessionRouter>,
}

impl SessionHandle {
    pub fn view(&self) -> ViewKey {
        self.router.read().current_view_selector()
    }

    pub fn session(&self) -> Session {
        self.router.read().session().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.router.read().session().role()
    }

    pub fn login(&self, role: Role, login_id: String) {
        let mut router = self.router;
        router.write().login(role, login_id);
    }

    pub fn logout(&self) {
        let mut router = self.router;
        router.write().logout();
    }
}

/// Provide an anonymous session to the component tree. Sessions are not
/// persisted: every app start begins signed out.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let router = use_signal(SessionRouter::new);
    use_context_provider(|| SessionHandle { router });

    rsx! { {children} }
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Role badge shown in the nav.
#[component]
pub fn RoleBadge(role: Role) -> Element {
    let i18n = crate::use_i18n();
    let tone = role.tone().class();

    rsx! {
        span { class: "badge badge_{tone}", {i18n.t(role.title_key())} }
    }
}

/// Ends the session, then calls `on_logout` so the platform can navigate
/// away.
#[component]
pub fn LogoutButton(on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    let i18n = crate::use_i18n();

    rsx! {
        button {
            class: "btn",
            onclick: move |_| {
                session.logout();
                on_logout.call(());
            },
            {i18n.t(portal::TrKey::LayoutLogout)}
        }
    }
}
