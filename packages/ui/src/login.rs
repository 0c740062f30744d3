use dioxus::prelude::*;
use portal::{LoginForm, LoginFormError, Role, TrKey};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

/// Role picker followed by the credentials form. There is no credential
/// check: a complete form signs in as the chosen role.
#[component]
pub fn LoginPage() -> Element {
    let i18n = crate::use_i18n();
    let session = crate::use_session();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| None::<LoginFormError>);

    let selected = form.read().role;
    let Some(role) = selected else {
        return rsx! {
            document::Link { rel: "stylesheet", href: LOGIN_CSS }
            div { class: "login_page",
                h1 { {i18n.t(TrKey::LoginTitle)} }
                p { class: "hint", {i18n.t(TrKey::LoginSubtitle)} }
                h2 { {i18n.t(TrKey::LoginSelectCategory)} }
                div { class: "card_grid",
                    for role in Role::ALL {
                        div {
                            key: "{role:?}",
                            class: "card role_card",
                            onclick: move |_| {
                                form.write().select_role(role);
                                error.set(None);
                            },
                            crate::RoleBadge { role }
                            p { class: "hint", {i18n.t(role.description_key())} }
                            button { class: "btn primary", {i18n.t(TrKey::LoginLoginButton)} }
                        }
                    }
                }
            }
        };
    };

    let username = form.read().username.clone();
    let password = form.read().password.clone();
    let can_submit = form.read().can_submit();

    let submit = move |_| {
        let result = form.read().validate();
        match result {
            Ok(creds) => {
                error.set(None);
                session.login(creds.role, creds.username);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }
        div { class: "login_page",
            div { class: "card login_card",
                h2 { {i18n.t(TrKey::LoginTitle)} }
                p { class: "hint",
                    {i18n.t(TrKey::LoginLoginAs)}
                    " "
                    {i18n.t(role.title_key())}
                }
                label { r#for: "username", {i18n.t(TrKey::LoginUsername)} }
                input {
                    id: "username",
                    value: "{username}",
                    oninput: move |evt| form.write().username = evt.value(),
                }
                label { r#for: "password", {i18n.t(TrKey::LoginPassword)} }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                if let Some(err) = error() {
                    p { class: "error", {i18n.t(err.message_key())} }
                }
                div { class: "cta_row",
                    button {
                        class: "btn",
                        onclick: move |_| {
                            form.write().clear_role();
                            error.set(None);
                        },
                        {i18n.t(TrKey::LoginBack)}
                    }
                    button {
                        class: "btn primary",
                        disabled: !can_submit,
                        onclick: submit,
                        {i18n.t(TrKey::LoginLoginButton)}
                    }
                }
            }
        }
    }
}
