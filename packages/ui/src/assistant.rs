use dioxus::prelude::*;
use portal::{Assistant, Language, Speaker, TrKey};

/// Floating water assistant. Collapsed to a button until opened; the
/// conversation language is picked inside the panel.
#[component]
pub fn WaterAssistant() -> Element {
    let i18n = crate::use_i18n();
    let mut open = use_signal(|| false);
    let mut assistant = use_signal(Assistant::default);

    if !open() {
        return rsx! {
            button {
                class: "btn primary assistant_fab",
                title: i18n.t(TrKey::ChatbotOpen),
                onclick: move |_| open.set(true),
                "💬"
            }
        };
    }

    let chat_lang = assistant.read().language();
    let transcript = assistant.read().transcript().to_vec();
    let questions = assistant.read().questions();

    rsx! {
        div { class: "card assistant_panel",
            div { class: "panel_header assistant_header",
                strong { {i18n.t(TrKey::ChatbotAssistant)} }
                button {
                    class: "btn",
                    title: i18n.t(TrKey::ChatbotClose),
                    onclick: move |_| open.set(false),
                    "✕"
                }
            }
            {match chat_lang {
                None => rsx! {
                    div { class: "assistant_lang",
                        p { class: "hint", {i18n.t(TrKey::ChatbotPickLanguage)} }
                        for lang in Language::ALL {
                            button {
                                key: "{lang}",
                                class: "btn",
                                onclick: move |_| assistant.write().pick_language(lang),
                                {lang.native_name()}
                            }
                        }
                    }
                },
                Some(lang) => rsx! {
                    div { class: "assistant_transcript",
                        for (idx, msg) in transcript.into_iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: if msg.speaker == Speaker::User { "chat_msg chat_user" } else { "chat_msg chat_bot" },
                                {msg.text}
                            }
                        }
                    }
                    p { class: "hint", {TrKey::ChatbotCommonQuestions.text(lang)} }
                    div { class: "assistant_questions",
                        for (idx, question) in questions.into_iter().enumerate() {
                            button {
                                key: "{idx}",
                                class: "badge assistant_question",
                                onclick: move |_| {
                                    assistant.write().ask(idx);
                                },
                                {question}
                            }
                        }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| assistant.write().reset(),
                        {TrKey::ChatbotChangeLanguage.text(lang)}
                    }
                },
            }}
        }
    }
}
