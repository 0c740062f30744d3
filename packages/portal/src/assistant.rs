//! Water assistant for citizens: a fixed set of questions with canned answers.
//!
//! The assistant keeps its own language, chosen when the conversation starts,
//! independent of the portal language.

use crate::i18n::{Language, TrKey};

/// Question and answer keys, in the order they are offered.
pub const FAQ: [(TrKey, TrKey); 5] = [
    (TrKey::ChatbotSupplyTimeQ, TrKey::ChatbotSupplyTimeA),
    (TrKey::ChatbotNitrateQ, TrKey::ChatbotNitrateA),
    (TrKey::ChatbotCleanQ, TrKey::ChatbotCleanA),
    (TrKey::ChatbotPurifyQ, TrKey::ChatbotPurifyA),
    (TrKey::ChatbotComplaintQ, TrKey::ChatbotComplaintA),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assistant {
    language: Option<Language>,
    transcript: Vec<ChatMessage>,
}

impl Assistant {
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Starts a conversation in `lang`. Any earlier transcript is replaced by
    /// the greeting.
    pub fn pick_language(&mut self, lang: Language) {
        self.language = Some(lang);
        self.transcript = vec![ChatMessage {
            speaker: Speaker::Bot,
            text: TrKey::ChatbotGreeting.text(lang),
        }];
    }

    /// Question texts on offer, empty until a language is picked.
    pub fn questions(&self) -> Vec<&'static str> {
        match self.language {
            Some(lang) => FAQ.iter().map(|(q, _)| q.text(lang)).collect(),
            None => Vec::new(),
        }
    }

    /// Appends the question at `index` and its answer. Returns `false` when no
    /// language is picked or the index is out of range.
    pub fn ask(&mut self, index: usize) -> bool {
        let Some(lang) = self.language else {
            return false;
        };
        let Some((question, answer)) = FAQ.get(index) else {
            tracing::debug!(index, "no such assistant question");
            return false;
        };
        self.transcript.push(ChatMessage {
            speaker: Speaker::User,
            text: question.text(lang),
        });
        self.transcript.push(ChatMessage {
            speaker: Speaker::Bot,
            text: answer.text(lang),
        });
        true
    }

    /// Back to language selection with an empty transcript.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_on_offer_before_a_language_is_picked() {
        let mut assistant = Assistant::default();
        assert!(assistant.questions().is_empty());
        assert!(!assistant.ask(0));
        assert!(assistant.transcript().is_empty());
    }

    #[test]
    fn greeting_follows_the_picked_language() {
        let mut assistant = Assistant::default();
        assistant.pick_language(Language::Hi);
        assert_eq!(assistant.transcript().len(), 1);
        assert!(assistant.transcript()[0].text.starts_with("नमस्ते"));

        assistant.pick_language(Language::En);
        assert_eq!(assistant.transcript().len(), 1);
        assert!(assistant.transcript()[0].text.starts_with("Hello"));
        assert_eq!(assistant.questions().len(), 5);
        assert_eq!(assistant.questions()[0], "When will water come?");
    }

    #[test]
    fn each_question_grows_the_transcript_by_two() {
        let mut assistant = Assistant::default();
        assistant.pick_language(Language::En);
        assert!(assistant.ask(1));
        assert!(assistant.ask(1));
        let transcript = assistant.transcript();
        assert_eq!(transcript.len(), 5);
        assert_eq!(transcript[1].speaker, Speaker::User);
        assert_eq!(transcript[1].text, "What is the safe nitrate level?");
        assert_eq!(transcript[2].speaker, Speaker::Bot);
        assert!(transcript[2].text.contains("45 mg/L"));
    }

    #[test]
    fn out_of_range_question_is_ignored() {
        let mut assistant = Assistant::default();
        assistant.pick_language(Language::Hi);
        assert!(!assistant.ask(FAQ.len()));
        assert_eq!(assistant.transcript().len(), 1);
    }

    #[test]
    fn reset_returns_to_language_selection() {
        let mut assistant = Assistant::default();
        assistant.pick_language(Language::En);
        assistant.ask(0);
        assistant.reset();
        assert_eq!(assistant.language(), None);
        assert!(assistant.transcript().is_empty());
    }
}
