//! This crate contains the platform-neutral core of the Jal Rakshak portal:
//! the localization store, the session/role router and the demo data the
//! dashboards render.

pub mod assistant;
pub mod config;
pub mod i18n;
pub mod login;
pub mod monitoring;
pub mod preferences;
pub mod report;
pub mod session;

#[cfg(test)]
mod types_tests;

pub use assistant::{Assistant, ChatMessage, Speaker};
pub use config::PortalConfig;
pub use i18n::{translate, Language, LocaleStore, TrKey};
pub use login::{Credentials, LoginForm, LoginFormError};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use report::{ReportForm, ReportFormError, TechnicianReport};
pub use session::{Role, Session, SessionRouter, Tone, ViewKey};
