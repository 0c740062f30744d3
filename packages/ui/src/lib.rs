//! Shared UI for the Jal Rakshak portal: providers, the landing page, the
//! login flow and the role dashboards.

mod i18n;
pub use i18n::{t, use_i18n, I18n, I18nProvider, LanguageMenu};

mod storage;

mod session;
pub use session::{use_session, LogoutButton, RoleBadge, SessionHandle, SessionProvider};

mod theme;
pub use theme::{PortalTheme, Theme, ThemeToggle};

mod hero;
pub use hero::Hero;

mod login;
pub use login::LoginPage;

mod shell;
pub use shell::PortalShell;

mod assistant;
pub use assistant::WaterAssistant;

mod dashboards;
pub use dashboards::{AdminDashboard, CitizenDashboard, CommitteeDashboard, TechnicianDashboard};
