//! Session state and the role-to-view mapping.

use serde::{Deserialize, Serialize};

use crate::i18n::TrKey;

/// Who is using the portal. Selects the dashboard and the nav badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Citizen,
    Technician,
    Committee,
    Administrator,
}

/// Badge color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Warning,
    Danger,
    Primary,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Safe => "safe",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Primary => "primary",
        }
    }
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Citizen,
        Role::Technician,
        Role::Committee,
        Role::Administrator,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Role::Citizen => "user",
            Role::Technician => "technician",
            Role::Committee => "vwsc",
            Role::Administrator => "admin",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "user" | "citizen" => Some(Role::Citizen),
            "technician" => Some(Role::Technician),
            "vwsc" | "committee" => Some(Role::Committee),
            "admin" | "administrator" => Some(Role::Administrator),
            _ => None,
        }
    }

    pub fn title_key(self) -> TrKey {
        match self {
            Role::Citizen => TrKey::RoleCitizen,
            Role::Technician => TrKey::RoleTechnician,
            Role::Committee => TrKey::RoleCommittee,
            Role::Administrator => TrKey::RoleAdmin,
        }
    }

    pub fn description_key(self) -> TrKey {
        match self {
            Role::Citizen => TrKey::RoleCitizenDesc,
            Role::Technician => TrKey::RoleTechnicianDesc,
            Role::Committee => TrKey::RoleCommitteeDesc,
            Role::Administrator => TrKey::RoleAdminDesc,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Role::Citizen => Tone::Safe,
            Role::Technician => Tone::Warning,
            Role::Committee | Role::Administrator => Tone::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { role: Role, login_id: String },
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn login_id(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { login_id, .. } => Some(login_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Which view the shell mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Login,
    Dashboard(Role),
}

impl ViewKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKey::Login => "login",
            ViewKey::Dashboard(role) => role.code(),
        }
    }
}

impl From<Role> for ViewKey {
    fn from(role: Role) -> Self {
        ViewKey::Dashboard(role)
    }
}

/// Owns the session and maps it to a [`ViewKey`].
///
/// There is no credential check: `login` trusts the form layer.
#[derive(Debug, Clone, Default)]
pub struct SessionRouter {
    session: Session,
}

impl SessionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login(&mut self, role: Role, login_id: impl Into<String>) {
        let login_id = login_id.into();
        if let Session::Authenticated { role: previous, .. } = &self.session {
            tracing::debug!(from = previous.code(), to = role.code(), "replacing active session");
        }
        tracing::info!(role = role.code(), "login");
        self.session = Session::Authenticated { role, login_id };
    }

    /// Login with a role code. Codes outside the role set are ignored.
    pub fn login_code(&mut self, role_code: &str, login_id: impl Into<String>) -> bool {
        match Role::from_code(role_code) {
            Some(role) => {
                self.login(role, login_id);
                true
            }
            None => {
                tracing::debug!(role_code, "rejected unknown role code");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(role) = self.session.role() {
            tracing::info!(role = role.code(), "logout");
        }
        self.session = Session::Anonymous;
    }

    pub fn current_view_selector(&self) -> ViewKey {
        match self.session.role() {
            None => ViewKey::Login,
            Some(role) => ViewKey::Dashboard(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn anonymous_selects_login() {
        let router = SessionRouter::new();
        assert_eq!(router.current_view_selector(), ViewKey::Login);
        assert_eq!(router.current_view_selector().as_str(), "login");
        assert!(!router.session().is_authenticated());
    }

    #[rstest]
    #[case(Role::Citizen, "user")]
    #[case(Role::Technician, "technician")]
    #[case(Role::Committee, "vwsc")]
    #[case(Role::Administrator, "admin")]
    fn login_selects_role_view(#[case] role: Role, #[case] code: &str) {
        let mut router = SessionRouter::new();
        router.login(role, "op1");
        assert_eq!(router.current_view_selector(), ViewKey::from(role));
        assert_eq!(router.current_view_selector().as_str(), code);
        assert_eq!(router.session().login_id(), Some("op1"));
    }

    #[test]
    fn logout_without_login_is_fine() {
        let mut router = SessionRouter::new();
        router.logout();
        assert_eq!(*router.session(), Session::Anonymous);
    }

    #[test]
    fn relogin_replaces_session() {
        let mut router = SessionRouter::new();
        router.login(Role::Citizen, "asha");
        router.login(Role::Administrator, "sarpanch");
        assert_eq!(router.session().role(), Some(Role::Administrator));
        assert_eq!(router.session().login_id(), Some("sarpanch"));
    }

    #[test]
    fn unknown_role_code_is_ignored() {
        let mut router = SessionRouter::new();
        assert!(!router.login_code("superuser", "x"));
        assert_eq!(router.current_view_selector(), ViewKey::Login);
        assert!(router.login_code("VWSC", "x"));
        assert_eq!(router.current_view_selector(), ViewKey::Dashboard(Role::Committee));
    }

    #[test]
    fn role_badges() {
        assert_eq!(Role::Citizen.tone(), Tone::Safe);
        assert_eq!(Role::Technician.tone(), Tone::Warning);
        assert_eq!(Role::Administrator.tone().class(), "primary");
    }
}
