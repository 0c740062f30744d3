//! Login form state. The form collects a role and credentials and hands the
//! validated result to [`SessionRouter::login`](crate::SessionRouter::login).

use thiserror::Error;

use crate::i18n::TrKey;
use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginFormError {
    #[error("no role selected")]
    MissingRole,
    #[error("username is empty")]
    MissingUsername,
    #[error("password is empty")]
    MissingPassword,
}

impl LoginFormError {
    pub fn message_key(self) -> TrKey {
        match self {
            LoginFormError::MissingRole => TrKey::LoginMissingRole,
            LoginFormError::MissingUsername => TrKey::LoginMissingUsername,
            LoginFormError::MissingPassword => TrKey::LoginMissingPassword,
        }
    }
}

/// What a valid form yields. The password is not kept: nothing checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub role: Role,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Option<Role>,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Back to role selection. Typed credentials are cleared.
    pub fn clear_role(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<Credentials, LoginFormError> {
        let role = self.role.ok_or(LoginFormError::MissingRole)?;
        let username = self.username.trim();
        if username.is_empty() {
            return Err(LoginFormError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(LoginFormError::MissingPassword);
        }
        Ok(Credentials {
            role,
            username: username.to_string(),
        })
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginForm {
        LoginForm {
            role: Some(Role::Technician),
            username: " op1 ".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn valid_form_yields_trimmed_username() {
        let creds = filled().validate().unwrap();
        assert_eq!(creds.role, Role::Technician);
        assert_eq!(creds.username, "op1");
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = filled();
        form.password.clear();
        assert_eq!(form.validate(), Err(LoginFormError::MissingPassword));
        form.username = "   ".to_string();
        assert_eq!(form.validate(), Err(LoginFormError::MissingUsername));
        form.role = None;
        assert_eq!(form.validate(), Err(LoginFormError::MissingRole));
        assert!(!form.can_submit());
    }

    #[test]
    fn clear_role_resets_credentials() {
        let mut form = filled();
        form.clear_role();
        assert_eq!(form, LoginForm::default());
        form.select_role(Role::Citizen);
        assert_eq!(form.role, Some(Role::Citizen));
    }
}
