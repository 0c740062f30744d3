use portal::{LoginForm, Role, Session, SessionRouter, ViewKey};
use rstest::rstest;

#[rstest]
fn test_login_selects_role_dashboard(
    #[values(Role::Citizen, Role::Technician, Role::Committee, Role::Administrator)] role: Role,
) {
    let mut router = SessionRouter::new();
    router.login(role, "op1");
    assert_eq!(router.current_view_selector(), ViewKey::Dashboard(role));

    router.logout();
    assert_eq!(router.current_view_selector(), ViewKey::Login);
    assert_eq!(*router.session(), Session::Anonymous);
}

#[test]
fn test_technician_login_logout() {
    let mut router = SessionRouter::new();
    router.login(Role::Technician, "op1");
    assert_eq!(router.current_view_selector().as_str(), "technician");
    router.logout();
    assert_eq!(router.current_view_selector().as_str(), "login");
}

#[test]
fn test_form_feeds_login() {
    let mut form = LoginForm::default();
    form.select_role(Role::Committee);
    form.username = "sunita".to_string();
    assert!(!form.can_submit());
    form.password = "pw".to_string();

    let creds = form.validate().unwrap();
    let mut router = SessionRouter::new();
    router.login(creds.role, creds.username);

    assert_eq!(router.current_view_selector(), ViewKey::Dashboard(Role::Committee));
    assert_eq!(router.session().login_id(), Some("sunita"));
}
