use super::*;

// =============================================================
// FormStatus
// =============================================================

#[test]
fn begin_clears_previous_error() {
    let mut status = FormStatus { busy: false, error: Some("invalid credentials".to_owned()) };
    assert!(status.begin());
    assert!(status.busy);
    assert_eq!(status.error, None);
}

#[test]
fn begin_refuses_while_busy() {
    let mut status = FormStatus::default();
    assert!(status.begin());
    assert!(!status.begin());
    assert!(status.busy);
}

#[test]
fn settle_failure_shows_server_text() {
    let mut status = FormStatus::default();
    status.begin();
    status.settle(Err(ApiError::Unsuccessful { status: 401, body: "invalid credentials\n".to_owned() }));
    assert!(!status.busy);
    assert_eq!(status.error.as_deref(), Some("invalid credentials\n"));
}

#[test]
fn settle_transport_failure_is_prefixed() {
    let mut status = FormStatus::default();
    status.begin();
    status.settle(Err(ApiError::Transport("Failed to fetch".to_owned())));
    assert_eq!(status.error.as_deref(), Some("request failed: Failed to fetch"));
}

#[test]
fn settle_success_clears_busy() {
    let mut status = FormStatus::default();
    status.begin();
    status.settle(Ok(()));
    assert_eq!(status, FormStatus::default());
}

// =============================================================
// Forms
// =============================================================

#[test]
fn login_form_builds_credentials_as_typed() {
    let form = LoginForm { email: " a@x.com ".to_owned(), password: "pw".to_owned() };
    let creds = form.credentials();
    assert_eq!(creds.email, " a@x.com ");
    assert_eq!(creds.password, "pw");
}

#[test]
fn register_form_defaults_to_watcher() {
    assert_eq!(RegisterForm::default().request().role, Role::Watcher);
}

#[test]
fn register_form_role_tag_switches_role() {
    let mut form = RegisterForm::default();
    form.set_role_tag("player");
    assert_eq!(form.role, Role::Player);
    form.set_role_tag("admin");
    assert_eq!(form.role, Role::Player);
}

#[test]
fn register_form_builds_request() {
    let form = RegisterForm {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Player,
    };
    let req = form.request();
    assert_eq!(req.username, "bob");
    assert_eq!(req.email, "b@x.com");
    assert_eq!(req.role, Role::Player);
}

#[test]
fn form_debug_hides_password() {
    let login = LoginForm { email: "a@x.com".to_owned(), password: "hunter2".to_owned() };
    let register = RegisterForm { password: "hunter2".to_owned(), ..RegisterForm::default() };
    assert!(!format!("{login:?}").contains("hunter2"));
    assert!(!format!("{register:?}").contains("hunter2"));
}
