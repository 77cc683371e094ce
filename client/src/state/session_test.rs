use super::*;
use crate::net::types::Role;

fn alice() -> SessionUser {
    SessionUser { id: 1, username: "alice".to_owned(), email: "a@x.com".to_owned(), role: Role::Player }
}

// =============================================================
// SessionView
// =============================================================

#[test]
fn session_view_starts_loading() {
    let view = SessionView::default();
    assert!(view.is_loading());
    assert!(view.user().is_none());
}

#[test]
fn from_check_with_user_is_authenticated() {
    let view = SessionView::from_check(Some(alice()));
    assert_eq!(view, SessionView::Authenticated(alice()));
    assert_eq!(view.user(), Some(&alice()));
}

#[test]
fn from_check_without_user_holds_no_user() {
    let view = SessionView::from_check(None);
    assert_eq!(view, SessionView::Unauthenticated);
    assert!(!view.is_loading());
    assert!(view.user().is_none());
}

// =============================================================
// Profile text
// =============================================================

#[test]
fn profile_lines_for_alice() {
    let user = alice();
    assert_eq!(welcome_text(&user), "Welcome alice");
    assert_eq!(role_text(&user), "Role: player");
}

#[test]
fn role_line_for_watcher() {
    let user = SessionUser { role: Role::Watcher, ..alice() };
    assert_eq!(role_text(&user), "Role: watcher");
}
