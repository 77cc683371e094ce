use super::test_helpers::RecordingNavigator;
use super::*;
use std::cell::RefCell;

// =============================================================
// navigate_options
// =============================================================

#[test]
fn push_does_not_replace_history() {
    assert!(!navigate_options(Navigation::Push).replace);
}

#[test]
fn replace_overwrites_history_entry() {
    assert!(navigate_options(Navigation::Replace).replace);
}

// =============================================================
// RouterNavigator
// =============================================================

#[test]
fn router_navigator_forwards_path_and_replace_flag() {
    let seen = RefCell::new(Vec::new());
    let nav = RouterNavigator::new(|path: &str, opts: NavigateOptions| {
        seen.borrow_mut().push((path.to_owned(), opts.replace));
    });
    nav.navigate(LOGIN_ROUTE, Navigation::Replace);
    nav.navigate(HOME_ROUTE, Navigation::Push);
    assert_eq!(
        seen.into_inner(),
        vec![(LOGIN_ROUTE.to_owned(), true), (HOME_ROUTE.to_owned(), false)]
    );
}

// =============================================================
// MountGuard
// =============================================================

#[test]
fn guard_starts_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn guard_clones_share_state() {
    let guard = MountGuard::new();
    let other = guard.clone();
    other.unmount();
    assert!(!guard.is_mounted());
}

#[test]
fn guarded_navigator_forwards_while_mounted() {
    let recorder = RecordingNavigator::default();
    let guard = MountGuard::new();
    guard.guard(&recorder).navigate(REGISTER_ROUTE, Navigation::Push);
    assert_eq!(recorder.calls(), vec![(REGISTER_ROUTE.to_owned(), Navigation::Push)]);
}

#[test]
fn guarded_navigator_drops_after_unmount() {
    let recorder = RecordingNavigator::default();
    let guard = MountGuard::new();
    let nav = guard.guard(&recorder);
    guard.unmount();
    nav.navigate(LOGIN_ROUTE, Navigation::Replace);
    assert!(recorder.calls().is_empty());
}
