//! Client-side navigation seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session gate operations navigate through the `Navigator` trait so they can
//! run against `leptos_router` in the browser and against a recorder in tests.
//! `MountGuard` drops navigation requested by a request that resolved after
//! its view was unmounted.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;
use leptos_router::NavigateOptions;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";

/// How a route transition treats browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Add a history entry.
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// Performs client-side route transitions.
pub trait Navigator {
    fn navigate(&self, path: &str, mode: Navigation);
}

/// Router options for a navigation mode.
#[must_use]
pub fn navigate_options(mode: Navigation) -> NavigateOptions {
    NavigateOptions { replace: mode == Navigation::Replace, ..NavigateOptions::default() }
}

/// `Navigator` over the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, mode: Navigation) {
        (self.navigate)(path, navigate_options(mode));
    }
}

/// Tracks whether the owning view is still mounted.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    /// A guard in the mounted state, not tied to any reactive owner.
    #[must_use]
    pub fn new() -> Self {
        Self { mounted: Arc::new(AtomicBool::new(true)) }
    }

    /// A guard that flips to unmounted when the current reactive owner is
    /// cleaned up. Call from inside a component body.
    #[must_use]
    pub fn install() -> Self {
        let guard = Self::new();
        let handle = guard.clone();
        on_cleanup(move || handle.unmount());
        guard
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Wrap a navigator so it becomes a no-op once this guard is unmounted.
    #[must_use]
    pub fn guard<N: Navigator>(&self, inner: N) -> GuardedNavigator<N> {
        GuardedNavigator { inner, guard: self.clone() }
    }
}

/// Navigator that only forwards while its view is mounted.
#[derive(Clone)]
pub struct GuardedNavigator<N> {
    inner: N,
    guard: MountGuard,
}

impl<N: Navigator> Navigator for GuardedNavigator<N> {
    fn navigate(&self, path: &str, mode: Navigation) {
        if self.guard.is_mounted() {
            self.inner.navigate(path, mode);
        } else {
            log::debug!("dropping navigation to {path}: view unmounted");
        }
    }
}
