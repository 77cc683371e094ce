//! Session gate operations shared by the login, register and profile views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself is an opaque cookie owned by the Auth API. These helpers
//! only ask the API whether a valid one exists (`check_session`) or ask it to
//! create/destroy one, then decide where the view navigates next. They are
//! generic over `AuthApi` and `Navigator` so views pass the browser
//! implementations and tests pass scripted ones.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, RegistrationRequest, SessionUser};
use crate::util::navigate::{HOME_ROUTE, LOGIN_ROUTE, Navigation, Navigator};

/// Ask the identity endpoint who the current session belongs to.
///
/// Any failure (non-2xx, network, undecodable body) redirects to `/login`
/// exactly once and yields `None`; nothing is surfaced to the caller.
pub async fn check_session<A, N>(api: &A, navigator: &N) -> Option<SessionUser>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    match api.me().await {
        Ok(user) => Some(user),
        Err(e) => {
            match e.status() {
                Some(status) => log::debug!("identity check rejected ({status}), redirecting to login"),
                None => log::debug!("identity check failed, redirecting to login: {e}"),
            }
            navigator.navigate(LOGIN_ROUTE, Navigation::Replace);
            None
        }
    }
}

/// Submit credentials; on success go to the profile view.
///
/// # Errors
///
/// Returns the `ApiError` unchanged so the view can show its text. No
/// navigation happens on failure.
pub async fn login<A, N>(api: &A, navigator: &N, credentials: &Credentials) -> Result<(), ApiError>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    api.login(credentials).await?;
    navigator.navigate(HOME_ROUTE, Navigation::Push);
    Ok(())
}

/// Create an account; on success go to the login view (no auto sign-in).
///
/// # Errors
///
/// Returns the `ApiError` unchanged so the view can show its text.
pub async fn register<A, N>(api: &A, navigator: &N, request: &RegistrationRequest) -> Result<(), ApiError>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    api.register(request).await?;
    navigator.navigate(LOGIN_ROUTE, Navigation::Push);
    Ok(())
}

/// End the session; on success go to the login view.
///
/// Failures are logged and returned, but views leave themselves unchanged.
///
/// # Errors
///
/// Returns the `ApiError` from the logout request.
pub async fn logout<A, N>(api: &A, navigator: &N) -> Result<(), ApiError>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    match api.logout().await {
        Ok(()) => {
            navigator.navigate(LOGIN_ROUTE, Navigation::Replace);
            Ok(())
        }
        Err(e) => {
            log::warn!("logout failed: {e}");
            Err(e)
        }
    }
}
