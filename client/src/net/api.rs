//! REST calls against the Auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! `credentials: include` so the browser attaches the session cookie.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes `ApiError::Unsuccessful` carrying the raw
//! response text, which login/register display verbatim. Callers decide how
//! much of the error the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, RegistrationRequest, SessionUser};

/// Base URL used when `STREAMAPP_API_BASE` is not set at build time. The host
/// server forwards this prefix to the Auth API.
pub const DEFAULT_API_BASE: &str = "/api";

pub const LOGIN_PATH: &str = "login";
pub const REGISTER_PATH: &str = "register";
pub const LOGOUT_PATH: &str = "logout";
pub const ME_PATH: &str = "me";

/// Failure of a single Auth API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status. Displays as the body text.
    #[error("{body}")]
    Unsuccessful { status: u16, body: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Unsuccessful`, `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unsuccessful { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The four Auth API operations the views rely on.
///
/// Futures are `?Send` because the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /me`: current identity behind the session cookie.
    async fn me(&self) -> Result<SessionUser, ApiError>;

    /// `POST /login`: on success the API sets the session cookie.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /register`: creates an account; does not sign in.
    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError>;

    /// `POST /logout`: on success the API clears the session cookie.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Base URL baked in at compile time.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("STREAMAPP_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join an API base and an endpoint path with exactly one `/` between them.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `AuthApi` backed by the browser `fetch` API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Absolute URL of one endpoint under this base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }
}

#[cfg(feature = "hydrate")]
impl HttpAuthApi {
    fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        gloo_net::http::Request::get(&self.url(path)).credentials(web_sys::RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> gloo_net::http::RequestBuilder {
        gloo_net::http::Request::post(&self.url(path)).credentials(web_sys::RequestCredentials::Include)
    }

    /// Send and map any non-2xx response to `Unsuccessful` with its body text.
    async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Unsuccessful { status, body })
    }

    async fn send_json<T: serde::Serialize>(builder: gloo_net::http::RequestBuilder, body: &T) -> Result<(), ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::send(request).await.map(drop)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn me(&self) -> Result<SessionUser, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.get(ME_PATH).build().map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = Self::send(request).await?;
            resp.json::<SessionUser>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            Self::send_json(self.post(LOGIN_PATH), credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            Self::send_json(self.post(REGISTER_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.post(LOGOUT_PATH).build().map_err(|e| ApiError::Transport(e.to_string()))?;
            Self::send(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
