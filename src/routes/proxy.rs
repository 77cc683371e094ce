//! Auth API forwarding.
//!
//! The browser talks to `/api/*` on this host so the Auth API's session
//! cookie stays first-party. Each request is relayed once; the upstream status,
//! body, content type and every `Set-Cookie` come back unchanged.
//!
//! The forwarded path is taken from the raw request URI, still percent-encoded,
//! so `%2F` and `%3F` reach the Auth API as data. Dot segments (`.`, `..` and
//! their `%2E` spellings) answer 400: the upstream URL must stay under
//! `AUTH_API_URL`.

use axum::body::Bytes;
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Prefix under which this host serves the Auth API.
pub(crate) const API_PREFIX: &str = "/api/";

/// Request headers relayed to the Auth API.
static FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [COOKIE, CONTENT_TYPE, ACCEPT];

/// Response headers relayed back to the browser.
static FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

/// Failure to relay a request to the Auth API.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid api path: {0}")]
    BadPath(String),

    #[error("auth api timed out")]
    Timeout,

    #[error("auth api unreachable: {0}")]
    Upstream(reqwest::Error),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e) }
    }
}

impl ProxyError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::BadPath(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "auth api request failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// `.` or `..`, in any mix of literal and percent-encoded dots.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Part of a raw request path forwarded to the Auth API: everything after
/// `/api/`, still percent-encoded.
pub(crate) fn forwarded_path(raw: &str) -> Result<&str, ProxyError> {
    let path = raw.strip_prefix(API_PREFIX).ok_or_else(|| ProxyError::BadPath(raw.to_owned()))?;
    if path.split(['/', '\\']).any(is_dot_segment) {
        return Err(ProxyError::BadPath(raw.to_owned()));
    }
    Ok(path)
}

/// Absolute Auth API URL for a forwarded path and optional raw query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Copy the listed headers (every value, in order) from `src` into a new map.
pub(crate) fn pick_headers(src: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in src.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: relay one request to the Auth API.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = forwarded_path(uri.path())?;
    let url = upstream_url(&state.auth_api_url, path, query.as_deref());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(pick_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = pick_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    tracing::debug!(%method, path = %path, status = status.as_u16(), "forwarded auth api request");
    Ok((status, response_headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
