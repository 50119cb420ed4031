//! `/api/*` pass-through to the account backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls same-origin `/api/...` paths; this handler replays each
//! request once against `API_UPSTREAM` and relays the answer. Payloads are
//! never inspected. Only a fixed set of headers crosses in either direction.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderName, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::state::AppState;

/// Request headers copied onto the upstream request.
pub static FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [CONTENT_TYPE, ACCEPT, COOKIE, AUTHORIZATION];

/// Upstream response headers relayed to the browser.
pub static RELAYED_RESPONSE_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, SET_COOKIE, LOCATION];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Upstream URL for an incoming `path` and optional `query`.
#[must_use]
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{upstream}{path}?{q}"),
        _ => format!("{upstream}{path}"),
    }
}

/// Copy every value of each header in `names` from `from`.
#[must_use]
pub fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: forward to the upstream API.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, uri.path(), uri.query());
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(%method, %url, error = %e, "upstream unreachable"))?;

    let status = upstream.status();
    let relayed = copy_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;
    tracing::info!(%method, path = uri.path(), status = status.as_u16(), "api request proxied");
    Ok((status, relayed, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
