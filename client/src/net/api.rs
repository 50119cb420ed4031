//! REST API client for the account backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since these endpoints only make sense in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A body of the form `{"success": false, ...}` is an application-level
//! failure regardless of HTTP status, so it is checked before the status
//! line. Anything else outside 2xx is a plain status failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Credentials, ProfileChanges, Registration, UserAccount};
#[cfg(feature = "csr")]
use crate::config::{LOGIN_ENDPOINT, REGISTER_ENDPOINT, SIGNOUT_ENDPOINT};

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered outside 2xx without a structured failure body.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The server answered `{"success": false}`.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Rejected { message: Option<String> },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// HTTP is not available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Account endpoints consumed by the form flows.
///
/// One method per endpoint, one attempt per call. Implementations never
/// retry.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// `POST /api/auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<UserAccount, ApiError>;

    /// `POST /api/auth/register`. The response body is ignored.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// `POST /api/user/update/:id`.
    async fn update_account(&self, id: &str, changes: &ProfileChanges) -> Result<UserAccount, ApiError>;

    /// `DELETE /api/user/delete/:id`.
    async fn delete_account(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/auth/signout`.
    async fn sign_out(&self) -> Result<(), ApiError>;
}

/// [`AccountApi`] backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAccountApi;

#[cfg(any(test, feature = "csr"))]
fn update_endpoint(id: &str) -> String {
    format!("/api/user/update/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn delete_endpoint(id: &str) -> String {
    format!("/api/user/delete/{id}")
}

/// Map a `{"success": false, "message": ...}` body to [`ApiError::Rejected`].
#[cfg(any(test, feature = "csr"))]
fn rejection(body: &serde_json::Value) -> Option<ApiError> {
    if body.get("success") != Some(&serde_json::Value::Bool(false)) {
        return None;
    }
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    Some(ApiError::Rejected { message })
}

#[cfg(any(test, feature = "csr"))]
fn check_response(status: u16, body: Option<serde_json::Value>) -> Result<serde_json::Value, ApiError> {
    if let Some(err) = body.as_ref().and_then(rejection) {
        return Err(err);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status });
    }
    Ok(body.unwrap_or(serde_json::Value::Null))
}

#[cfg(any(test, feature = "csr"))]
fn read_account(status: u16, body: Option<serde_json::Value>) -> Result<UserAccount, ApiError> {
    let body = check_response(status, body)?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn read_ack(status: u16, body: Option<serde_json::Value>) -> Result<(), ApiError> {
    check_response(status, body).map(|_| ())
}

/// Status plus best-effort JSON body. Non-JSON bodies (empty replies, HTML
/// error pages) come back as `None`.
#[cfg(feature = "csr")]
async fn read_response(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<(u16, Option<serde_json::Value>), ApiError> {
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    Ok((status, body))
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl AccountApi for HttpAccountApi {
    async fn login(&self, credentials: &Credentials) -> Result<UserAccount, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .json(credentials)
                .map_err(transport)?;
            let (status, body) = read_response(req.send().await).await?;
            read_account(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(REGISTER_ENDPOINT)
                .json(registration)
                .map_err(transport)?;
            let (status, body) = read_response(req.send().await).await?;
            read_ack(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_account(&self, id: &str, changes: &ProfileChanges) -> Result<UserAccount, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = update_endpoint(id);
            let req = gloo_net::http::Request::post(&url)
                .json(changes)
                .map_err(transport)?;
            let (status, body) = read_response(req.send().await).await?;
            read_account(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, changes);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_account(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = delete_endpoint(id);
            let sent = gloo_net::http::Request::delete(&url).send().await;
            let (status, body) = read_response(sent).await?;
            read_ack(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        // Only a transport failure keeps the local session: an expired
        // server session must still be able to sign out locally.
        #[cfg(feature = "csr")]
        {
            gloo_net::http::Request::get(SIGNOUT_ENDPOINT)
                .send()
                .await
                .map(|_| ())
                .map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
