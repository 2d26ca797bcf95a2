//! REST API helpers for the auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `login` returns a `Result` so callers can store the failure message in
//! state instead of panicking; `logout` is fire-and-forget and swallows its
//! outcome entirely.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, User};
#[cfg(feature = "hydrate")]
use super::types::Credentials;

#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Authenticate via `POST /api/auth/login` with a JSON credentials body.
///
/// # Errors
///
/// Returns an `ApiError` carrying the service's `message` field when the
/// response is non-2xx, or a transport-level message when the request never
/// reached the service. Non-JSON error bodies fall back to a status-code
/// message.
pub async fn login(username: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let credentials = Credentials {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&credentials)
            .map_err(|e| ApiError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(resp
                .json::<ApiError>()
                .await
                .unwrap_or_else(|_| ApiError::new(login_failed_message(status))));
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::new(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::new("not available on server"))
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
/// Best-effort: the response is ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await;
    }
}
