//! REST API helpers for communicating with the portal server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call returns `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/preference failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Language, User};
use crate::config::PortalConfig;

pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const LANGUAGE_PATH: &str = "/api/users/language";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request failed: {status}")]
    Status { status: u16 },

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn language_payload(lang: Language) -> serde_json::Value {
    serde_json::json!({ "language": lang.code() })
}

/// Fetch the user the bearer `token` belongs to (`GET /api/auth/me`).
///
/// # Errors
///
/// Returns an error if the request fails, the server responds non-2xx, or the
/// body is not a user record.
pub async fn fetch_current_user(config: &PortalConfig, token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url(CURRENT_USER_PATH))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Store `lang` on the user's server-side record (`PUT /api/users/language`).
///
/// # Errors
///
/// Returns an error if the request fails, the server responds non-2xx, or the
/// body is not a user record.
pub async fn update_language(config: &PortalConfig, token: &str, lang: Language) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&config.api_url(LANGUAGE_PATH))
            .header("Authorization", &bearer(token))
            .json(&language_payload(lang))
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, lang);
        Err(ApiError::Unavailable)
    }
}
