//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration. Server
//! error bodies of the form `{"detail": "..."}` are surfaced as the message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorDetail;
use super::types::{LoginResponse, PerfectDrawing, RegisterRequest, StrokePoint, UserProfile};
use crate::state::dashboard::ProfileApi;

pub const PROFILE_ENDPOINT: &str = "/api/auth/profile";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const PERFECT_DRAWING_ENDPOINT: &str = "/api/ai/perfect-drawing";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Prefer the server's `detail` message; fall back to a status message.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(what: &str, status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(err) if !err.detail.is_empty() => err.detail,
        _ => request_failed_message(what, status),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(what: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(what, status, &body)
}

/// Fetch the profile for `token` from `/api/auth/profile`.
///
/// Returns the raw JSON body; validity is decided by the caller.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn get_profile(token: &str) -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("profile request", resp).await);
        }
        resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's `detail` message or a transport error string.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("login", resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the server's `detail` message or a transport error string.
pub async fn register(request: &RegisterRequest) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("registration", resp).await);
        }
        resp.json::<UserProfile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Delete the server session via `POST /api/auth/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Ask the server to recognize and clean up a drawn stroke.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn perfect_drawing(points: Vec<StrokePoint>) -> Result<PerfectDrawing, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::PerfectDrawingRequest { points };
        let resp = gloo_net::http::Request::post(PERFECT_DRAWING_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("shape recognition", resp).await);
        }
        resp.json::<PerfectDrawing>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = points;
        Err("not available on server".to_owned())
    }
}

/// [`ProfileApi`] over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProfileApi;

impl ProfileApi for HttpProfileApi {
    async fn fetch_profile(&self, token: &str) -> Result<serde_json::Value, String> {
        get_profile(token).await
    }
}
