//! Account routes: register, login, profile, logout.
//!
//! Sessions are bearer tokens. The client keeps the token and sends it as
//! `Authorization: Bearer <token>`; errors carry a `{"detail": ...}` body.

use axum::extract::{FromRef, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::account::{self, AccountError, NewUser, UserRecord};
use crate::services::session;
use crate::state::AppState;

/// JSON error response with a human-readable `detail`.
pub(crate) fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": message }))).into_response()
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::InvalidEmail | AccountError::MissingFields => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::Duplicate | AccountError::InvalidCredentials => StatusCode::BAD_REQUEST,
        AccountError::Hash(_) | AccountError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn account_error_detail(err: &AccountError) -> &'static str {
    match err {
        AccountError::InvalidEmail => "Invalid email address",
        AccountError::MissingFields => "Name, email, username and password are required",
        AccountError::Duplicate => "Email or username already exists",
        AccountError::InvalidCredentials => "Invalid username or password",
        AccountError::Hash(_) | AccountError::Db(_) => "Internal server error",
    }
}

fn account_error_response(err: &AccountError) -> Response {
    match err {
        AccountError::Db(e) => tracing::error!(error = %e, "account query failed"),
        AccountError::Hash(e) => tracing::error!(error = %e, "password hashing failed"),
        _ => {}
    }
    detail(account_error_to_status(err), account_error_detail(err))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user resolved from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserRecord,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(detail(StatusCode::UNAUTHORIZED, "Not authenticated"));
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            })?
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Invalid or expired session"))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// `POST /api/auth/register` — create an account.
pub async fn register(State(state): State<AppState>, Json(body): Json<NewUser>) -> Response {
    match account::register(&state.pool, &body).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => account_error_response(&e),
    }
}

/// `POST /api/auth/login` — check credentials and mint a session token.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let user = match account::login(&state.pool, &body.username, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            if matches!(e, AccountError::InvalidCredentials) {
                tracing::info!(username = %body.username.trim(), "login rejected");
            }
            return account_error_response(&e);
        }
    };

    match session::create_session(&state.pool, user.id, state.session_ttl_hours()).await {
        Ok(token) => {
            tracing::info!(user_id = %user.id, "session created");
            Json(LoginResponse { message: format!("Welcome {}", user.name), token }).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = %user.id, "session insert failed");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `GET /api/auth/profile` — return the current user.
pub async fn profile(auth: AuthUser) -> Json<UserRecord> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete the session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
