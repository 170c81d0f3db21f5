//! Session-gated profile view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard route is reachable only with a valid session. The phase
//! machine below decides, from the stored token and one profile fetch,
//! whether to show the profile or send the user back to `/login`.
//!
//! ```text
//! Loading ──no token──────────────────────────▶ Redirecting
//!    │
//!    └─token─▶ fetch ──body has email─────────▶ Authenticated(profile)
//!                    └─anything else (clears token)▶ Redirecting
//! ```

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::UserProfile;
use crate::state::session::SessionStore;

/// Route the dashboard sends unauthenticated users to.
pub const LOGIN_PATH: &str = "/login";

/// Profile lookup by session token.
pub trait ProfileApi {
    /// Fetch the raw profile body for `token`.
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<serde_json::Value, String>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardPhase {
    #[default]
    Loading,
    Authenticated(UserProfile),
    Redirecting,
}

impl DashboardPhase {
    #[must_use]
    pub fn is_redirecting(&self) -> bool {
        matches!(self, Self::Redirecting)
    }

    /// Placeholder text for the non-authenticated phases.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Redirecting => Some("Redirecting..."),
            Self::Authenticated(_) => None,
        }
    }
}

/// Resolve the dashboard phase from the stored token.
///
/// Makes no request when there is no token. Any fetch failure or a body
/// without an email deletes the token.
pub async fn load_dashboard<S, A>(session: &S, api: &A) -> DashboardPhase
where
    S: SessionStore + ?Sized,
    A: ProfileApi,
{
    let Some(token) = session.token() else {
        return DashboardPhase::Redirecting;
    };
    let profile = match api.fetch_profile(&token).await {
        Ok(body) => UserProfile::from_response(&body),
        Err(_) => None,
    };
    match profile {
        Some(profile) => DashboardPhase::Authenticated(profile),
        None => {
            session.clear();
            DashboardPhase::Redirecting
        }
    }
}

/// Hand `next` to `publish` unless `alive` has been cleared (view unmounted).
/// Returns whether it was published.
pub fn publish_if_alive(alive: &AtomicBool, next: DashboardPhase, publish: impl FnOnce(DashboardPhase)) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    publish(next);
    true
}

/// [`load_dashboard`], then [`publish_if_alive`]. A fetch that completes
/// after unmount publishes nothing.
pub async fn load_dashboard_while_alive<S, A>(
    session: &S,
    api: &A,
    alive: &AtomicBool,
    publish: impl FnOnce(DashboardPhase),
) -> bool
where
    S: SessionStore + ?Sized,
    A: ProfileApi,
{
    let next = load_dashboard(session, api).await;
    publish_if_alive(alive, next, publish)
}

#[must_use]
pub fn welcome_line(profile: &UserProfile) -> String {
    format!("Welcome, {}!", profile.display_name())
}

#[must_use]
pub fn email_line(profile: &UserProfile) -> String {
    format!("Email: {}", profile.email)
}
