//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it together with Leptos SSR
//! rendering under a single Axum router. With `SERVE_UI` off the router is
//! API-only and `/` answers with the service banner.

pub mod auth;
pub mod drawing;

use std::path::PathBuf;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub(crate) const BANNER: &str = "Gesture API is running";

/// Parse configured origins into header values, skipping any that are not
/// valid header text.
pub(crate) fn origin_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);
    let values = origin_values(origins);
    if values.is_empty() { base.allow_origin(Any) } else { base.allow_origin(values) }
}

/// JSON API routes shared by the SSR app and external clients.
fn api_routes(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/api", get(banner))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/profile", get(auth::profile))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/ai/perfect-drawing", post(drawing::perfect_drawing))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if the UI is enabled and the Leptos configuration cannot
/// be loaded.
pub fn app(state: AppState) -> Result<Router, String> {
    let router = if state.config.serve_ui {
        leptos_app(state)?
    } else {
        api_routes(state).route("/", get(banner))
    };
    Ok(router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http()))
}

/// API routes + Leptos SSR pages + the compiled site assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn banner() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": BANNER }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
