//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API paths (`/signup`, `/login`, `/logout`, `/me`) are part of the
//! original contract and must not move. The SPA runs on a different origin
//! in development, so CORS allows a single configured origin with
//! credentials — cookies do not cross origins under a wildcard.

pub mod auth;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into());
    let origin = origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CORS_ORIGIN));

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
