//! Auth routes — signup, login, logout, profile fetch.
//!
//! Handlers translate between HTTP (JSON bodies, the session cookie) and
//! the auth service. Error bodies are always `{"message": ...}`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::auth::{AuthError, LoginPayload, SignupPayload};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const COOKIE_MAX_AGE_HOURS: i64 = 24;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Secure cookie flag: explicit `COOKIE_SECURE`, off by default so plain
/// HTTP works in development.
pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::hours(COOKIE_MAX_AGE_HOURS))
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

fn session_token(jar: &CookieJar) -> String {
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default()
        .to_owned()
}

/// Map an auth failure to its status and `{"message"}` body. Expected
/// misses (no session, bad credentials) are not logged; internal failures
/// are logged with detail but surfaced generically.
fn error_response(err: &AuthError) -> Response {
    let status = match err {
        AuthError::Validation(_) => StatusCode::BAD_REQUEST,
        AuthError::Conflict => StatusCode::CONFLICT,
        AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
        AuthError::NotFound => StatusCode::NOT_FOUND,
        AuthError::Internal(detail) => {
            tracing::error!(%detail, "auth internal failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(serde_json::json!({ "message": err.to_string() }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /signup` — validate, create the user, issue a session cookie.
pub async fn signup(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<SignupPayload>) -> Response {
    match state.auth.signup(payload).await {
        Ok((user, token)) => {
            let jar = jar.add(session_cookie(token));
            (jar, (StatusCode::CREATED, Json(user))).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `POST /login` — verify credentials, issue a session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<LoginPayload>) -> Response {
    match state.auth.login(payload).await {
        Ok((user, token)) => {
            let jar = jar.add(session_cookie(token));
            (jar, Json(user)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `POST /logout` — destroy the session (idempotent), clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    state.auth.logout(&session_token(&jar));
    let jar = jar.add(clear_session_cookie());
    (jar, Json(serde_json::json!({ "message": "Logged out successfully" }))).into_response()
}

/// `GET /me` — return the profile bound to the session cookie.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    match state.auth.profile(&session_token(&jar)).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
