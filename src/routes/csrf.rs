//! CSRF token route and the form-side token check.
//!
//! DESIGN
//! ======
//! Tokens are double-submitted: `GET /api/csrf-token` returns the token in
//! the JSON body and sets the same value as an `HttpOnly`, `SameSite=Strict`
//! cookie. A form POST is accepted only when the posted `csrf_token` equals
//! the cookie, the store still knows the token, and the request's `Origin`
//! (when the browser sends one) names this site. A third-party page can
//! neither read a token (no CORS on these routes, cross-origin requests are
//! refused) nor make the browser attach the cookie to a cross-site POST.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::warn;

use crate::state::AppState;

pub(crate) const CSRF_COOKIE_NAME: &str = "quire_csrf";

/// Scheme and authority of `url` (`https://host:port`), without any path.
fn origin_of(url: &str) -> &str {
    let url = url.trim_end_matches('/');
    let Some(scheme_end) = url.find("://") else {
        return url;
    };
    let rest = &url[scheme_end + 3..];
    match rest.find('/') {
        Some(path_start) => &url[..scheme_end + 3 + path_start],
        None => url,
    }
}

/// Whether the request's `Origin` header, if present, names this site:
/// either the configured public origin or the `Host` the request was sent to.
pub(crate) fn is_same_origin(headers: &HeaderMap, base_url: &str) -> bool {
    let Some(origin) = headers.get(header::ORIGIN) else {
        return true;
    };
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    if origin.eq_ignore_ascii_case(origin_of(base_url)) {
        return true;
    }
    let Some((_, authority)) = origin.split_once("://") else {
        return false;
    };
    headers
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .is_some_and(|host| host.eq_ignore_ascii_case(authority))
}

/// Double-submit check for a posted form token.
pub(crate) fn form_token_is_valid(state: &AppState, headers: &HeaderMap, jar: &CookieJar, form_token: &str) -> bool {
    if !is_same_origin(headers, &state.base_url) {
        return false;
    }
    let cookie_token = jar.get(CSRF_COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if cookie_token.is_empty() || cookie_token != form_token {
        return false;
    }
    state.csrf.validate(form_token)
}

/// `GET /api/csrf-token`: issue a token for the comment form and bind it to
/// this browser with a cookie.
pub async fn csrf_token(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Response {
    if !is_same_origin(&headers, &state.base_url) {
        warn!("csrf token refused: cross-origin request");
        return StatusCode::FORBIDDEN.into_response();
    }

    let token = state.csrf.issue();
    let max_age = time::Duration::try_from(state.csrf.ttl()).unwrap_or(time::Duration::HOUR);
    let cookie = Cookie::build((CSRF_COOKIE_NAME, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(state.base_url.starts_with("https://"))
        .max_age(max_age);

    (
        jar.add(cookie),
        [(header::CACHE_CONTROL, "no-store")],
        Json(serde_json::json!({ "csrf_token": token })),
    )
        .into_response()
}
