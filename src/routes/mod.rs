//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the comment endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. Post pages are rendered by the
//! `client` crate; its WASM bundle and stylesheet are served from `/pkg`.
//!
//! Only the read-only `/api/v1` resources carry a permissive CORS layer. The
//! CSRF token and comment form routes are same-origin only.


pub mod comments;
pub mod csrf;
pub mod posts;

use std::path::PathBuf;

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Same-origin routes: CSRF token issue and the comment form POST.
fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/post/{post_id}/comment", post(comments::submit_comment))
        .route("/api/csrf-token", get(csrf::csrf_token))
}

/// Read-only resources, readable from any origin.
fn read_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/posts", get(posts::list_posts))
        .route("/api/v1/posts/{post_id}", get(posts::get_post))
        .route("/api/v1/posts/{post_id}/comments", get(comments::list_post_comments))
        .route("/api/v1/comments", get(comments::list_comments))
        .route("/api/v1/comments/{id}", get(comments::get_comment))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Comment form and read-only API routes.
pub fn api_routes(state: AppState) -> Router {
    form_routes().merge(read_routes()).with_state(state)
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
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
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
