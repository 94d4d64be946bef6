//! Post routes: the read-only post resources comments hang off.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::error;

use crate::services::post::{self, PostError};
use crate::state::AppState;

pub(crate) fn post_error_to_status(err: &PostError) -> StatusCode {
    match err {
        PostError::NotFound(_) => StatusCode::NOT_FOUND,
        PostError::Database(e) => {
            error!(error = %e, "post lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/v1/posts`: all posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<serde_json::Value>>, StatusCode> {
    let rows = post::list_posts(&state.pool).await.map_err(|e| post_error_to_status(&e))?;
    Ok(Json(rows.iter().map(|row| row.to_api_json(&state.base_url)).collect()))
}

/// `GET /api/v1/posts/{post_id}`: one post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let row = post::get_post(&state.pool, post_id)
        .await
        .map_err(|e| post_error_to_status(&e))?;
    Ok(Json(row.to_api_json(&state.base_url)))
}
