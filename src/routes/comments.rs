//! Comment routes: form submission and the read-only comments API.
//!
//! ERROR HANDLING
//! ==============
//! The form endpoint always answers with the `{message, comment?}` envelope
//! so the browser can render a banner for every outcome. CSRF rejections use
//! 403, unknown posts 404, storage failures 500, and validation failures 200
//! with an `error` message, matching what the form script expects.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::csrf::form_token_is_valid;
use super::posts::post_error_to_status;
use crate::services::comment::{self, CommentError, CommentView};
use crate::services::post;
use crate::state::AppState;

pub(crate) const PUBLISHED_MESSAGE: &str = "Your comment has been published.";
pub(crate) const CSRF_REJECTED_MESSAGE: &str = "Your session has expired. Reload the page and try again.";
pub(crate) const POST_MISSING_MESSAGE: &str = "This post no longer exists.";
pub(crate) const SAVE_FAILED_MESSAGE: &str = "Your comment could not be saved. Please try again later.";

/// Posted comment form. Missing fields deserialize as empty and fail
/// validation instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub body: String,
}

/// Response envelope for `POST /post/{post_id}/comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentView>,
}

impl SubmitResponse {
    fn success(body: impl Into<String>, comment: CommentView) -> Self {
        Self { message: Message { kind: "success", body: body.into() }, comment: Some(comment) }
    }

    fn error(body: impl Into<String>) -> Self {
        Self { message: Message { kind: "error", body: body.into() }, comment: None }
    }
}

pub(crate) fn comment_error_to_status(err: &CommentError) -> StatusCode {
    match err {
        CommentError::NotFound(_) | CommentError::PostNotFound(_) => StatusCode::NOT_FOUND,
        CommentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /post/{post_id}/comment`: publish a comment from the post page form.
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<CommentForm>,
) -> (StatusCode, Json<SubmitResponse>) {
    if !form_token_is_valid(&state, &headers, &jar, &form.csrf_token) {
        warn!(post_id, "comment rejected: csrf check failed");
        return (StatusCode::FORBIDDEN, Json(SubmitResponse::error(CSRF_REJECTED_MESSAGE)));
    }

    if post_id < 1 {
        info!(post_id, "comment rejected: no such post");
        return (StatusCode::NOT_FOUND, Json(SubmitResponse::error(POST_MISSING_MESSAGE)));
    }

    let new_comment = match comment::validate_submission(&form.email, &form.body) {
        Ok(new_comment) => new_comment,
        Err(e) => {
            info!(post_id, reason = %e, "comment rejected by validation");
            return (StatusCode::OK, Json(SubmitResponse::error(e.to_string())));
        }
    };

    match comment::create_comment(&state.pool, post_id, &new_comment).await {
        Ok(row) => {
            info!(post_id, comment_id = row.id, "comment published");
            (StatusCode::OK, Json(SubmitResponse::success(PUBLISHED_MESSAGE, CommentView::from(&row))))
        }
        Err(CommentError::PostNotFound(_)) => {
            info!(post_id, "comment rejected: no such post");
            (StatusCode::NOT_FOUND, Json(SubmitResponse::error(POST_MISSING_MESSAGE)))
        }
        Err(e) => {
            error!(post_id, error = %e, "comment insert failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(SubmitResponse::error(SAVE_FAILED_MESSAGE)))
        }
    }
}

/// `GET /api/v1/comments`: all visible comments.
pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<serde_json::Value>>, StatusCode> {
    let rows = comment::list_comments(&state.pool).await.map_err(|e| {
        error!(error = %e, "comment list failed");
        comment_error_to_status(&e)
    })?;
    Ok(Json(rows.iter().map(|row| row.to_api_json(&state.base_url)).collect()))
}

/// `GET /api/v1/comments/{id}`: one comment.
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let row = comment::get_comment(&state.pool, id)
        .await
        .map_err(|e| comment_error_to_status(&e))?;
    Ok(Json(row.to_api_json(&state.base_url)))
}

/// `GET /api/v1/posts/{post_id}/comments`: a post's comments in the shape the
/// post page renders, newest first. Unknown posts are 404.
pub async fn list_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentView>>, StatusCode> {
    post::get_post(&state.pool, post_id).await.map_err(|e| post_error_to_status(&e))?;
    let rows = comment::list_post_comments(&state.pool, post_id).await.map_err(|e| {
        error!(post_id, error = %e, "post comment list failed");
        comment_error_to_status(&e)
    })?;
    Ok(Json(rows.iter().map(CommentView::from).collect()))
}
