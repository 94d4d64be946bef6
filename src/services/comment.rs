//! Comment service: validation, avatars, persistence, and JSON shapes.
//!
//! DESIGN
//! ======
//! A posted comment is validated and normalized here before it touches the
//! database. Every stored comment carries a full gravatar URL in
//! `avatar_hash`, so clients can use the field directly as an image source.
//!
//! Two JSON shapes leave this module: the form-response `comment` object the
//! browser inserts optimistically (`CommentView`), and the read-only API
//! representation with resource URLs (`to_api_json`).

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use serde::Serialize;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use time::OffsetDateTime;

use super::encoding::bytes_to_hex;
use super::post::post_api_url;

const MAX_EMAIL_LEN: usize = 64;
const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";
const GRAVATAR_SIZE: u32 = 64;

// =============================================================================
// TYPES
// =============================================================================

/// Why a posted comment was refused. The display text is banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Please enter a comment.")]
    MissingBody,
}

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("comment not found: {0}")]
    NotFound(i64),
    #[error("post not found: {0}")]
    PostNotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A validated submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author_email: String,
    pub body: String,
    pub avatar_hash: String,
}

/// Row returned from comment queries.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub body: String,
    pub timestamp: OffsetDateTime,
    pub disabled: bool,
    pub author_email: String,
    pub avatar_hash: String,
}

/// `comment` object of the form response and the post comment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub avatar_hash: String,
    pub author_email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub body: String,
}

impl From<&CommentRow> for CommentView {
    fn from(row: &CommentRow) -> Self {
        Self {
            avatar_hash: row.avatar_hash.clone(),
            author_email: row.author_email.clone(),
            timestamp: row.timestamp,
            body: row.body.clone(),
        }
    }
}

impl CommentRow {
    /// API representation: `{url, post, body, timestamp, author}`.
    #[must_use]
    pub fn to_api_json(&self, base_url: &str) -> serde_json::Value {
        let base = base_url.trim_end_matches('/');
        let timestamp = self
            .timestamp
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        serde_json::json!({
            "url": format!("{base}/api/v1/comments/{}", self.id),
            "post": post_api_url(base, self.post_id),
            "body": self.body,
            "timestamp": timestamp,
            "author": self.author_email,
        })
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn is_plausible_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Gravatar image URL for `email` (SHA-256 of the trimmed, lowercased address).
#[must_use]
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let hash = bytes_to_hex(&hasher.finalize());
    format!("{GRAVATAR_BASE}/{hash}?s={GRAVATAR_SIZE}&d=identicon&r=g")
}

/// Validate and normalize a posted comment.
///
/// # Errors
///
/// Returns the first `ValidationError` found, checking the email first.
pub fn validate_submission(email: &str, body: &str) -> Result<NewComment, ValidationError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_plausible_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    let body = body.trim();
    if body.is_empty() {
        return Err(ValidationError::MissingBody);
    }
    Ok(NewComment { avatar_hash: gravatar_url(&email), author_email: email, body: body.to_owned() })
}

// =============================================================================
// PERSISTENCE
// =============================================================================

const COMMENT_COLUMNS: &str = "id, post_id, body, timestamp, disabled, author_email, avatar_hash";

/// Insert a validated comment under `post_id`.
///
/// # Errors
///
/// Returns `PostNotFound` if no post has `post_id`, or a database error if
/// the insert fails otherwise.
pub async fn create_comment(pool: &PgPool, post_id: i64, comment: &NewComment) -> Result<CommentRow, CommentError> {
    sqlx::query_as::<_, CommentRow>(&format!(
        "INSERT INTO comments (post_id, body, author_email, avatar_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(post_id)
    .bind(&comment.body)
    .bind(&comment.author_email)
    .bind(&comment.avatar_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => CommentError::PostNotFound(post_id),
        other => CommentError::Database(other),
    })
}

/// All visible comments, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_comments(pool: &PgPool) -> Result<Vec<CommentRow>, CommentError> {
    let rows = sqlx::query_as::<_, CommentRow>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE NOT disabled ORDER BY timestamp ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Visible comments of one post, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_post_comments(pool: &PgPool, post_id: i64) -> Result<Vec<CommentRow>, CommentError> {
    let rows = sqlx::query_as::<_, CommentRow>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments
         WHERE post_id = $1 AND NOT disabled
         ORDER BY timestamp DESC, id DESC"
    ))
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch a single comment by id.
///
/// # Errors
///
/// Returns `NotFound` if no visible comment has this id, or a database error.
pub async fn get_comment(pool: &PgPool, id: i64) -> Result<CommentRow, CommentError> {
    sqlx::query_as::<_, CommentRow>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND NOT disabled"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(CommentError::NotFound(id))
}
