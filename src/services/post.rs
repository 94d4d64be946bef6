//! Post service: read access to the posts comments belong to.
//!
//! Posts are authored outside this service; here they are only looked up,
//! so a comment can be attached to (and listed under) a post that exists.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use sqlx::PgPool;
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("post not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from post queries.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub timestamp: OffsetDateTime,
}

impl PostRow {
    /// API representation: `{url, title, slug, body, timestamp, comments}`.
    #[must_use]
    pub fn to_api_json(&self, base_url: &str) -> serde_json::Value {
        let base = base_url.trim_end_matches('/');
        let timestamp = self
            .timestamp
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        serde_json::json!({
            "url": post_api_url(base, self.id),
            "title": self.title,
            "slug": self.slug,
            "body": self.body,
            "timestamp": timestamp,
            "comments": format!("{}/comments", post_api_url(base, self.id)),
        })
    }
}

/// API resource URL of a post.
#[must_use]
pub fn post_api_url(base_url: &str, id: i64) -> String {
    format!("{}/api/v1/posts/{id}", base_url.trim_end_matches('/'))
}

const POST_COLUMNS: &str = "id, title, slug, body, timestamp";

/// All posts, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostRow>, PostError> {
    let rows = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY timestamp DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch a single post by id.
///
/// # Errors
///
/// Returns `NotFound` for ids that cannot name a post (zero or negative) or
/// that no row has, or a database error.
pub async fn get_post(pool: &PgPool, id: i64) -> Result<PostRow, PostError> {
    if id < 1 {
        return Err(PostError::NotFound(id));
    }
    sqlx::query_as::<_, PostRow>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(PostError::NotFound(id))
}
