//! Wire DTOs for the comment endpoints and the decoded submit outcome.
//!
//! DESIGN
//! ======
//! The server answers a comment POST with an untyped-looking envelope
//! (`message.type` + optional `comment`). Callers never see that envelope:
//! `decode_submit_response` validates it and returns a `SubmitOutcome`
//! tagged union, so rendering code matches on variants instead of strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Discriminator value the server uses for a successful submission.
pub const SUCCESS_TYPE: &str = "success";

// =============================================================================
// REQUEST
// =============================================================================

/// Snapshot of the comment form taken at submit time.
///
/// Owned, so every in-flight request carries its own copy of the fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommentSubmission {
    pub email: String,
    pub body: String,
    pub csrf_token: String,
}

impl CommentSubmission {
    /// Form-encoding pairs in wire order.
    #[must_use]
    pub fn form_pairs(&self) -> [(&'static str, &str); 3] {
        [("email", &self.email), ("body", &self.body), ("csrf_token", &self.csrf_token)]
    }
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// `message` object of the server response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageWire {
    #[serde(rename = "type")]
    pub kind: String,
    pub body: String,
}

/// `comment` object as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentWire {
    pub avatar_hash: String,
    pub author_email: String,
    pub timestamp: TimestampWire,
    pub body: String,
}

/// A timestamp is either an RFC 3339 string or epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimestampWire {
    Text(String),
    EpochMillis(i64),
}

/// Full server response to a comment POST.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitResponseWire {
    pub message: MessageWire,
    #[serde(default)]
    pub comment: Option<CommentWire>,
}

// =============================================================================
// DECODED TYPES
// =============================================================================

/// A comment ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Avatar image URL (the server stores the full gravatar URL here).
    pub avatar_hash: String,
    pub author_email: String,
    pub timestamp: OffsetDateTime,
    pub body: String,
}

/// Outcome of a comment submission as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `message.type == "success"`. `comment` is present when the server
    /// echoes the stored comment back.
    Success { body: String, comment: Option<Comment> },
    /// Any other `message.type`.
    Failure { body: String },
}

impl SubmitOutcome {
    /// Banner text for this outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { body, .. } | Self::Failure { body } => body,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid comment timestamp: {0}")]
    InvalidTimestamp(String),
}

// =============================================================================
// DECODING
// =============================================================================

/// Parse a wire timestamp.
///
/// # Errors
///
/// Returns `DecodeError::InvalidTimestamp` if the text is not RFC 3339 or the
/// epoch value is out of range.
pub fn parse_timestamp(raw: &TimestampWire) -> Result<OffsetDateTime, DecodeError> {
    match raw {
        TimestampWire::Text(text) => {
            OffsetDateTime::parse(text, &Rfc3339).map_err(|_| DecodeError::InvalidTimestamp(text.clone()))
        }
        TimestampWire::EpochMillis(ms) => OffsetDateTime::from_unix_timestamp_nanos(i128::from(*ms) * 1_000_000)
            .map_err(|_| DecodeError::InvalidTimestamp(ms.to_string())),
    }
}

impl TryFrom<CommentWire> for Comment {
    type Error = DecodeError;

    fn try_from(wire: CommentWire) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&wire.timestamp)?;
        Ok(Self { avatar_hash: wire.avatar_hash, author_email: wire.author_email, timestamp, body: wire.body })
    }
}

impl TryFrom<SubmitResponseWire> for SubmitOutcome {
    type Error = DecodeError;

    fn try_from(wire: SubmitResponseWire) -> Result<Self, Self::Error> {
        let SubmitResponseWire { message, comment } = wire;
        if message.kind != SUCCESS_TYPE {
            return Ok(Self::Failure { body: message.body });
        }
        let comment = comment.map(Comment::try_from).transpose()?;
        Ok(Self::Success { body: message.body, comment })
    }
}

/// Decode a comment POST response body.
///
/// A failure response never inspects `comment`, so a stray or broken comment
/// object on an error reply does not turn it into a decode error.
///
/// # Errors
///
/// Returns a `DecodeError` if the body is not the expected JSON shape or a
/// success comment carries an unparseable timestamp.
pub fn decode_submit_response(text: &str) -> Result<SubmitOutcome, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let message: MessageWire = serde_json::from_value(value.get("message").cloned().unwrap_or_default())?;
    if message.kind != SUCCESS_TYPE {
        return Ok(SubmitOutcome::Failure { body: message.body });
    }
    let wire: SubmitResponseWire = serde_json::from_value(value)?;
    SubmitOutcome::try_from(wire)
}

/// Decode a list of comments (`GET /api/v1/posts/{id}/comments`).
///
/// # Errors
///
/// Returns a `DecodeError` on malformed JSON or any unparseable timestamp.
pub fn decode_comment_list(text: &str) -> Result<Vec<Comment>, DecodeError> {
    let wire: Vec<CommentWire> = serde_json::from_str(text)?;
    wire.into_iter().map(Comment::try_from).collect()
}

/// `GET /api/v1/posts/{id}` body, minus the resource links.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PostWire {
    pub title: String,
    pub body: String,
    pub timestamp: TimestampWire,
}

/// A post as the post page shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub body: String,
    pub timestamp: OffsetDateTime,
}

impl TryFrom<PostWire> for Post {
    type Error = DecodeError;

    fn try_from(wire: PostWire) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&wire.timestamp)?;
        Ok(Self { title: wire.title, body: wire.body, timestamp })
    }
}

/// Decode a post resource.
///
/// # Errors
///
/// Returns a `DecodeError` on malformed JSON or an unparseable timestamp.
pub fn decode_post(text: &str) -> Result<Post, DecodeError> {
    let wire: PostWire = serde_json::from_str(text)?;
    Post::try_from(wire)
}

/// `GET /api/csrf-token` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
}
