//! Service layer for posts and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes stay thin: they extract the request and map errors to HTTP
//! responses, while these modules own validation, persistence, and token
//! bookkeeping.

pub mod comment;
pub mod csrf;
mod encoding;
pub mod post;
