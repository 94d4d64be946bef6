//! Client-side state for the post page and its comment section.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by the page. All mutation lives in
//! methods here so the submit flow can be unit-tested without a browser.

pub mod alerts;
pub mod comment_form;
pub mod comments;
pub mod post;
