//! Networking modules for the comment HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side requests and `types` defines the wire
//! schema plus the decoded submit outcome.

pub mod api;
pub mod types;
