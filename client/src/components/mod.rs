//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the comment section. They receive signal handles as
//! props from the page instead of looking up shared state or page elements.

pub mod alert_banner;
pub mod comment_form;
pub mod comment_item;
