//! Comment form state and the submit-outcome reducer.
//!
//! DESIGN
//! ======
//! The `CommentForm` component owns the browser side (event, request task);
//! everything that decides what the page looks like afterwards lives here:
//! which banner to prepend, whether the comment list grows, whether the
//! inputs are cleared. The component passes explicit handles in, so nothing
//! here looks up page elements.
//!
//! ERROR HANDLING
//! ==============
//! Server-reported failures render the server's text. Transport failures
//! (request never completed, body not decodable) render a fixed danger
//! banner instead of leaving the page silently unchanged.

#[cfg(test)]
#[path = "comment_form_test.rs"]
mod comment_form_test;

use super::alerts::{AlertKind, AlertStack};
use super::comments::CommentList;
use crate::net::types::{CommentSubmission, SubmitOutcome};

/// Banner text shown when a submission never produced a server answer.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Your comment could not be sent. Please try again.";

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentFormState {
    pub email: String,
    pub body: String,
    pub csrf_token: String,
}

impl CommentFormState {
    /// Snapshot the fields for one request.
    #[must_use]
    pub fn capture(&self) -> CommentSubmission {
        CommentSubmission {
            email: self.email.clone(),
            body: self.body.clone(),
            csrf_token: self.csrf_token.clone(),
        }
    }

    /// Clear the user-entered fields. The CSRF token stays for the next post.
    pub fn clear_entry(&mut self) {
        self.email.clear();
        self.body.clear();
    }
}

/// Apply a server outcome to the page state.
///
/// `comments` is the comment list handle; passing `None` renders banners
/// only and leaves the inputs as typed.
pub fn apply_outcome(
    outcome: &SubmitOutcome,
    form: &mut CommentFormState,
    alerts: &mut AlertStack,
    comments: Option<&mut CommentList>,
) {
    match outcome {
        SubmitOutcome::Success { body, comment } => {
            alerts.prepend(AlertKind::Success, body.as_str());
            if let Some(list) = comments {
                if let Some(comment) = comment {
                    list.prepend(comment.clone(), true);
                }
                form.clear_entry();
            }
        }
        SubmitOutcome::Failure { body } => {
            alerts.prepend(AlertKind::Danger, body.as_str());
        }
    }
}

/// Surface a request that failed before producing an outcome.
pub fn apply_transport_failure(alerts: &mut AlertStack) {
    alerts.prepend(AlertKind::Danger, TRANSPORT_FAILURE_MESSAGE);
}
