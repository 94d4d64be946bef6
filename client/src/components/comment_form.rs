//! Comment submission form.
//!
//! DESIGN
//! ======
//! The form is bound to explicit handles supplied by the page: its action
//! URL, the alert container, the field state, and optionally the comment
//! list. Passing a list selects the richer behavior (optimistic insert and
//! field clearing on success); without one only banners render.
//!
//! Every submit event is turned into exactly one POST. Requests are not
//! serialized: each task owns its captured fields, and completions apply in
//! whatever order they arrive.

use leptos::prelude::*;

use crate::state::alerts::AlertStack;
use crate::state::comment_form::CommentFormState;
use crate::state::comments::CommentList;

/// Form that intercepts submission and posts the comment asynchronously.
#[component]
pub fn CommentForm(
    /// Submission target, rendered as the form's `action`.
    action: String,
    /// Alert container receiving the outcome banner.
    alerts: RwSignal<AlertStack>,
    /// Input values, including the CSRF token supplied by the page.
    form: RwSignal<CommentFormState>,
    /// Comment list for optimistic inserts.
    #[prop(optional)]
    comments: Option<RwSignal<CommentList>>,
) -> impl IntoView {
    let action_attr = action.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // The page must never navigate, whatever happens to the request.
        ev.prevent_default();
        let submission = form.with_untracked(CommentFormState::capture);

        #[cfg(feature = "hydrate")]
        {
            let action = action.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_comment(&action, &submission).await {
                    Ok(outcome) => commit_outcome(&outcome, form, alerts, comments),
                    Err(e) => {
                        log::warn!("comment submission to {action} failed: {e}");
                        alerts.update(crate::state::comment_form::apply_transport_failure);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, comments, alerts);
        }
    };

    view! {
        <form class="comment-form" method="post" action=action_attr on:submit=on_submit>
            <input
                type="hidden"
                id="csrf_token"
                name="csrf_token"
                prop:value=move || form.with(|f| f.csrf_token.clone())
            />
            <div class="form-group">
                <label for="email">"Your email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    class="form-control"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="body">"Your comment"</label>
                <textarea
                    id="body"
                    name="body"
                    class="form-control"
                    rows="3"
                    prop:value=move || form.with(|f| f.body.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.body = value);
                    }
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">"Submit"</button>
        </form>
    }
}

/// Run the reducer on snapshots of the signals and write the results back.
#[cfg(feature = "hydrate")]
fn commit_outcome(
    outcome: &crate::net::types::SubmitOutcome,
    form: RwSignal<CommentFormState>,
    alerts: RwSignal<AlertStack>,
    comments: Option<RwSignal<CommentList>>,
) {
    let mut form_state = form.get_untracked();
    let mut stack = alerts.get_untracked();
    let mut list = comments.map(|signal| signal.get_untracked());

    crate::state::comment_form::apply_outcome(outcome, &mut form_state, &mut stack, list.as_mut());

    form.set(form_state);
    alerts.set(stack);
    if let (Some(signal), Some(list)) = (comments, list) {
        signal.set(list);
    }
}
