use super::*;
use crate::net::types::Comment;
use time::macros::datetime;

// =============================================================
// Helpers
// =============================================================

fn filled_form() -> CommentFormState {
    CommentFormState {
        email: "x@y.com".to_owned(),
        body: "hi".to_owned(),
        csrf_token: "tok".to_owned(),
    }
}

fn posted_comment() -> Comment {
    Comment {
        avatar_hash: "a.png".to_owned(),
        author_email: "x@y.com".to_owned(),
        timestamp: datetime!(2024-05-01 12:00:00 UTC),
        body: "hi".to_owned(),
    }
}

fn success(comment: Option<Comment>) -> SubmitOutcome {
    SubmitOutcome::Success { body: "Your comment has been published.".to_owned(), comment }
}

fn failure() -> SubmitOutcome {
    SubmitOutcome::Failure { body: "Invalid email address.".to_owned() }
}

// =============================================================
// capture / clear_entry
// =============================================================

#[test]
fn capture_copies_all_three_fields() {
    let submission = filled_form().capture();
    assert_eq!(submission.email, "x@y.com");
    assert_eq!(submission.body, "hi");
    assert_eq!(submission.csrf_token, "tok");
}

#[test]
fn captures_are_independent_snapshots() {
    let mut form = filled_form();
    let first = form.capture();
    form.email = "other@y.com".to_owned();
    form.body = "second".to_owned();
    let second = form.capture();

    assert_eq!(first.email, "x@y.com");
    assert_eq!(first.body, "hi");
    assert_eq!(second.email, "other@y.com");
    assert_eq!(second.body, "second");
    assert_eq!(first.csrf_token, second.csrf_token);
}

#[test]
fn clear_entry_keeps_csrf_token() {
    let mut form = filled_form();
    form.clear_entry();
    assert!(form.email.is_empty());
    assert!(form.body.is_empty());
    assert_eq!(form.csrf_token, "tok");
}

// =============================================================
// apply_outcome: success
// =============================================================

#[test]
fn success_prepends_success_banner_with_exact_body() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    alerts.prepend(AlertKind::Danger, "older");

    apply_outcome(&success(None), &mut form, &mut alerts, None);

    let top = &alerts.alerts()[0];
    assert_eq!(top.kind, AlertKind::Success);
    assert_eq!(top.body, "Your comment has been published.");
    assert_eq!(alerts.len(), 2);
}

#[test]
fn success_without_list_leaves_fields() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    apply_outcome(&success(Some(posted_comment())), &mut form, &mut alerts, None);
    assert_eq!(form, filled_form());
}

#[test]
fn success_with_list_inserts_comment_first_and_clears_fields() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    let mut list = CommentList::default();
    list.prepend(
        Comment { body: "earlier".to_owned(), ..posted_comment() },
        false,
    );

    apply_outcome(&success(Some(posted_comment())), &mut form, &mut alerts, Some(&mut list));

    let first = list.first().unwrap();
    assert_eq!(first.comment, posted_comment());
    assert!(first.fresh);
    assert_eq!(list.len(), 2);
    assert!(form.email.is_empty());
    assert!(form.body.is_empty());
    assert_eq!(form.csrf_token, "tok");
    assert_eq!(alerts.alerts()[0].kind, AlertKind::Success);
}

#[test]
fn success_with_list_but_no_comment_still_clears_fields() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    let mut list = CommentList::default();

    apply_outcome(&success(None), &mut form, &mut alerts, Some(&mut list));

    assert!(list.is_empty());
    assert!(form.email.is_empty());
    assert!(form.body.is_empty());
}

// =============================================================
// apply_outcome: failure
// =============================================================

#[test]
fn failure_prepends_danger_banner_and_touches_nothing_else() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    let mut list = CommentList::default();
    list.prepend(posted_comment(), false);
    let before = list.entries().to_vec();

    apply_outcome(&failure(), &mut form, &mut alerts, Some(&mut list));

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts.alerts()[0].kind, AlertKind::Danger);
    assert_eq!(alerts.alerts()[0].body, "Invalid email address.");
    assert_eq!(list.entries(), before.as_slice());
    assert_eq!(form, filled_form());
}

// =============================================================
// apply_transport_failure
// =============================================================

#[test]
fn transport_failure_prepends_fixed_danger_banner() {
    let mut alerts = AlertStack::default();
    apply_transport_failure(&mut alerts);
    assert_eq!(alerts.alerts()[0].kind, AlertKind::Danger);
    assert_eq!(alerts.alerts()[0].body, TRANSPORT_FAILURE_MESSAGE);
}

// =============================================================
// Interleaved completions
// =============================================================

#[test]
fn completions_render_in_arrival_order() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    let mut list = CommentList::default();

    // Second request answers first.
    apply_outcome(&failure(), &mut form, &mut alerts, Some(&mut list));
    apply_outcome(&success(Some(posted_comment())), &mut form, &mut alerts, Some(&mut list));

    let kinds: Vec<AlertKind> = alerts.alerts().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, [AlertKind::Success, AlertKind::Danger]);
    assert_eq!(list.len(), 1);
}

#[test]
fn dismissing_a_banner_leaves_comments_alone() {
    let mut form = filled_form();
    let mut alerts = AlertStack::default();
    let mut list = CommentList::default();
    apply_outcome(&success(Some(posted_comment())), &mut form, &mut alerts, Some(&mut list));
    apply_outcome(&failure(), &mut form, &mut alerts, Some(&mut list));

    let success_id = alerts.alerts()[1].id;
    assert!(alerts.dismiss(success_id));

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts.alerts()[0].kind, AlertKind::Danger);
    assert_eq!(list.len(), 1);
}
