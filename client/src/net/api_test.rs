use super::*;

#[test]
fn post_comments_endpoint_formats_expected_path() {
    assert_eq!(post_comments_endpoint("42"), "/api/v1/posts/42/comments");
}

#[test]
fn comment_action_formats_form_target() {
    assert_eq!(comment_action("42"), "/post/42/comment");
}

#[test]
fn undecodable_response_message_includes_status_and_cause() {
    assert_eq!(
        undecodable_response_message(502, "malformed response: expected value"),
        "unexpected response (502): malformed response: expected value"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("comment fetch", 500), "comment fetch failed: 500");
}


#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("42"), "/api/v1/posts/42");
}
