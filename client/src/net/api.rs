//! REST API helpers for the comment endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures come back as `Err(String)`; the caller
//! decides how to surface them. A non-2xx status whose body still decodes
//! as a submit response is treated as a normal outcome, since the server
//! reports CSRF and validation failures through the same envelope.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Comment, CommentSubmission, Post, SubmitOutcome};

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(post_id: &str) -> String {
    format!("/api/v1/posts/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_comments_endpoint(post_id: &str) -> String {
    format!("/api/v1/posts/{post_id}/comments")
}

/// Form action a post page hands to its comment form.
#[must_use]
pub fn comment_action(post_id: &str) -> String {
    format!("/post/{post_id}/comment")
}

#[cfg(any(test, feature = "hydrate"))]
fn undecodable_response_message(status: u16, err: &str) -> String {
    format!("unexpected response ({status}): {err}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// POST a comment form snapshot to `action` as
/// `application/x-www-form-urlencoded`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not a decodable submit response.
pub async fn submit_comment(action: &str, submission: &CommentSubmission) -> Result<SubmitOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| format!("{e:?}"))?;
        for (key, value) in submission.form_pairs() {
            params.append(key, value);
        }
        let resp = gloo_net::http::Request::post(action)
            .header("Accept", "application/json")
            .body(params)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| e.to_string())?;
        super::types::decode_submit_response(&text)
            .map_err(|e| undecodable_response_message(status, &e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, submission);
        Err("not available on server".to_owned())
    }
}

/// Fetch a post. `Ok(None)` means the server has no such post.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_post(post_id: &str) -> Result<Option<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_endpoint(post_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("post fetch", resp.status()));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        super::types::decode_post(&text).map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the comments of a post, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_post_comments(post_id: &str) -> Result<Vec<Comment>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_comments_endpoint(post_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("comment fetch", resp.status()));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        super::types::decode_comment_list(&text).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a CSRF token via `GET /api/csrf-token`. The response also sets the
/// matching cookie, which the browser sends back with the comment POST.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_csrf_token() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/csrf-token")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("csrf token request", resp.status()));
        }
        let body: super::types::CsrfTokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.csrf_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
