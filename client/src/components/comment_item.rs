//! One entry of the comment list (`.media` item).

#[cfg(test)]
#[path = "comment_item_test.rs"]
mod comment_item_test;

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::state::comments::{CommentEntry, CommentList};
use crate::util::relative_time;

/// Display values for a comment, resolved against a reference time.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CommentItemParts {
    avatar_src: String,
    author: String,
    when: String,
    body: String,
    fresh: bool,
}

impl CommentItemParts {
    fn new(entry: CommentEntry, now: OffsetDateTime) -> Self {
        let CommentEntry { comment, fresh, .. } = entry;
        Self {
            when: relative_time::format_relative(comment.timestamp, now),
            avatar_src: comment.avatar_hash,
            author: comment.author_email,
            body: comment.body,
            fresh,
        }
    }
}

/// Render key of a list entry; see `alert_banner::alert_key`.
fn entry_key(entry: &CommentEntry) -> u64 {
    entry.key
}

#[component]
pub fn CommentItem(entry: CommentEntry) -> impl IntoView {
    let parts = CommentItemParts::new(entry, relative_time::now());
    view! {
        <li class="media" class:fade-in=parts.fresh>
            <div class="media-left">
                <img class="media-object img-rounded" src=parts.avatar_src alt="avatar"/>
            </div>
            <div class="media-body">
                <h4 class="media-heading">
                    {parts.author}
                    " "
                    <small class="comment-time">{parts.when}</small>
                </h4>
                <p class="comment-body">{parts.body}</p>
            </div>
        </li>
    }
}

/// Comment list insertion point (`.media-list`); the newest comment is the
/// first child.
#[component]
pub fn CommentListView(comments: RwSignal<CommentList>) -> impl IntoView {
    view! {
        <ul class="media-list">
            <For
                each=move || comments.with(|list| list.entries().to_vec())
                key=entry_key
                children=|entry: CommentEntry| view! { <CommentItem entry=entry/> }
            />
        </ul>
        <Show when=move || comments.with(|list| list.is_empty() && !list.loading)>
            <p class="comment-empty">"No comments yet."</p>
        </Show>
    }
}
