//! Post page: the post itself, then its comment form, alert container, and
//! comment list.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert_banner::AlertContainer;
use crate::components::comment_form::CommentForm;
use crate::components::comment_item::CommentListView;
use crate::net::api::comment_action;
use crate::state::alerts::AlertStack;
use crate::state::comment_form::CommentFormState;
use crate::state::comments::CommentList;
use crate::state::post::{PostLoad, body_paragraphs};
use crate::util::relative_time;

/// Route ids are numeric; anything else renders the not-found view.
fn parse_post_id(raw: Option<String>) -> Option<String> {
    raw.filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
}

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || parse_post_id(params.read().get("id"));

    view! {
        {move || match post_id() {
            Some(id) => view! { <PostView post_id=id/> }.into_any(),
            None => view! { <PostMissing/> }.into_any(),
        }}
    }
}

#[component]
fn PostMissing() -> impl IntoView {
    view! { <p class="post-missing">"Post not found."</p> }
}

/// One post and, unless the server has no such post, its comment section.
#[component]
fn PostView(post_id: String) -> impl IntoView {
    let post = RwSignal::new(PostLoad::default());

    #[cfg(feature = "hydrate")]
    {
        let post_id = post_id.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_post(&post_id).await;
            if let Err(e) = &result {
                log::warn!("post {post_id} load failed: {e}");
            }
            post.set(PostLoad::from_fetch(result));
        });
    }

    view! {
        {move || match post.get() {
            PostLoad::Loading => view! { <p class="post-loading">"Loading…"</p> }.into_any(),
            PostLoad::Found(found) => {
                let when = relative_time::format_relative(found.timestamp, relative_time::now());
                view! {
                    <article class="post">
                        <h1 class="post-title">{found.title}</h1>
                        <p class="post-time"><small>{when}</small></p>
                        {body_paragraphs(&found.body)
                            .into_iter()
                            .map(|paragraph| view! { <p>{paragraph}</p> })
                            .collect_view()}
                    </article>
                }
                .into_any()
            }
            PostLoad::Missing => view! { <PostMissing/> }.into_any(),
            PostLoad::Failed => view! { <p class="post-error">"This post could not be loaded."</p> }.into_any(),
        }}
        <Show when=move || post.with(PostLoad::accepts_comments)>
            <PostComments post_id=post_id.clone()/>
        </Show>
    }
}

/// Comment section for one post.
#[component]
fn PostComments(post_id: String) -> impl IntoView {
    let alerts = RwSignal::new(AlertStack::default());
    let form = RwSignal::new(CommentFormState::default());
    let comments = RwSignal::new(CommentList::pending());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_csrf_token().await {
                Ok(token) => form.update(|f| f.csrf_token = token),
                Err(e) => log::warn!("csrf token fetch failed: {e}"),
            }
        });
        let post_id = post_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_post_comments(&post_id).await {
                Ok(loaded) => comments.update(|list| list.replace_all(loaded)),
                Err(e) => {
                    log::warn!("comment load for post {post_id} failed: {e}");
                    comments.update(|list| list.loading = false);
                }
            }
        });
    }

    view! {
        <section class="post-comments">
            <h3>"Comments"</h3>
            <AlertContainer alerts=alerts>
                <CommentForm action=comment_action(&post_id) alerts=alerts form=form comments=comments/>
            </AlertContainer>
            <CommentListView comments=comments/>
        </section>
    }
}
