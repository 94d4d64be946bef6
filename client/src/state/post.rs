//! Load state of the post shown above the comment section.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use crate::net::types::Post;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostLoad {
    #[default]
    Loading,
    Found(Post),
    Missing,
    Failed,
}

impl PostLoad {
    /// Fold a `fetch_post` result into a load state.
    #[must_use]
    pub fn from_fetch(result: Result<Option<Post>, String>) -> Self {
        match result {
            Ok(Some(post)) => Self::Found(post),
            Ok(None) => Self::Missing,
            Err(_) => Self::Failed,
        }
    }

    /// Whether the comment section should be offered for this post.
    #[must_use]
    pub fn accepts_comments(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Split a post body into paragraphs on blank lines.
#[must_use]
pub fn body_paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}
