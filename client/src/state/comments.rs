//! Comment list state for a post page.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::Comment;

/// A rendered comment. `fresh` marks an optimistic insert that should fade in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentEntry {
    pub key: u64,
    pub comment: Comment,
    pub fresh: bool,
}

/// Comments ordered newest first.
#[derive(Clone, Debug, Default)]
pub struct CommentList {
    next_key: u64,
    entries: Vec<CommentEntry>,
    pub loading: bool,
}

impl CommentList {
    /// Empty list waiting for its initial load.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    fn next_key(&mut self) -> u64 {
        self.next_key += 1;
        self.next_key
    }

    /// Insert a comment as the first entry.
    pub fn prepend(&mut self, comment: Comment, fresh: bool) -> u64 {
        let key = self.next_key();
        self.entries.insert(0, CommentEntry { key, comment, fresh });
        key
    }

    /// Replace the list with server-loaded comments (already newest first).
    ///
    /// Entries inserted optimistically while the load was in flight stay on
    /// top; the server list is appended beneath them, minus any comment the
    /// optimistic inserts already show.
    pub fn replace_all(&mut self, comments: Vec<Comment>) {
        let mut entries: Vec<CommentEntry> = self.entries.drain(..).filter(|entry| entry.fresh).collect();
        let optimistic = entries.len();
        for comment in comments {
            if entries[..optimistic].iter().any(|entry| entry.comment == comment) {
                continue;
            }
            let key = self.next_key();
            entries.push(CommentEntry { key, comment, fresh: false });
        }
        self.entries = entries;
        self.loading = false;
    }

    #[must_use]
    pub fn entries(&self) -> &[CommentEntry] {
        &self.entries
    }

    #[must_use]
    pub fn first(&self) -> Option<&CommentEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
