use super::*;
use crate::net::types::Comment;
use time::Duration;
use time::macros::datetime;

fn entry(fresh: bool) -> CommentEntry {
    CommentEntry {
        key: 1,
        comment: Comment {
            avatar_hash: "a.png".to_owned(),
            author_email: "x@y.com".to_owned(),
            timestamp: datetime!(2024-05-01 12:00:00 UTC),
            body: "hi".to_owned(),
        },
        fresh,
    }
}

#[test]
fn parts_carry_avatar_author_and_body() {
    let now = datetime!(2024-05-01 12:03:00 UTC);
    let parts = CommentItemParts::new(entry(true), now);
    assert_eq!(parts.avatar_src, "a.png");
    assert_eq!(parts.author, "x@y.com");
    assert_eq!(parts.body, "hi");
    assert!(parts.fresh);
}

#[test]
fn parts_format_relative_time() {
    let then = datetime!(2024-05-01 12:00:00 UTC);
    let parts = CommentItemParts::new(entry(false), then + Duration::minutes(3));
    assert_eq!(parts.when, "3 minutes ago");
    assert!(!parts.fresh);
}

#[test]
fn second_optimistic_insert_gets_its_own_key() {
    let mut list = CommentList::default();
    list.replace_all(vec![entry(false).comment]);
    let first = list.prepend(entry(true).comment, true);
    let before: Vec<u64> = list.entries().iter().map(entry_key).collect();

    let second = list.prepend(entry(true).comment, true);
    let after: Vec<u64> = list.entries().iter().map(entry_key).collect();

    assert_ne!(first, second);
    assert_eq!(after[0], second);
    assert_eq!(&after[1..], before.as_slice());
}
