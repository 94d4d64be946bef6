use super::*;

#[test]
fn banner_class_for_success() {
    assert_eq!(banner_class(AlertKind::Success), "alert alert-success alert-dismissible fade-in");
}

#[test]
fn banner_class_for_danger() {
    assert_eq!(banner_class(AlertKind::Danger), "alert alert-danger alert-dismissible fade-in");
}

fn keys(stack: &AlertStack) -> Vec<u64> {
    stack.alerts().iter().map(alert_key).collect()
}

#[test]
fn prepend_adds_one_new_key_and_keeps_existing_keys() {
    let mut stack = AlertStack::default();
    stack.prepend(AlertKind::Success, "first");
    let before = keys(&stack);

    let new_id = stack.prepend(AlertKind::Success, "second");
    let after = keys(&stack);

    assert_eq!(after[0], new_id);
    assert_eq!(&after[1..], before.as_slice());
    assert!(!before.contains(&new_id));
}

#[test]
fn dismiss_keeps_sibling_keys_bound_to_their_banners() {
    let mut stack = AlertStack::default();
    let a = stack.prepend(AlertKind::Success, "a");
    let b = stack.prepend(AlertKind::Danger, "b");
    let c = stack.prepend(AlertKind::Success, "c");

    stack.dismiss(b);

    assert_eq!(keys(&stack), vec![c, a]);
    let bodies: Vec<&str> = stack.alerts().iter().map(|alert| alert.body.as_str()).collect();
    assert_eq!(bodies, ["c", "a"]);
}
