use super::*;

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__TEST_QUIRE_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_QUIRE_EP_VALID__", " 99 ") };
    let val: usize = env_parse("__TEST_QUIRE_EP_VALID__", 0);
    assert_eq!(val, 99);
    unsafe { std::env::remove_var("__TEST_QUIRE_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_QUIRE_EP_INVALID__", "notanumber") };
    let val: u64 = env_parse("__TEST_QUIRE_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_QUIRE_EP_INVALID__") };
}

#[test]
fn base_url_defaults_to_localhost_port() {
    unsafe { std::env::remove_var("PUBLIC_BASE_URL") };
    assert_eq!(base_url(8080), "http://localhost:8080");
}
