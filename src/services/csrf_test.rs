use super::*;

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(token, generate_token());
}

#[test]
fn issued_token_validates_repeatedly() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 16);
    let token = tokens.issue();
    assert!(tokens.validate(&token));
    assert!(tokens.validate(&token));
    assert_eq!(tokens.len(), 1);
}

#[test]
fn unknown_token_is_rejected() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 16);
    let _ = tokens.issue();
    assert!(!tokens.validate("not-a-token"));
    assert!(!tokens.validate(""));
}

#[test]
fn expired_token_is_rejected_and_removed() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 16);
    let token = tokens.issue();
    let later = Instant::now() + Duration::from_secs(61);
    assert!(!tokens.validate_at(&token, later));
    assert_eq!(tokens.len(), 0);
}

#[test]
fn sweep_drops_only_expired_tokens() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 16);
    let old = tokens.issue();
    let later = Instant::now() + Duration::from_secs(61);
    tokens.lock().insert("fresh".to_owned(), later);

    assert_eq!(tokens.sweep_at(later), 1);
    assert!(!tokens.validate_at(&old, later));
    assert!(tokens.validate_at("fresh", later));
}

#[test]
fn clones_share_the_store() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 16);
    let shared = tokens.clone();
    let token = tokens.issue();
    assert!(shared.validate(&token));
}

#[test]
fn from_env_reads_ttl() {
    unsafe { std::env::set_var("CSRF_TOKEN_TTL_SECS", "5") };
    unsafe { std::env::set_var("CSRF_MAX_TOKENS", "7") };
    let tokens = CsrfTokens::from_env();
    unsafe { std::env::remove_var("CSRF_TOKEN_TTL_SECS") };
    unsafe { std::env::remove_var("CSRF_MAX_TOKENS") };
    assert_eq!(tokens.ttl(), Duration::from_secs(5));
    assert_eq!(tokens.max_tokens, 7);
}

// =============================================================================
// capacity
// =============================================================================

#[test]
fn store_never_exceeds_capacity() {
    let tokens = CsrfTokens::new(Duration::from_secs(3600), 100);
    for _ in 0..5_000 {
        let _ = tokens.issue();
    }
    assert_eq!(tokens.len(), 100);
}

#[test]
fn issue_at_capacity_evicts_oldest_token() {
    let tokens = CsrfTokens::new(Duration::from_secs(3600), 2);
    let start = Instant::now();
    let oldest = tokens.issue_at(start);
    let middle = tokens.issue_at(start + Duration::from_secs(1));
    let newest = tokens.issue_at(start + Duration::from_secs(2));

    let now = start + Duration::from_secs(3);
    assert_eq!(tokens.len(), 2);
    assert!(!tokens.validate_at(&oldest, now));
    assert!(tokens.validate_at(&middle, now));
    assert!(tokens.validate_at(&newest, now));
}

#[test]
fn issue_at_capacity_prefers_dropping_expired_tokens() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 3);
    let start = Instant::now();
    let expired = tokens.issue_at(start);
    let live_a = tokens.issue_at(start + Duration::from_secs(100));
    let live_b = tokens.issue_at(start + Duration::from_secs(101));
    let _ = tokens.issue_at(start + Duration::from_secs(102));

    let now = start + Duration::from_secs(103);
    assert_eq!(tokens.len(), 3);
    assert!(!tokens.validate_at(&expired, now));
    assert!(tokens.validate_at(&live_a, now));
    assert!(tokens.validate_at(&live_b, now));
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let tokens = CsrfTokens::new(Duration::from_secs(60), 0);
    let first = tokens.issue();
    let second = tokens.issue();
    assert_eq!(tokens.len(), 1);
    assert!(!tokens.validate(&first));
    assert!(tokens.validate(&second));
}
