//! In-memory CSRF token store.
//!
//! DESIGN
//! ======
//! Tokens are random 32-byte hex strings handed to the page and posted back
//! with every comment form. A token stays valid for its whole TTL and may be
//! reused, so one page load can post several comments. Expired tokens are
//! dropped lazily on lookup and in bulk by a periodic sweep.
//!
//! The store holds at most `max_tokens` entries. Issuing past the cap first
//! drops expired tokens, then evicts the oldest live ones, so anonymous
//! token requests cannot grow memory without bound. Each token is also set
//! as a `SameSite=Strict` cookie by the route layer; see `routes::csrf`.
//!
//! TRADE-OFFS
//! ==========
//! The store is process-local: a restart invalidates every outstanding
//! token and the page has to fetch a fresh one.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::debug;

use super::encoding::bytes_to_hex;
use crate::config::env_parse;

const DEFAULT_CSRF_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_CSRF_MAX_TOKENS: usize = 10_000;
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Issued tokens and their issue time.
#[derive(Clone)]
pub struct CsrfTokens {
    ttl: Duration,
    max_tokens: usize,
    issued: Arc<Mutex<HashMap<String, Instant>>>,
}

impl CsrfTokens {
    /// `max_tokens` is clamped to at least one.
    #[must_use]
    pub fn new(ttl: Duration, max_tokens: usize) -> Self {
        Self { ttl, max_tokens: max_tokens.max(1), issued: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Build from `CSRF_TOKEN_TTL_SECS` (default one hour) and
    /// `CSRF_MAX_TOKENS` (default 10 000).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            Duration::from_secs(env_parse("CSRF_TOKEN_TTL_SECS", DEFAULT_CSRF_TOKEN_TTL_SECS)),
            env_parse("CSRF_MAX_TOKENS", DEFAULT_CSRF_MAX_TOKENS),
        )
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Instant>> {
        self.issued.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Issue a new token, evicting expired and then oldest tokens at the cap.
    #[must_use]
    pub fn issue(&self) -> String {
        self.issue_at(Instant::now())
    }

    fn issue_at(&self, now: Instant) -> String {
        let token = generate_token();
        let mut issued = self.lock();
        if issued.len() >= self.max_tokens {
            issued.retain(|_, at| now.saturating_duration_since(*at) < self.ttl);
        }
        while issued.len() >= self.max_tokens {
            let Some(oldest) = issued.iter().min_by_key(|(_, at)| **at).map(|(t, _)| t.clone()) else {
                break;
            };
            issued.remove(&oldest);
        }
        issued.insert(token.clone(), now);
        token
    }

    /// Whether `token` was issued and has not expired.
    #[must_use]
    pub fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Instant::now())
    }

    fn validate_at(&self, token: &str, now: Instant) -> bool {
        let mut issued = self.lock();
        match issued.get(token) {
            Some(at) if now.saturating_duration_since(*at) < self.ttl => true,
            Some(_) => {
                issued.remove(token);
                false
            }
            None => false,
        }
    }

    /// Drop expired tokens. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    fn sweep_at(&self, now: Instant) -> usize {
        let mut issued = self.lock();
        let before = issued.len();
        issued.retain(|_, at| now.saturating_duration_since(*at) < self.ttl);
        before - issued.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Spawn the background sweep of expired tokens. Returns a handle for shutdown.
pub fn spawn_sweep_task(tokens: CsrfTokens) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = tokens.sweep();
            if removed > 0 {
                debug!(removed, remaining = tokens.len(), "expired csrf tokens swept");
            }
        }
    })
}
