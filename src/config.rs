//! Environment-driven configuration helpers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Read `key` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Listen port (`PORT`, default 3000).
#[must_use]
pub fn port() -> u16 {
    env_parse("PORT", 3000)
}

/// Public origin used in API resource links (`PUBLIC_BASE_URL`).
#[must_use]
pub fn base_url(port: u16) -> String {
    std::env::var("PUBLIC_BASE_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("http://localhost:{port}"))
}
