use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_MAX_AVATAR_MB: u64 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub max_avatar_bytes: u64,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("GYMTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            max_avatar_bytes: avatar_limit_bytes(env::var("GYMTRACK_MAX_AVATAR_MB").ok().as_deref()),
            email: env::var("GYMTRACK_EMAIL").ok(),
            password: env::var("GYMTRACK_PASSWORD").ok(),
        }
    }
}

/// Avatar limit in bytes from a megabyte count. Unparsable or overflowing
/// values fall back to the default.
fn avatar_limit_bytes(raw_mb: Option<&str>) -> u64 {
    raw_mb
        .and_then(|v| v.trim().parse::<u64>().ok())
        .and_then(|mb| mb.checked_mul(1024 * 1024))
        .unwrap_or(DEFAULT_MAX_AVATAR_MB * 1024 * 1024)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_avatar_bytes: DEFAULT_MAX_AVATAR_MB * 1024 * 1024,
            email: None,
            password: None,
        }
    }
}
