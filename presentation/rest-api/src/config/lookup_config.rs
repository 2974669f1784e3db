use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the product lookup service.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl LookupConfig {
    /// Environment variables:
    /// - LOOKUP_BASE_URL: REST base of the summary service
    ///   (default: "https://en.wikipedia.org/api/rest_v1")
    /// - LOOKUP_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("LOOKUP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: parse_timeout(env::var("LOOKUP_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
