use std::fmt;
use std::time::Duration;

use crate::throttle::ThrottlePolicy;

pub const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";

/// Connection settings for the DART open API.
#[derive(Clone)]
pub struct DartConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
    /// Total attempts per request, including the first one.
    pub max_retries: u32,
    /// Base delay before the first retry. Doubles on each further attempt.
    pub retry_delay: Duration,
    pub throttle: ThrottlePolicy,
}

impl DartConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            throttle: ThrottlePolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

// The key is a credential; keep it out of logs.
impl fmt::Debug for DartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("throttle", &self.throttle)
            .finish()
    }
}
