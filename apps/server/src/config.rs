use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use hireforecast_disclosure::provider::dart::DEFAULT_BASE_URL;
use hireforecast_disclosure::{DartConfig, ThrottlePolicy, DEFAULT_INDEX_TTL};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub dart_api_key: String,
    pub dart_base_url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub requests_per_minute: u32,
    pub throttle_burst: f64,
    pub corp_code_ttl: Duration,
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = var("HF_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid HF_LISTEN_ADDR")?;
        let dart_api_key = var("DART_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("DART_API_KEY is not set"))?;
        let dart_base_url = var("DART_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let cors_allow = var("HF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = parse_or(var("HF_REQUEST_TIMEOUT_MS"), 30000);
        let retry_delay_ms: u64 = parse_or(var("HF_RETRY_DELAY_MS"), 2000);
        let throttle = ThrottlePolicy::default();
        let ttl_secs: u64 = parse_or(var("HF_CORP_CODE_TTL_SECS"), DEFAULT_INDEX_TTL.as_secs());

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            dart_api_key,
            dart_base_url,
            max_retries: parse_or(var("HF_MAX_RETRIES"), 3),
            retry_delay: Duration::from_millis(retry_delay_ms),
            requests_per_minute: parse_or(var("HF_REQUESTS_PER_MINUTE"), throttle.requests_per_minute),
            throttle_burst: parse_or(var("HF_THROTTLE_BURST"), throttle.burst_capacity),
            corp_code_ttl: Duration::from_secs(ttl_secs),
        })
    }

    pub fn dart_config(&self) -> DartConfig {
        let mut dart = DartConfig::new(self.dart_api_key.clone()).with_base_url(&self.dart_base_url);
        dart.request_timeout = self.request_timeout;
        dart.max_retries = self.max_retries;
        dart.retry_delay = self.retry_delay;
        dart.throttle = ThrottlePolicy {
            requests_per_minute: self.requests_per_minute,
            burst_capacity: self.throttle_burst,
        };
        dart
    }
}
