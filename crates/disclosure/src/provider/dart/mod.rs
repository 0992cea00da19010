//! DART open API provider.
//!
//! Endpoints used:
//! - `empSttus.json`: workforce status per business segment and gender
//! - `fnlttSinglAcnt.json`: key accounts of the single-company statements
//! - `corpCode.xml`: zip archive of every registered corporation code

mod config;
mod corp_code_archive;

pub use config::{DartConfig, DEFAULT_BASE_URL};
pub use corp_code_archive::{parse_corp_code_xml, read_corp_code_archive};

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::traits::{CorpCodeSource, DisclosureProvider};
use crate::errors::{DisclosureError, RetryClass};
use crate::models::{
    CorpCodeEntry, DisclosureResponse, RawEmployeeRecord, RawFinancialRecord, ReportCode,
};
use crate::throttle::Throttle;

const PROVIDER_ID: &str = "DART";

const EMPLOYEE_ENDPOINT: &str = "empSttus.json";
const FINANCIAL_ENDPOINT: &str = "fnlttSinglAcnt.json";
const CORP_CODE_ENDPOINT: &str = "corpCode.xml";

/// Cap on the exponent of the retry backoff.
const MAX_BACKOFF_SHIFT: u32 = 6;

pub struct DartProvider {
    client: Client,
    config: DartConfig,
    throttle: Throttle,
    report_code: ReportCode,
}

impl DartProvider {
    pub fn new(config: DartConfig) -> Result<Self, DisclosureError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: DartConfig) -> Self {
        let throttle = Throttle::new(config.throttle.clone());
        Self {
            client,
            config,
            throttle,
            report_code: ReportCode::default(),
        }
    }

    /// Use a report other than the annual business report.
    pub fn with_report_code(mut self, report_code: ReportCode) -> Self {
        self.report_code = report_code;
        self
    }

    pub fn config(&self) -> &DartConfig {
        &self.config
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(MAX_BACKOFF_SHIFT);
        self.config.retry_delay.saturating_mul(1 << shift)
    }

    /// Run `operation` until it succeeds, fails terminally, or the attempt
    /// budget is spent.
    async fn with_retries<T, F, Fut>(
        &self,
        endpoint: &str,
        mut operation: F,
    ) -> Result<T, DisclosureError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DisclosureError>>,
    {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err)
                    if err.retry_class() == RetryClass::WithBackoff && attempt < max_attempts =>
                {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                        endpoint, attempt, max_attempts, err, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Issue one throttled GET and return the response once its HTTP status
    /// has been classified.
    async fn send_once(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, DisclosureError> {
        self.throttle.acquire().await;

        let response = self
            .client
            .get(self.config.endpoint_url(endpoint))
            .query(&[("crtfc_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DisclosureError::Timeout {
                        endpoint: endpoint.to_string(),
                    }
                } else {
                    DisclosureError::Network(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DisclosureError::RateLimited {
                endpoint: endpoint.to_string(),
            });
        }
        if status.is_server_error() {
            return Err(DisclosureError::ServerError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DisclosureError::ProviderError {
                status: status.as_u16().to_string(),
                message,
            });
        }

        Ok(response)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<DisclosureResponse<T>, DisclosureError> {
        let body = self
            .with_retries(endpoint, move || async move {
                let response = self.send_once(endpoint, params).await?;
                Ok(response.text().await?)
            })
            .await?;

        let parsed: DisclosureResponse<T> =
            serde_json::from_str(&body).map_err(|e| DisclosureError::InvalidResponse {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        if parsed.is_success() || parsed.is_no_data() {
            debug!(
                "{} answered status {} ({} rows)",
                endpoint,
                parsed.status,
                parsed.records().len()
            );
        } else {
            warn!(
                "{} answered status {}: {}",
                endpoint, parsed.status, parsed.message
            );
        }

        Ok(parsed)
    }

    async fn fetch_report<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        corp_code: &str,
        year: &str,
    ) -> Result<DisclosureResponse<T>, DisclosureError> {
        let params = [
            ("corp_code", corp_code),
            ("bsns_year", year),
            ("reprt_code", self.report_code.as_str()),
        ];
        self.request_json(endpoint, &params).await
    }
}

#[async_trait]
impl DisclosureProvider for DartProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_workforce_records(
        &self,
        corp_code: &str,
        year: &str,
    ) -> Result<DisclosureResponse<RawEmployeeRecord>, DisclosureError> {
        self.fetch_report(EMPLOYEE_ENDPOINT, corp_code, year).await
    }

    async fn fetch_financial_records(
        &self,
        corp_code: &str,
        year: &str,
    ) -> Result<DisclosureResponse<RawFinancialRecord>, DisclosureError> {
        self.fetch_report(FINANCIAL_ENDPOINT, corp_code, year).await
    }
}

#[async_trait]
impl CorpCodeSource for DartProvider {
    async fn load_corp_codes(&self) -> Result<Vec<CorpCodeEntry>, DisclosureError> {
        let bytes = self
            .with_retries(CORP_CODE_ENDPOINT, move || async move {
                let response = self.send_once(CORP_CODE_ENDPOINT, &[]).await?;
                Ok(response.bytes().await?)
            })
            .await?;

        let entries = read_corp_code_archive(&bytes)?;
        debug!("Loaded {} corporation codes", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn provider(max_retries: u32) -> DartProvider {
        let mut config = DartConfig::new("test-key");
        config.max_retries = max_retries;
        config.retry_delay = Duration::from_millis(1);
        DartProvider::with_client(Client::new(), config)
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let mut config = DartConfig::new("k");
        config.retry_delay = Duration::from_millis(100);
        let provider = DartProvider::with_client(Client::new(), config);

        assert_eq!(provider.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(provider.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(provider.backoff_delay(3), Duration::from_millis(400));
        assert_eq!(provider.backoff_delay(50), Duration::from_millis(6400));
    }

    #[tokio::test]
    async fn test_transient_errors_are_retried() {
        let provider = provider(3);
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result = provider
            .with_retries("empSttus.json", move || async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(DisclosureError::ServerError {
                        endpoint: "empSttus.json".to_string(),
                        status: 503,
                    })
                } else {
                    Ok(n)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_budget_is_bounded() {
        let provider = provider(2);
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result: Result<(), _> = provider
            .with_retries("empSttus.json", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(DisclosureError::RateLimited {
                    endpoint: "empSttus.json".to_string(),
                })
            })
            .await;

        assert!(matches!(result, Err(DisclosureError::RateLimited { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_terminal_errors_are_not_retried() {
        let provider = provider(5);
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result: Result<(), _> = provider
            .with_retries("fnlttSinglAcnt.json", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(DisclosureError::InvalidResponse {
                    endpoint: "fnlttSinglAcnt.json".to_string(),
                    message: "bad json".to_string(),
                })
            })
            .await;

        assert!(matches!(result, Err(DisclosureError::InvalidResponse { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider(1).id(), "DART");
    }
}
