//! Error types and retry classification for the disclosure crate.
//!
//! This module provides:
//! - [`DisclosureError`]: The main error enum for all disclosure operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while talking to the DART disclosure service.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which the provider uses to decide
/// whether a request is repeated.
#[derive(Error, Debug)]
pub enum DisclosureError {
    /// No resolver could map the company name to a DART corporation code.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// DART has no filing for the requested company and period.
    #[error("No data for requested period")]
    NoData,

    /// The service rate limited the request (HTTP 429).
    #[error("Rate limited: {endpoint}")]
    RateLimited {
        /// The endpoint that rate limited the request
        endpoint: String,
    },

    /// The request timed out.
    #[error("Timeout: {endpoint}")]
    Timeout {
        /// The endpoint that timed out
        endpoint: String,
    },

    /// The service answered with a 5xx status.
    #[error("Server error: {endpoint} returned HTTP {status}")]
    ServerError {
        /// The endpoint that failed
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The service rejected the request with a DART status code or a 4xx.
    #[error("Provider error: {status} - {message}")]
    ProviderError {
        /// DART status code or HTTP status
        status: String,
        /// The message returned by the service
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse {
        /// The endpoint that produced the body
        endpoint: String,
        /// Decoder error
        message: String,
    },

    /// The corporation-code archive could not be read.
    #[error("Corp code index error: {0}")]
    CorpCodeIndex(String),

    /// A network error occurred while communicating with the service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl DisclosureError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hireforecast_disclosure::errors::{DisclosureError, RetryClass};
    ///
    /// let error = DisclosureError::RateLimited { endpoint: "empSttus".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = DisclosureError::CompanyNotFound("ACME".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::CompanyNotFound(_)
            | Self::NoData
            | Self::ProviderError { .. }
            | Self::InvalidResponse { .. }
            | Self::CorpCodeIndex(_) => RetryClass::Never,

            Self::RateLimited { .. }
            | Self::Timeout { .. }
            | Self::ServerError { .. }
            | Self::Network(_) => RetryClass::WithBackoff,
        }
    }
}
