//! Disclosure provider trait definitions.

use async_trait::async_trait;

use crate::errors::DisclosureError;
use crate::models::{CorpCodeEntry, DisclosureResponse, RawEmployeeRecord, RawFinancialRecord};

/// Source of per-year raw disclosure records.
///
/// Implementations return the service envelope untouched: a response whose
/// status is not a success is still `Ok`, and consumers treat it as a year
/// without records. `Err` is reserved for transport and decoding failures
/// that survived the provider's own retries.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use hireforecast_disclosure::provider::DisclosureProvider;
///
/// struct FixtureProvider;
///
/// #[async_trait]
/// impl DisclosureProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     // ... implement the two fetch methods
/// }
/// ```
#[async_trait]
pub trait DisclosureProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the workforce status rows of the annual report for `year`.
    async fn fetch_workforce_records(
        &self,
        corp_code: &str,
        year: &str,
    ) -> Result<DisclosureResponse<RawEmployeeRecord>, DisclosureError>;

    /// Fetch the key account rows of the annual report for `year`.
    async fn fetch_financial_records(
        &self,
        corp_code: &str,
        year: &str,
    ) -> Result<DisclosureResponse<RawFinancialRecord>, DisclosureError>;
}

/// Source of the full corporation-code list.
#[async_trait]
pub trait CorpCodeSource: Send + Sync {
    /// Load every company known to the service.
    async fn load_corp_codes(&self) -> Result<Vec<CorpCodeEntry>, DisclosureError>;
}
