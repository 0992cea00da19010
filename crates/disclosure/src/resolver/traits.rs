//! Resolution traits for the disclosure crate.
//!
//! Defines the abstractions for mapping a free-text company name to a DART
//! corporation code.

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::DisclosureError;
use crate::models::CorpCode;

/// A company name resolved to its corporation code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCompany {
    pub corp_code: CorpCode,
    /// Canonical name as known to the resolver, not the caller's query.
    pub corp_name: String,
    pub stock_code: Option<String>,
    /// Where this resolution came from.
    pub source: ResolutionSource,
}

/// Indicates how a company was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionSource {
    /// Built-in alias table.
    StaticTable,
    /// Downloaded DART corporation-code index.
    CorpCodeIndex,
}

/// Individual resolver in the resolution chain.
///
/// Returning `None` means this resolver cannot answer the query and the chain
/// should try the next resolver.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Attempt to resolve a company name.
    ///
    /// # Returns
    /// * `Some(Ok(resolved))` - Successfully resolved
    /// * `Some(Err(error))` - Error during resolution (stops the chain)
    /// * `None` - This resolver has no match (try next)
    async fn resolve(&self, company_name: &str) -> Option<Result<ResolvedCompany, DisclosureError>>;
}

/// Main company resolver interface.
///
/// Unlike `Resolver::resolve`, this always returns a result: a name nobody
/// can answer for is `DisclosureError::CompanyNotFound`.
#[async_trait]
pub trait CompanyResolver: Send + Sync {
    async fn resolve(&self, company_name: &str) -> Result<ResolvedCompany, DisclosureError>;
}
