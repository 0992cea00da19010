//! Analysis service trait.

use async_trait::async_trait;

use super::analysis_model::{AnalysisRequest, AnalysisResponse};
use crate::errors::Result;

/// Trait defining the contract for company analysis.
///
/// Transport layers depend on this trait rather than on the concrete
/// service, so they can be tested with a stub.
#[async_trait]
pub trait AnalysisServiceTrait: Send + Sync {
    /// Validate the request, collect disclosure data for every year in range
    /// and return the annual series with its forecast.
    ///
    /// Fails with `Error::CompanyNotFound` when the name cannot be resolved
    /// and `Error::NoData` when no year produced any record.
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;
}
