//! Analysis module - request validation and orchestration of a full
//! fetch, extract, summarize and forecast run for one company.

mod analysis_model;
mod analysis_service;
mod analysis_traits;


pub use analysis_model::{AnalysisRequest, AnalysisResponse, CompanyInfo};
pub use analysis_service::AnalysisService;
pub use analysis_traits::AnalysisServiceTrait;
