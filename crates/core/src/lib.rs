//! Hireforecast Core - disclosure normalization and hiring forecasts.
//!
//! This crate turns raw, string-valued disclosure rows into a per-year
//! series and a one-year-ahead forecast. The pipeline functions are pure;
//! only the `analysis` service talks to the disclosure crate, and only
//! through its traits.
//!
//! ```text
//! extraction → series → forecast (trend fit → prediction → narrative)
//! ```

pub mod analysis;
pub mod constants;
pub mod errors;
pub mod extraction;
pub mod forecast;
pub mod series;
pub mod utils;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, AnalysisService, AnalysisServiceTrait, CompanyInfo,
};
pub use extraction::{
    extract_employee_records, extract_financial_records, EmployeeRecord, FinancialRecord,
};
pub use forecast::{
    fit_and_project, generate_forecast_summary, generate_prediction, Confidence, ForecastSummary,
    OverallTrend, TrendCategory, YearlyPrediction,
};
pub use series::{build_annual_summaries, AnnualSummary};
pub use utils::number_utils::parse_amount;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
