//! Forecasting - per-metric linear trends, next-year prediction and the
//! narrative summary built from them.
//!
//! ```text
//! AnnualSummary[] → fit_and_project (per metric) → YearlyPrediction
//!        ↓                                               ↓
//!        └──────────→ generate_forecast_summary ←────────┘
//! ```

mod forecast_model;
mod narrator;
mod trend;


pub use forecast_model::{
    Confidence, ForecastSummary, OverallTrend, TrendCategory, TrendFit, YearlyPrediction,
};
pub use narrator::{generate_forecast_summary, generate_prediction};
pub use trend::fit_and_project;
