//! Annual series - one aggregated row per year with year-over-year growth.

mod series_builder;
mod series_model;

#[cfg(test)]
mod series_tests;

pub use series_builder::build_annual_summaries;
pub use series_model::AnnualSummary;
