//! Forecast domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_CONFIDENCE_MIN_YEARS, MEDIUM_CONFIDENCE_MIN_YEARS};

/// Direction of a single metric's fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    Growth,
    Decline,
    #[default]
    Stable,
}

/// Reliability label driven by the number of historical years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    #[default]
    Low,
}

impl Confidence {
    pub fn from_sample_size(years: usize) -> Self {
        if years >= HIGH_CONFIDENCE_MIN_YEARS {
            Confidence::High
        } else if years >= MEDIUM_CONFIDENCE_MIN_YEARS {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Combined direction across headcount, revenue and operating profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl OverallTrend {
    /// Majority vote over metrics that are projected to grow.
    pub fn from_positive_count(positive: usize) -> Self {
        match positive {
            0 => OverallTrend::Negative,
            1 => OverallTrend::Neutral,
            _ => OverallTrend::Positive,
        }
    }
}

/// Result of fitting one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    /// Projection for the year after the last observation, never negative
    /// when a line was fitted.
    pub next_value: f64,
    pub slope: f64,
    pub trend: TrendCategory,
}

/// Projection for the year following the last summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPrediction {
    pub year: String,
    pub predicted_employees: u64,
    /// Net headcount change plus attrition replacement when growing.
    pub expected_hiring: i64,
    pub predicted_revenue: Decimal,
    pub predicted_operating_profit: Decimal,
    pub employee_trend: TrendCategory,
    pub revenue_trend: TrendCategory,
    pub operating_profit_trend: TrendCategory,
    pub confidence: Confidence,
}

/// Narrative view of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub summary: String,
    pub trend: OverallTrend,
    pub confidence: Confidence,
    pub key_insights: Vec<String>,
}
