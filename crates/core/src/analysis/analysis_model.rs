//! Analysis request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_YEAR_SPAN;
use crate::errors::ValidationError;
use crate::forecast::{ForecastSummary, YearlyPrediction};
use crate::series::AnnualSummary;

/// Company and inclusive year range to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub start_year: i32,
    #[serde(default)]
    pub end_year: i32,
}

impl AnalysisRequest {
    pub fn new(company_name: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            company_name: company_name.into(),
            start_year,
            end_year,
        }
    }

    /// Check the request before any remote call is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::MissingField("companyName".to_string()));
        }
        if self.start_year <= 0 {
            return Err(ValidationError::MissingField("startYear".to_string()));
        }
        if self.end_year <= 0 {
            return Err(ValidationError::MissingField("endYear".to_string()));
        }
        if self.start_year > self.end_year {
            return Err(ValidationError::InvalidYearRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        let span = self.end_year - self.start_year;
        if span > MAX_YEAR_SPAN {
            return Err(ValidationError::YearSpanTooLarge {
                span,
                max: MAX_YEAR_SPAN,
            });
        }
        Ok(())
    }

    /// Requested years as DART `bsns_year` labels, oldest first.
    pub fn years(&self) -> Vec<String> {
        (self.start_year..=self.end_year)
            .map(|year| year.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub code: String,
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub company_info: CompanyInfo,
    pub data: Vec<AnnualSummary>,
    /// Zero or one prediction, for the year after the last summary.
    pub predictions: Vec<YearlyPrediction>,
    pub forecast: ForecastSummary,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_valid_range() {
        assert!(AnalysisRequest::new("삼성전자", 2020, 2023).validate().is_ok());
        assert!(AnalysisRequest::new("삼성전자", 2023, 2023).validate().is_ok());
        assert!(AnalysisRequest::new("삼성전자", 2013, 2023).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            AnalysisRequest::new("  ", 2020, 2023).validate(),
            Err(ValidationError::MissingField("companyName".to_string()))
        );
        assert_eq!(
            AnalysisRequest::new("KT", 0, 2023).validate(),
            Err(ValidationError::MissingField("startYear".to_string()))
        );
        assert_eq!(
            AnalysisRequest::new("KT", 2020, 0).validate(),
            Err(ValidationError::MissingField("endYear".to_string()))
        );
    }

    #[test]
    fn test_validate_range() {
        assert_eq!(
            AnalysisRequest::new("KT", 2024, 2020).validate(),
            Err(ValidationError::InvalidYearRange {
                start: 2024,
                end: 2020
            })
        );
        assert_eq!(
            AnalysisRequest::new("KT", 2010, 2023).validate(),
            Err(ValidationError::YearSpanTooLarge { span: 13, max: 10 })
        );
    }

    #[test]
    fn test_years() {
        let request = AnalysisRequest::new("KT", 2021, 2023);
        assert_eq!(request.years(), vec!["2021", "2022", "2023"]);
    }

    #[test]
    fn test_request_deserialization() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"companyName":"카카오","startYear":2020,"endYear":2023}"#)
                .unwrap();
        assert_eq!(request, AnalysisRequest::new("카카오", 2020, 2023));

        let partial: AnalysisRequest = serde_json::from_str(r#"{"companyName":"카카오"}"#).unwrap();
        assert!(partial.validate().is_err());
    }
}
