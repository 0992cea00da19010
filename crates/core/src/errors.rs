//! Core error types for the hiring forecast pipeline.
//!
//! The pure pipeline functions never fail; these errors are produced by the
//! analysis service at the request boundary.

use hireforecast_disclosure::DisclosureError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for an analysis request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    #[error("No data available: {0}")]
    NoData(String),

    #[error("Disclosure service error: {0}")]
    Disclosure(DisclosureError),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Start year {start} is after end year {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Year range spans {span} years; at most {max} are allowed")]
    YearSpanTooLarge { span: i32, max: i32 },
}

// === From implementations for common error types ===

impl From<DisclosureError> for Error {
    fn from(err: DisclosureError) -> Self {
        match err {
            DisclosureError::CompanyNotFound(name) => Error::CompanyNotFound(name),
            DisclosureError::NoData => Error::NoData("No data for requested period".to_string()),
            other => Error::Disclosure(other),
        }
    }
}
