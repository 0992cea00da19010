use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hireforecast_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::CompanyNotFound(_) | CoreError::NoData(_) => StatusCode::NOT_FOUND,
                CoreError::Disclosure(_) => StatusCode::BAD_GATEWAY,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hireforecast_core::errors::ValidationError;
    use hireforecast_disclosure::DisclosureError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(CoreError::Validation(ValidationError::MissingField(
                    "companyName".into(),
                ))),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(CoreError::CompanyNotFound("ACME".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(CoreError::NoData("none".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(CoreError::Disclosure(DisclosureError::Timeout {
                    endpoint: "corpCode.xml".into(),
                })),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::BadRequest("bad json".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status, "{}", error);
        }
    }

    #[test]
    fn test_message_is_core_display() {
        let error = ApiError::from(CoreError::CompanyNotFound("ACME".into()));
        assert_eq!(error.to_string(), "Company not found: ACME");
    }
}
