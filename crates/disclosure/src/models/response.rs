use serde::{Deserialize, Serialize};

/// DART status for a successful call.
pub const STATUS_SUCCESS: &str = "000";

/// DART status when no filing matches the query.
pub const STATUS_NO_DATA: &str = "013";

/// Common response envelope of the DART Open API.
///
/// DART reports application-level failures in `status`/`message` with an
/// HTTP 200, so a non-success status is data, not a transport error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisclosureResponse<T> {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: String,

    pub list: Option<Vec<T>>,
}

impl<T> DisclosureResponse<T> {
    /// Successful response carrying the given rows.
    pub fn success(list: Vec<T>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: "정상".to_string(),
            list: Some(list),
        }
    }

    /// Response reporting that no filing exists for the query.
    pub fn no_data() -> Self {
        Self {
            status: STATUS_NO_DATA.to_string(),
            message: "조회된 데이타가 없습니다.".to_string(),
            list: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn is_no_data(&self) -> bool {
        self.status == STATUS_NO_DATA
    }

    /// Rows of a successful response; empty for any other status.
    pub fn records(&self) -> &[T] {
        match (&self.list, self.is_success()) {
            (Some(list), true) => list.as_slice(),
            _ => &[],
        }
    }
}
