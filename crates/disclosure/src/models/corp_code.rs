use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::CorpCode;

/// One company of the DART corporation-code archive (`corpCode.xml`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpCodeEntry {
    pub corp_code: CorpCode,
    pub corp_name: String,
    /// Six-digit KRX ticker, present only for listed companies
    pub stock_code: Option<String>,
    pub modify_date: Option<NaiveDate>,
}

impl CorpCodeEntry {
    pub fn new(corp_code: impl Into<String>, corp_name: impl Into<String>) -> Self {
        Self {
            corp_code: corp_code.into(),
            corp_name: corp_name.into(),
            stock_code: None,
            modify_date: None,
        }
    }

    pub fn with_stock_code(mut self, stock_code: impl Into<String>) -> Self {
        let stock_code = stock_code.into();
        self.stock_code = if stock_code.trim().is_empty() {
            None
        } else {
            Some(stock_code)
        };
        self
    }

    pub fn is_listed(&self) -> bool {
        self.stock_code.is_some()
    }
}
