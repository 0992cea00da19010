use serde::{Deserialize, Serialize};

/// One accounting line of the DART key accounts report (`fnlttSinglAcnt.json`).
///
/// The same account appears once per statement type: `fs_div` is `CFS` for
/// the consolidated statement and `OFS` for the standalone one, and
/// `sj_div` is `BS` (balance sheet) or `IS` (income statement).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawFinancialRecord {
    #[serde(rename = "rcept_no", default)]
    pub receipt_no: Option<String>,

    #[serde(rename = "bsns_year", default)]
    pub business_year: Option<String>,

    #[serde(rename = "corp_code", default)]
    pub corp_code: Option<String>,

    #[serde(rename = "account_id", default)]
    pub account_id: Option<String>,

    #[serde(rename = "account_nm", default)]
    pub account_name: Option<String>,

    /// `CFS` (consolidated) or `OFS` (standalone)
    #[serde(rename = "fs_div", default)]
    pub statement_type: Option<String>,

    #[serde(rename = "fs_nm", default)]
    pub statement_type_name: Option<String>,

    /// `BS` (balance sheet) or `IS` (income statement)
    #[serde(rename = "sj_div", default)]
    pub statement_kind: Option<String>,

    #[serde(rename = "sj_nm", default)]
    pub statement_kind_name: Option<String>,

    #[serde(rename = "thstrm_nm", default)]
    pub current_label: Option<String>,

    #[serde(rename = "thstrm_amount", default)]
    pub current_amount: Option<String>,

    #[serde(rename = "frmtrm_nm", default)]
    pub prior_label: Option<String>,

    #[serde(rename = "frmtrm_amount", default)]
    pub prior_amount: Option<String>,

    #[serde(rename = "bfefrmtrm_nm", default)]
    pub prior_prior_label: Option<String>,

    #[serde(rename = "bfefrmtrm_amount", default)]
    pub prior_prior_amount: Option<String>,

    /// Display ordering hint
    #[serde(rename = "ord", default)]
    pub order: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,
}
