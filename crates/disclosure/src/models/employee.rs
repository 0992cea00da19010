use serde::{Deserialize, Serialize};

/// One row of the DART workforce status report (`empSttus.json`).
///
/// DART splits headcount by business segment and gender. Every numeric
/// column arrives as a locale-formatted string ("1,234") or "-" when the
/// filer left it blank, so all of them stay optional strings here and are
/// normalized by the consumer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawEmployeeRecord {
    #[serde(rename = "rcept_no", default)]
    pub receipt_no: Option<String>,

    #[serde(rename = "corp_code", default)]
    pub corp_code: Option<String>,

    #[serde(rename = "corp_name", default)]
    pub corp_name: Option<String>,

    /// Business segment / department label
    #[serde(rename = "fo_bbm", default)]
    pub segment: Option<String>,

    /// Gender label
    #[serde(rename = "sexdstn", default)]
    pub gender: Option<String>,

    /// Regular (permanent) employees
    #[serde(rename = "rgllbr_co", default)]
    pub regular_count: Option<String>,

    /// Fixed-term (contract) employees
    #[serde(rename = "cnttk_co", default)]
    pub contract_count: Option<String>,

    /// Total employees
    #[serde(rename = "sm", default)]
    pub total_count: Option<String>,

    /// Average length of service in years
    #[serde(rename = "avrg_cnwk_sdytrn", default)]
    pub average_tenure: Option<String>,

    /// Annual total payroll (KRW)
    #[serde(rename = "fyer_salary_totamt", default)]
    pub total_payroll: Option<String>,

    /// Average payroll per employee (KRW)
    #[serde(rename = "jan_salary_am", default)]
    pub per_capita_payroll: Option<String>,

    /// Free-text remark
    #[serde(rename = "rm", default)]
    pub note: Option<String>,

    /// Settlement date of the report
    #[serde(rename = "stlm_dt", default)]
    pub settlement_date: Option<String>,
}
