//! Extracted record models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One workforce row for one year, with numeric fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub year: String,
    /// Business segment the row reports on
    pub employment_type: String,
    pub gender: String,
    pub employee_count: u64,
    pub average_service_years: Option<Decimal>,
    /// Per-capita salary in millions of KRW
    pub average_salary: Option<Decimal>,
    /// Annual payroll in KRW
    pub total_payroll: Option<Decimal>,
    pub note: String,
}

/// Consolidated or standalone statement (`fs_div`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementType {
    /// `CFS`: parent and subsidiaries
    #[serde(rename = "CFS")]
    Consolidated,
    /// `OFS`: parent entity only
    #[serde(rename = "OFS")]
    Standalone,
    Unknown,
}

impl StatementType {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "CFS" => StatementType::Consolidated,
            "OFS" => StatementType::Standalone,
            _ => StatementType::Unknown,
        }
    }
}

/// Statement a line belongs to (`sj_div`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementKind {
    #[serde(rename = "BS")]
    BalanceSheet,
    #[serde(rename = "IS")]
    IncomeStatement,
    Other,
}

impl StatementKind {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "BS" => StatementKind::BalanceSheet,
            "IS" => StatementKind::IncomeStatement,
            _ => StatementKind::Other,
        }
    }
}

/// The key accounts kept by extraction, identified by their DART label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAccount {
    Revenue,
    OperatingProfit,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    TotalEquity,
    CurrentAssets,
    NonCurrentAssets,
    CurrentLiabilities,
    NonCurrentLiabilities,
}

impl KeyAccount {
    pub const ALL: [KeyAccount; 10] = [
        KeyAccount::Revenue,
        KeyAccount::OperatingProfit,
        KeyAccount::NetIncome,
        KeyAccount::TotalAssets,
        KeyAccount::TotalLiabilities,
        KeyAccount::TotalEquity,
        KeyAccount::CurrentAssets,
        KeyAccount::NonCurrentAssets,
        KeyAccount::CurrentLiabilities,
        KeyAccount::NonCurrentLiabilities,
    ];

    /// Account-name term as it appears in DART filings.
    pub fn term(&self) -> &'static str {
        match self {
            KeyAccount::Revenue => "매출액",
            KeyAccount::OperatingProfit => "영업이익",
            KeyAccount::NetIncome => "당기순이익",
            KeyAccount::TotalAssets => "자산총계",
            KeyAccount::TotalLiabilities => "부채총계",
            KeyAccount::TotalEquity => "자본총계",
            KeyAccount::CurrentAssets => "유동자산",
            KeyAccount::NonCurrentAssets => "비유동자산",
            KeyAccount::CurrentLiabilities => "유동부채",
            KeyAccount::NonCurrentLiabilities => "비유동부채",
        }
    }

    /// Whether an account name falls under the whitelist (substring match).
    pub fn is_key_account_name(account_name: &str) -> bool {
        Self::ALL.iter().any(|k| account_name.contains(k.term()))
    }
}

/// One whitelisted accounting line for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub year: String,
    pub account_id: String,
    pub account_name: String,
    pub statement_type: StatementType,
    pub statement_kind: StatementKind,
    pub current_label: String,
    pub current_amount: Option<Decimal>,
    pub prior_label: String,
    pub prior_amount: Option<Decimal>,
    pub prior_prior_label: String,
    pub prior_prior_amount: Option<Decimal>,
    pub order: String,
}

impl FinancialRecord {
    pub fn mentions(&self, account: KeyAccount) -> bool {
        self.account_name.contains(account.term())
    }
}
