use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated disclosure figures of one company for one year.
///
/// Amounts are in KRW except `average_salary` (millions of KRW). Growth
/// rates are percentages against the preceding row of the series and are
/// `None` for the first row or when the preceding value is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    pub company_name: String,
    pub company_code: String,
    pub year: String,
    pub total_employees: u64,
    pub average_salary: Decimal,
    pub revenue: Decimal,
    pub operating_profit: Decimal,
    pub net_income: Decimal,
    pub total_assets: Decimal,
    pub employee_growth_rate: Option<Decimal>,
    pub salary_growth_rate: Option<Decimal>,
    pub revenue_growth_rate: Option<Decimal>,
    pub operating_profit_growth_rate: Option<Decimal>,
}

impl AnnualSummary {
    /// Calendar year as a number, if the label is numeric.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }
}
