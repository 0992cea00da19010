use hireforecast_disclosure::{DisclosureResponse, RawEmployeeRecord, RawFinancialRecord};
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::extraction_model::{
    EmployeeRecord, FinancialRecord, KeyAccount, StatementKind, StatementType,
};
use crate::constants::SALARY_UNIT;
use crate::utils::number_utils::parse_amount;

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Headcount of a row: the total column, else the regular-staff column.
fn employee_count(raw: &RawEmployeeRecord) -> u64 {
    let count = non_zero(parse_amount(raw.total_count.as_deref()))
        .or_else(|| parse_amount(raw.regular_count.as_deref()))
        .unwrap_or(Decimal::ZERO);

    count.max(Decimal::ZERO).round().to_u64().unwrap_or(0)
}

/// Per-capita salary in millions of KRW.
fn average_salary(
    per_capita: Option<Decimal>,
    total_payroll: Option<Decimal>,
    employee_count: u64,
) -> Option<Decimal> {
    let unit = Decimal::from(SALARY_UNIT);
    if let Some(per_capita) = non_zero(per_capita) {
        return Some(per_capita / unit);
    }
    let total_payroll = non_zero(total_payroll)?;
    if employee_count == 0 {
        return None;
    }
    total_payroll
        .checked_div(Decimal::from(employee_count))?
        .checked_div(unit)
}

/// Typed workforce rows for one year.
///
/// A response that is not a success yields no rows.
pub fn extract_employee_records(
    response: &DisclosureResponse<RawEmployeeRecord>,
    year: &str,
) -> Vec<EmployeeRecord> {
    if !response.is_success() {
        debug!(
            "No workforce rows for {}: status {} {}",
            year, response.status, response.message
        );
    }

    response
        .records()
        .iter()
        .map(|raw| {
            let employee_count = employee_count(raw);
            let total_payroll = parse_amount(raw.total_payroll.as_deref());
            let per_capita = parse_amount(raw.per_capita_payroll.as_deref());

            EmployeeRecord {
                year: year.to_string(),
                employment_type: trimmed(&raw.segment),
                gender: trimmed(&raw.gender),
                employee_count,
                average_service_years: parse_amount(raw.average_tenure.as_deref()),
                average_salary: average_salary(per_capita, total_payroll, employee_count),
                total_payroll,
                note: trimmed(&raw.note),
            }
        })
        .collect()
}

/// Whitelisted accounting lines for one year.
///
/// A response that is not a success yields no rows.
pub fn extract_financial_records(
    response: &DisclosureResponse<RawFinancialRecord>,
    year: &str,
) -> Vec<FinancialRecord> {
    if !response.is_success() {
        debug!(
            "No financial rows for {}: status {} {}",
            year, response.status, response.message
        );
    }

    response
        .records()
        .iter()
        .filter_map(|raw| {
            let account_name = trimmed(&raw.account_name);
            if !KeyAccount::is_key_account_name(&account_name) {
                return None;
            }

            Some(FinancialRecord {
                year: year.to_string(),
                account_id: trimmed(&raw.account_id),
                account_name,
                statement_type: StatementType::from_code(
                    raw.statement_type.as_deref().unwrap_or_default(),
                ),
                statement_kind: StatementKind::from_code(
                    raw.statement_kind.as_deref().unwrap_or_default(),
                ),
                current_label: trimmed(&raw.current_label),
                current_amount: parse_amount(raw.current_amount.as_deref()),
                prior_label: trimmed(&raw.prior_label),
                prior_amount: parse_amount(raw.prior_amount.as_deref()),
                prior_prior_label: trimmed(&raw.prior_prior_label),
                prior_prior_amount: parse_amount(raw.prior_prior_amount.as_deref()),
                order: trimmed(&raw.order),
            })
        })
        .collect()
}
