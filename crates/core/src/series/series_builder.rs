use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};

use super::series_model::AnnualSummary;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, SALARY_UNIT};
use crate::extraction::{EmployeeRecord, FinancialRecord, KeyAccount, StatementType};
use crate::utils::number_utils::{growth_rate, saturating_sum};

/// Average salary of one year in millions of KRW.
///
/// Payroll-weighted when both payroll and headcount are known, otherwise the
/// plain mean of the per-record averages.
fn average_salary(records: &[&EmployeeRecord], total_employees: u64) -> Decimal {
    let total_payroll = saturating_sum(
        records
            .iter()
            .map(|r| r.total_payroll.unwrap_or(Decimal::ZERO)),
    );

    if total_employees > 0 && total_payroll > Decimal::ZERO {
        return total_payroll
            .checked_div(Decimal::from(total_employees))
            .and_then(|per_head| per_head.checked_div(Decimal::from(SALARY_UNIT)))
            .unwrap_or(Decimal::ZERO);
    }

    let salaries: Vec<Decimal> = records.iter().filter_map(|r| r.average_salary).collect();
    if salaries.is_empty() {
        return Decimal::ZERO;
    }
    saturating_sum(salaries.iter().copied())
        .checked_div(Decimal::from(salaries.len()))
        .unwrap_or(Decimal::ZERO)
}

/// Financial lines of one year: consolidated if any exist, else standalone.
fn select_statement<'a>(records: &'a [FinancialRecord], year: &str) -> Vec<&'a FinancialRecord> {
    let of_type = |statement_type: StatementType| -> Vec<&'a FinancialRecord> {
        records
            .iter()
            .filter(|r| r.year == year && r.statement_type == statement_type)
            .collect()
    };

    let consolidated = of_type(StatementType::Consolidated);
    if consolidated.is_empty() {
        of_type(StatementType::Standalone)
    } else {
        consolidated
    }
}

fn sum_account(records: &[&FinancialRecord], account: KeyAccount) -> Decimal {
    saturating_sum(
        records
            .iter()
            .filter(|r| r.mentions(account))
            .map(|r| r.current_amount.unwrap_or(Decimal::ZERO)),
    )
}

fn fill_growth_rates(summaries: &mut [AnnualSummary]) {
    for i in 1..summaries.len() {
        let (previous, current) = (&summaries[i - 1], &summaries[i]);

        let employee = growth_rate(
            Some(Decimal::from(current.total_employees)),
            Some(Decimal::from(previous.total_employees)),
        );
        let salary = growth_rate(Some(current.average_salary), Some(previous.average_salary));
        let revenue = growth_rate(Some(current.revenue), Some(previous.revenue));
        let operating_profit =
            growth_rate(Some(current.operating_profit), Some(previous.operating_profit));

        let current = &mut summaries[i];
        current.employee_growth_rate = employee;
        current.salary_growth_rate = salary;
        current.revenue_growth_rate = revenue;
        current.operating_profit_growth_rate = operating_profit;
    }
}

/// Aggregate extracted records into one summary per year, oldest first.
///
/// Every year present in either input gets a row; a year with no usable
/// financial lines reports zero amounts. Returns an empty list when both
/// inputs are empty.
pub fn build_annual_summaries(
    company_name: &str,
    company_code: &str,
    employee_records: &[EmployeeRecord],
    financial_records: &[FinancialRecord],
) -> Vec<AnnualSummary> {
    let years: BTreeSet<&str> = employee_records
        .iter()
        .map(|r| r.year.as_str())
        .chain(financial_records.iter().map(|r| r.year.as_str()))
        .collect();

    let mut summaries: Vec<AnnualSummary> = years
        .into_iter()
        .map(|year| {
            let year_employees: Vec<&EmployeeRecord> =
                employee_records.iter().filter(|r| r.year == year).collect();
            let total_employees = year_employees
                .iter()
                .fold(0u64, |total, r| total.saturating_add(r.employee_count));

            let statement = select_statement(financial_records, year);

            AnnualSummary {
                company_name: company_name.to_string(),
                company_code: company_code.to_string(),
                year: year.to_string(),
                total_employees,
                average_salary: average_salary(&year_employees, total_employees)
                    .round_dp_with_strategy(
                        DISPLAY_DECIMAL_PRECISION,
                        RoundingStrategy::MidpointAwayFromZero,
                    ),
                revenue: sum_account(&statement, KeyAccount::Revenue),
                operating_profit: sum_account(&statement, KeyAccount::OperatingProfit),
                net_income: sum_account(&statement, KeyAccount::NetIncome),
                total_assets: sum_account(&statement, KeyAccount::TotalAssets),
                employee_growth_rate: None,
                salary_growth_rate: None,
                revenue_growth_rate: None,
                operating_profit_growth_rate: None,
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.year.cmp(&b.year));
    fill_growth_rates(&mut summaries);
    summaries
}
