use log::debug;
use rust_decimal::Decimal;

use super::forecast_model::{Confidence, ForecastSummary, OverallTrend, YearlyPrediction};
use super::trend::fit_and_project;
use crate::constants::{
    ATTRITION_RATE, EMPLOYEE_INSIGHT_THRESHOLD_PCT, PROFIT_INSIGHT_THRESHOLD_PCT,
    REVENUE_INSIGHT_THRESHOLD_PCT, TRILLION,
};
use crate::series::AnnualSummary;
use crate::utils::number_utils::{decimal_to_f64, f64_to_decimal};

const INSUFFICIENT_DATA_SUMMARY: &str = "Not enough data to generate a forecast.";

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Expected hires for a projected headcount change.
///
/// Growth adds replacement of the assumed annual attrition on top of the net
/// change; a flat or shrinking workforce reports the net change as-is.
fn expected_hiring(predicted: u64, last_actual: u64) -> i64 {
    let net_change = clamp_to_i64(predicted).saturating_sub(clamp_to_i64(last_actual));
    if net_change > 0 {
        let attrition_replacement = (last_actual as f64 * ATTRITION_RATE).round() as i64;
        net_change.saturating_add(attrition_replacement)
    } else {
        net_change
    }
}

/// Project the year after the last summary.
///
/// `summaries` must be sorted by year, as `build_annual_summaries` returns
/// them. Rows whose year label is not numeric are ignored. Returns `None`
/// when no usable row exists or the next year is not representable.
pub fn generate_prediction(summaries: &[AnnualSummary]) -> Option<YearlyPrediction> {
    let rows: Vec<(i32, &AnnualSummary)> = summaries
        .iter()
        .filter_map(|s| s.year_number().map(|year| (year, s)))
        .collect();
    let (last_year, last) = *rows.last()?;
    let next_year = last_year.checked_add(1)?;

    let years: Vec<i32> = rows.iter().map(|(year, _)| *year).collect();
    let metric = |value: fn(&AnnualSummary) -> f64| -> Vec<f64> {
        rows.iter().map(|(_, s)| value(s)).collect()
    };

    let employees = fit_and_project(&years, &metric(|s| s.total_employees as f64));
    let revenue = fit_and_project(&years, &metric(|s| decimal_to_f64(s.revenue)));
    let operating_profit =
        fit_and_project(&years, &metric(|s| decimal_to_f64(s.operating_profit)));

    let predicted_employees = employees.next_value.max(0.0).round() as u64;
    let prediction = YearlyPrediction {
        year: next_year.to_string(),
        predicted_employees,
        expected_hiring: expected_hiring(predicted_employees, last.total_employees),
        predicted_revenue: f64_to_decimal(revenue.next_value).round(),
        predicted_operating_profit: f64_to_decimal(operating_profit.next_value).round(),
        employee_trend: employees.trend,
        revenue_trend: revenue.trend,
        operating_profit_trend: operating_profit.trend,
        confidence: Confidence::from_sample_size(rows.len()),
    };

    debug!(
        "Prediction for {}: employees {} (slope {:.3}), revenue slope {:.3}, profit slope {:.3}",
        prediction.year,
        predicted_employees,
        employees.slope,
        revenue.slope,
        operating_profit.slope
    );

    Some(prediction)
}

/// Percentage change from `last` to `predicted`; zero when `last` is not
/// positive.
fn projected_growth(predicted: f64, last: f64) -> f64 {
    if last > 0.0 {
        (predicted - last) / last * 100.0
    } else {
        0.0
    }
}

fn signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

/// Integer with comma thousands separators.
fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn insufficient_data() -> ForecastSummary {
    ForecastSummary {
        summary: INSUFFICIENT_DATA_SUMMARY.to_string(),
        trend: OverallTrend::Neutral,
        confidence: Confidence::Low,
        key_insights: Vec::new(),
    }
}

/// Narrative summary of a prediction against the last actual year.
///
/// Without history or prediction the result is a neutral, low-confidence
/// "not enough data" summary.
pub fn generate_forecast_summary(
    summaries: &[AnnualSummary],
    prediction: Option<&YearlyPrediction>,
) -> ForecastSummary {
    let (Some(last), Some(prediction)) = (summaries.last(), prediction) else {
        return insufficient_data();
    };

    let employee_growth = projected_growth(
        prediction.predicted_employees as f64,
        last.total_employees as f64,
    );
    let revenue_growth = projected_growth(
        decimal_to_f64(prediction.predicted_revenue),
        decimal_to_f64(last.revenue),
    );
    let profit_growth = projected_growth(
        decimal_to_f64(prediction.predicted_operating_profit),
        decimal_to_f64(last.operating_profit),
    );

    let positive = [employee_growth, revenue_growth, profit_growth]
        .iter()
        .filter(|g| **g > 0.0)
        .count();
    let trend = OverallTrend::from_positive_count(positive);

    let trend_clause = match trend {
        OverallTrend::Positive => "Sustained growth is expected.",
        OverallTrend::Negative => "A downturn is expected.",
        OverallTrend::Neutral => "A stable trend is expected.",
    };
    let revenue_trillions = decimal_to_f64(prediction.predicted_revenue / Decimal::from(TRILLION));

    let summary = format!(
        "{} forecast: employees {} ({}), revenue KRW {:.1}T ({}). {}",
        prediction.year,
        format_count(clamp_to_i64(prediction.predicted_employees)),
        signed_percent(employee_growth),
        revenue_trillions,
        signed_percent(revenue_growth),
        trend_clause
    );

    let mut key_insights = Vec::new();

    if employee_growth.abs() > EMPLOYEE_INSIGHT_THRESHOLD_PCT {
        let hires = format_count(prediction.expected_hiring.abs());
        key_insights.push(if employee_growth > 0.0 {
            format!("Workforce expansion expected (about {} hires)", hires)
        } else {
            format!("Possible workforce reduction (about {} fewer employees)", hires)
        });
    }

    if revenue_growth.abs() > REVENUE_INSIGHT_THRESHOLD_PCT {
        key_insights.push(if revenue_growth > 0.0 {
            "Strong revenue growth expected".to_string()
        } else {
            "Revenue decline expected".to_string()
        });
    }

    if profit_growth.abs() > PROFIT_INSIGHT_THRESHOLD_PCT {
        key_insights.push(if profit_growth > 0.0 {
            "Profitability improvement expected".to_string()
        } else {
            "Profitability deterioration risk".to_string()
        });
    }

    if key_insights.is_empty() {
        key_insights.push("Current trend expected to continue".to_string());
    }

    ForecastSummary {
        summary,
        trend,
        confidence: prediction.confidence,
        key_insights,
    }
}
