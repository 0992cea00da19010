/// Decimal precision for display (salaries, growth rates)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Salaries are reported in millions of KRW
pub const SALARY_UNIT: i64 = 1_000_000;

/// Revenue is rendered in trillions of KRW in narratives
pub const TRILLION: i64 = 1_000_000_000_000;

/// Assumed annual attrition used to size replacement hiring
pub const ATTRITION_RATE: f64 = 0.15;

/// Absolute slope (units per year) above which a metric counts as moving
pub const TREND_SLOPE_THRESHOLD: f64 = 0.05;

/// History length for a high-confidence forecast
pub const HIGH_CONFIDENCE_MIN_YEARS: usize = 5;

/// History length for a medium-confidence forecast
pub const MEDIUM_CONFIDENCE_MIN_YEARS: usize = 3;

/// Headcount change (%) that produces a workforce insight
pub const EMPLOYEE_INSIGHT_THRESHOLD_PCT: f64 = 5.0;

/// Revenue change (%) that produces a revenue insight
pub const REVENUE_INSIGHT_THRESHOLD_PCT: f64 = 10.0;

/// Operating profit change (%) that produces a profitability insight
pub const PROFIT_INSIGHT_THRESHOLD_PCT: f64 = 10.0;

/// Widest year range a single analysis may cover (`end - start`)
pub const MAX_YEAR_SPAN: i32 = 10;
