use super::forecast_model::{TrendCategory, TrendFit};
use crate::constants::TREND_SLOPE_THRESHOLD;

impl TrendCategory {
    pub fn from_slope(slope: f64) -> Self {
        if slope > TREND_SLOPE_THRESHOLD {
            TrendCategory::Growth
        } else if slope < -TREND_SLOPE_THRESHOLD {
            TrendCategory::Decline
        } else {
            TrendCategory::Stable
        }
    }
}

/// Flat projection of the last observation, or zero without any.
fn flat(values: &[f64]) -> TrendFit {
    TrendFit {
        next_value: values.last().copied().unwrap_or(0.0),
        slope: 0.0,
        trend: TrendCategory::Stable,
    }
}

/// Fit `value = slope * year + intercept` by ordinary least squares and
/// project the year after the last one.
///
/// Fewer than two points, a zero year variance or any non-finite
/// intermediate produce a flat projection of the last value instead.
pub fn fit_and_project(years: &[i32], values: &[f64]) -> TrendFit {
    let n = years.len().min(values.len());
    if n < 2 {
        return flat(values);
    }

    let xs: Vec<f64> = years[..n].iter().map(|&y| f64::from(y)).collect();
    let ys = &values[..n];

    let count = n as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;

    let (covariance, variance) = xs.iter().zip(ys).fold((0.0, 0.0), |(cov, var), (x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });

    if variance == 0.0 || !variance.is_finite() || !covariance.is_finite() {
        return flat(values);
    }

    let slope = covariance / variance;
    let intercept = mean_y - slope * mean_x;
    let next_value = slope * (xs[n - 1] + 1.0) + intercept;

    if !slope.is_finite() || !next_value.is_finite() {
        return flat(values);
    }

    TrendFit {
        next_value: next_value.max(0.0),
        slope,
        trend: TrendCategory::from_slope(slope),
    }
}
