// src/analytics.rs
//! Display statistics derived from forecasting-service payloads.

use std::fmt;

use crate::dtos::bulk::{ProductPrediction, WeekPerformance};
use crate::dtos::forecast::{ForecastPoint, HistoryPoint};

/// Rounds half-way values towards positive infinity, matching the
/// dashboard's integer display convention (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds to `decimals` places with ties away from zero, the rounding used by
/// every fixed-decimal display (`0.125` becomes `0.13`, `-6.25` becomes `-6.3`).
/// `format!("{:.2}")` alone would round those ties to even.
pub fn round_fixed(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    value.signum() * (value.abs() * scale + 0.5).floor() / scale
}

/// Model performance over a sales history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStats {
    /// Whole-percent accuracy, `100 * (1 - mean relative error)`.
    pub accuracy: i64,
    /// Mean absolute error in units.
    pub avg_error: i64,
    /// Weeks left out of the accuracy mean because nothing sold.
    pub zero_sales_weeks: usize,
}

/// Computes accuracy and average error for a history.
///
/// A week with `units_sold_7d == 0` has no defined relative error, so it is
/// excluded from the accuracy mean and counted in `zero_sales_weeks`. It still
/// contributes to the average error. An empty history, or one where every
/// week sold nothing, reports an accuracy of 0.
pub fn history_stats(history: &[HistoryPoint]) -> HistoryStats {
    if history.is_empty() {
        return HistoryStats::default();
    }

    let abs_errors = history.iter().map(|p| (p.units_sold_7d - p.predicted).abs());
    let avg_error = round_half_up(abs_errors.sum::<f64>() / history.len() as f64);

    let relative: Vec<f64> = history
        .iter()
        .filter(|p| p.units_sold_7d != 0.0)
        .map(|p| (p.units_sold_7d - p.predicted).abs() / p.units_sold_7d)
        .collect();
    let zero_sales_weeks = history.len() - relative.len();

    let accuracy = if relative.is_empty() {
        0
    } else {
        let mean = relative.iter().sum::<f64>() / relative.len() as f64;
        round_half_up((1.0 - mean) * 100.0)
    };

    HistoryStats { accuracy, avg_error, zero_sales_weeks }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub total_demand: f64,
    pub average_weekly: f64,
    pub peak: Option<ForecastPoint>,
}

/// Totals a forecast and finds its peak week; ties go to the earliest week.
pub fn forecast_summary(forecast: &[ForecastPoint]) -> ForecastSummary {
    let total_demand: f64 = forecast.iter().map(|f| f.expected_demand).sum();
    let average_weekly = if forecast.is_empty() {
        0.0
    } else {
        total_demand / forecast.len() as f64
    };

    let mut peak: Option<&ForecastPoint> = None;
    for point in forecast {
        match peak {
            Some(max) if point.expected_demand <= max.expected_demand => {}
            _ => peak = Some(point),
        }
    }

    ForecastSummary { total_demand, average_weekly, peak: peak.cloned() }
}

/// Accuracy of a single past week in the bulk view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekAccuracy {
    Percent(f64),
    NotAvailable,
}

pub fn week_accuracy(week: &WeekPerformance) -> WeekAccuracy {
    if week.actual > 0.0 {
        WeekAccuracy::Percent((1.0 - (week.predicted - week.actual).abs() / week.actual) * 100.0)
    } else {
        WeekAccuracy::NotAvailable
    }
}

impl fmt::Display for WeekAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekAccuracy::Percent(pct) => write!(f, "{:.1}%", round_fixed(*pct, 1)),
            WeekAccuracy::NotAvailable => f.write_str("N/A"),
        }
    }
}

pub fn order_value(product: &ProductPrediction) -> f64 {
    product.recommended_order * product.price
}

/// `₹119.94` style amount with two decimals.
pub fn format_currency(currency: &str, amount: f64) -> String {
    format!("{currency}{:.2}", round_fixed(amount, 2))
}

/// File size in kilobytes, two decimals.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", round_fixed(bytes as f64 / 1024.0, 2))
}
