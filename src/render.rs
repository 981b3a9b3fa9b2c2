// src/render.rs
//! Plain-text rendering of view state.

use std::fmt::{self, Write};

use crate::analytics::{format_currency, format_kb, order_value, round_half_up, week_accuracy};
use crate::dtos::prediction::DemandRange;
use crate::views::bulk::BulkPredictionView;
use crate::views::dashboard::DashboardView;
use crate::views::data_upload::DataUploadView;
use crate::views::forecast::ForecastView;
use crate::views::prediction::PredictionView;

fn stats_card(out: &mut String, icon: &str, title: &str, value: &str) -> fmt::Result {
    writeln!(out, "  {icon} {title:<18} {value}")
}

fn error_box(out: &mut String, message: &str, retry: bool) -> fmt::Result {
    writeln!(out, "⚠️  Oops! Something went wrong")?;
    writeln!(out, "   {message}")?;
    if retry {
        writeln!(out, "   (run with --retries to retry)")?;
    }
    Ok(())
}

fn range_row(out: &mut String, label: &str, range: &DemandRange) -> fmt::Result {
    writeln!(
        out,
        "  {label:<14} low {:>9.2}  avg {:>9.2}  high {:>9.2}",
        range.low, range.average, range.high
    )?;
    if let Some(explanation) = &range.explanation {
        writeln!(out, "  {:<14} {explanation}", "")?;
    }
    Ok(())
}

pub fn dashboard(view: &DashboardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Demand Forecasting Dashboard: Store {} / Product {}", view.selected_store, view.selected_product)?;

    if let Some(err) = &view.error {
        error_box(&mut out, err, true)?;
        return Ok(out);
    }
    if view.loading {
        writeln!(out, "Loading dashboard data...")?;
        return Ok(out);
    }

    stats_card(&mut out, "🎯", "Model Accuracy", &format!("{}%", view.stats.accuracy))?;
    stats_card(&mut out, "📊", "Avg Error", &format!("{} units", view.stats.avg_error))?;
    stats_card(&mut out, "📅", "Forecast Period", &format!("{} weeks", view.forecast.len()))?;
    stats_card(&mut out, "📈", "Expected Demand", &format!("{} units", round_half_up(view.total_demand())))?;
    if view.stats.zero_sales_weeks > 0 {
        writeln!(
            out,
            "  ({} week(s) with zero sales excluded from accuracy)",
            view.stats.zero_sales_weeks
        )?;
    }

    writeln!(out, "\nHistorical Performance (last {} weeks)", view.history.len())?;
    writeln!(out, "  {:<12} {:>10} {:>10}", "Date", "Actual", "Predicted")?;
    for point in &view.history {
        writeln!(out, "  {:<12} {:>10.2} {:>10.2}", point.date, point.units_sold_7d, point.predicted)?;
    }

    writeln!(out, "\nDemand Forecast (next {} weeks)", view.forecast.len())?;
    for point in &view.forecast {
        writeln!(out, "  Week {:<4} {:>10.2}", point.week, point.expected_demand)?;
    }
    Ok(out)
}

pub fn forecast(view: &ForecastView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Demand Forecast: Store {} / Product {} ({} month(s), {} weeks)",
        view.store,
        view.product,
        view.months,
        view.months * 4
    )?;
    if view.forecast.is_empty() {
        writeln!(out, "No forecast available.")?;
        return Ok(out);
    }

    let summary = &view.summary;
    stats_card(&mut out, "📦", "Total Demand", &format!("{} units", round_half_up(summary.total_demand)))?;
    stats_card(&mut out, "📊", "Avg Weekly", &format!("{} units", round_half_up(summary.average_weekly)))?;
    if let Some(peak) = &summary.peak {
        stats_card(
            &mut out,
            "🔝",
            "Peak Week",
            &format!("Week {} ({} units)", peak.week, round_half_up(peak.expected_demand)),
        )?;
    }

    writeln!(out, "\n  {:<8} {:>16}", "Week", "Expected Demand")?;
    for point in &view.forecast {
        writeln!(out, "  {:<8} {:>10} units", point.week, round_half_up(point.expected_demand))?;
    }
    Ok(out)
}

pub fn prediction(view: &PredictionView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let req = &view.request;
    writeln!(
        out,
        "Smart Prediction: Store {} / Product {} for {}",
        req.store_id, req.product_id, req.prediction_for_date
    )?;
    if let Some(err) = &view.error {
        error_box(&mut out, err, false)?;
        return Ok(out);
    }
    let Some(result) = &view.result else {
        writeln!(out, "No prediction yet.")?;
        return Ok(out);
    };

    let summary = &result.summary;
    writeln!(out, "\n[{}]  {}", summary.stock_status, summary.message)?;
    writeln!(out, "{}", summary.simple_explanation)?;
    stats_card(&mut out, "📦", "Current Stock", &format!("{} units", summary.current_stock))?;
    stats_card(&mut out, "📈", "Predicted Sales", &format!("{} units", summary.predicted_sales_this_week))?;
    stats_card(
        &mut out,
        summary.action_needed.style().icon,
        "Action Needed",
        summary.action_needed.label(),
    )?;

    let rec = &result.stock_recommendation;
    writeln!(out, "\nStock Recommendation")?;
    stats_card(&mut out, "🛒", "Order Quantity", &format!("{} units", rec.recommended_order_quantity))?;
    stats_card(&mut out, "⬇️", "Shortage", &format!("{} units", rec.shortage_units))?;
    stats_card(&mut out, "⬆️", "Surplus", &format!("{} units", rec.surplus_units))?;
    stats_card(&mut out, "🛡️", "Safety Stock", &format!("{} units", rec.safety_stock_needed))?;

    writeln!(out, "\nDemand Estimates")?;
    range_row(&mut out, "This week", &result.demand_estimates.this_week)?;
    if let Some(confidence) = &result.demand_estimates.this_week.confidence {
        writeln!(out, "  {:<14} confidence {confidence}", "")?;
    }
    range_row(&mut out, "This month", &result.demand_estimates.this_month)?;

    let fin = &result.financial_impact;
    writeln!(out, "\nFinancial Impact")?;
    stats_card(&mut out, "💰", "Expected Revenue", &format_currency(&fin.currency, fin.expected_revenue))?;
    stats_card(&mut out, "📉", "Potential Loss", &format_currency(&fin.currency, fin.potential_lost_revenue))?;
    Ok(out)
}

pub fn bulk(view: &BulkPredictionView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Bulk Order Predictions: Store {} on {}", view.selected_store, view.prediction_date)?;
    if let Some(err) = &view.error {
        error_box(&mut out, err, false)?;
        return Ok(out);
    }
    let Some(result) = &view.result else {
        writeln!(out, "No predictions yet.")?;
        return Ok(out);
    };

    let s = &result.summary;
    stats_card(&mut out, "📦", "Total Products", &s.total_products.to_string())?;
    stats_card(&mut out, "🚨", "Critical Stock", &s.critical_stock.to_string())?;
    stats_card(&mut out, "⚠️", "Low Stock", &s.low_stock.to_string())?;
    stats_card(&mut out, "🛒", "Total Order Value", &format_currency(&s.currency, s.total_order_value))?;
    stats_card(&mut out, "📉", "Revenue at Risk", &format_currency(&s.currency, s.total_revenue_at_risk))?;

    writeln!(
        out,
        "\n  {:<10} {:<14} {:<16} {:>8} {:>10} {:>8} {:>12} {:>10}",
        "Product", "Category", "Status", "Stock", "Demand", "Order", "Order Value", "Confidence"
    )?;
    for p in &result.predictions {
        writeln!(
            out,
            "  {:<10} {:<14} {:<16} {:>8} {:>10.2} {:>8} {:>12} {:>10}",
            p.product_id,
            p.category,
            p.status.to_string(),
            p.current_stock,
            p.predicted_demand,
            p.recommended_order,
            format_currency(&s.currency, order_value(p)),
            p.confidence
        )?;
    }

    if let Some(p) = view.expanded() {
        writeln!(out, "\nDemand breakdown for {}", p.product_id)?;
        let b = &p.demand_breakdown;
        range_row(&mut out, "Daily average", &b.daily_average)?;
        range_row(&mut out, "Weekly", &b.weekly)?;
        range_row(&mut out, "Monthly", &b.monthly)?;
        range_row(&mut out, "Quarterly", &b.quarterly)?;

        writeln!(out, "\nLast 4 Weeks Performance")?;
        writeln!(out, "  {:<12} {:>10} {:>10} {:>10}", "Date", "Predicted", "Actual", "Accuracy")?;
        for week in &p.last_4_weeks {
            writeln!(
                out,
                "  {:<12} {:>10} {:>10} {:>10}",
                week.date,
                week.predicted,
                week.actual,
                week_accuracy(week).to_string()
            )?;
        }
    }
    Ok(out)
}

pub fn data_upload(view: &DataUploadView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Data Upload & Model Training")?;

    if let Some(file) = &view.file {
        writeln!(out, "  Selected: {} ({})", file.file_name, format_kb(file.size_bytes))?;
    }

    if let Some(result) = &view.upload_result {
        if result.success {
            writeln!(out, "✅ Upload Successful!")?;
            writeln!(out, "  Stores: {}", view.uploaded_stores().join(", "))?;
            if let Some(records) = result.records {
                writeln!(out, "  Records: {records}")?;
            }
            if let Some(range) = &result.date_range {
                writeln!(out, "  Date Range: {} to {}", range.start, range.end)?;
            }
            if let Some(message) = &result.message {
                writeln!(out, "  {message}")?;
            }
        } else {
            writeln!(out, "❌ Upload Failed: {}", result.error.as_deref().unwrap_or(""))?;
        }
    }

    if let Some(result) = &view.training_result {
        if result.success {
            writeln!(out, "✅ Training Complete!")?;
            if let Some(message) = &result.message {
                writeln!(out, "  {message}")?;
            }
            for r in &result.results {
                writeln!(
                    out,
                    "  Store: {}  Records: {}  Accuracy: {}%  MAE: {}",
                    r.store_id, r.records, r.accuracy, r.mae
                )?;
            }
        } else {
            writeln!(out, "❌ Training Failed: {}", result.error.as_deref().unwrap_or(""))?;
        }
    }

    if let Some(status) = view.training_status.as_ref().filter(|s| s.total_models > 0) {
        writeln!(out, "\nTrained Models Status")?;
        for model in &status.models {
            let title = if model.is_global() {
                "🌐 Global Model".to_string()
            } else {
                format!("🏪 Store {}", model.store_id)
            };
            writeln!(out, "  {title}")?;
            writeln!(out, "    Trained: {}", model.trained_at)?;
            writeln!(out, "    Size: {} MB", model.size_mb)?;
            writeln!(out, "    Model File: {}", model.model_file)?;
        }
    }
    Ok(out)
}
