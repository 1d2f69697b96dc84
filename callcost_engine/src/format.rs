//! Display formatting for metric cards.
//!
//! Formatting is total: a non-finite number renders as `$0.00` and a
//! missing payback period as `N/A`.

use crate::models::{CostEffectiveness, ProjectionResult};
use serde::{Deserialize, Serialize};

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Currency with an explicit sign, for savings.
pub fn format_signed_currency(value: f64) -> String {
    if value.is_finite() && value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

pub fn format_wage(value: f64) -> String {
    format!("{}/hr", format_currency(value))
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value)
}

pub fn format_payback(period: Option<f64>) -> String {
    match period {
        Some(p) if p.is_finite() => format!("{:.1} months", p),
        _ => "N/A".to_string(),
    }
}

/// A single labelled value ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

impl MetricCard {
    fn new(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One-sentence verdict comparing the average wage to break-even.
pub fn verdict(result: &ProjectionResult) -> String {
    let average = format_wage(result.metrics.average_wage);
    match result.metrics.cost_effectiveness {
        CostEffectiveness::AboveBreakEven => format!(
            "Your current average wage ({average}) is above the break-even point - automation is cost-effective"
        ),
        CostEffectiveness::BelowBreakEven => format!(
            "Your current average wage ({average}) is below the break-even point - automation is not yet cost-effective"
        ),
        CostEffectiveness::NoBreakEven => {
            "No break-even point in the sampled wage range".to_string()
        }
    }
}

/// Summary cards for a projection result.
pub fn metric_cards(result: &ProjectionResult) -> Vec<MetricCard> {
    let m = &result.metrics;
    vec![
        MetricCard::new(
            "Monthly cost without automation",
            format_currency(m.actual_cost_without_automation),
        ),
        MetricCard::new(
            "Monthly cost with automation",
            format_currency(m.actual_cost_with_automation),
        ),
        MetricCard::new("Monthly savings", format_signed_currency(m.monthly_savings)),
        MetricCard::new("Annual savings", format_signed_currency(m.annual_savings)),
        MetricCard::new(
            "Break-even wage",
            result
                .break_even
                .map(|be| format_wage(be.wage))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        MetricCard::new("ROI", format_percent(m.roi_percent)),
        MetricCard::new("Payback period", format_payback(m.payback_period)),
        MetricCard::new(
            "Cost per call",
            format_currency(m.cost_per_call_with_automation),
        ),
        MetricCard::new("FTE freed", format!("{:.2}", m.fte_freed)),
        MetricCard::new(
            "Phone share of staff time",
            format_percent(m.staff_utilization_percent),
        ),
        MetricCard::new(
            format!("{}-year NPV", result.projection.years.len()),
            format_currency(result.projection.npv),
        ),
        MetricCard::new("Verdict", verdict(result)),
    ]
}
