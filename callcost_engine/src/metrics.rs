//! Derived metrics.
//!
//! Every ratio here has a defined zero-denominator result so that no
//! NaN or infinity reaches a caller:
//!
//! * ROI is `0` when the plan is free.
//! * The payback period is `None` when monthly savings are not positive.
//! * Cost per call is `0` when there are no calls.
//! * Staff utilisation is `0` when nobody works any hours.

use crate::models::{
    BreakEvenPoint, CostEffectiveness, DerivedMetrics, LaborTotals, ProjectionInput,
    FTE_MONTHLY_HOURS, WEEKS_PER_MONTH,
};

/// `numerator / denominator`, or `0.0` when the denominator is zero or
/// the quotient is not finite.
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Annual savings as a percentage of the annual plan cost.
pub fn roi_percent(annual_savings: f64, plan_cost: f64) -> f64 {
    ratio_or_zero(annual_savings, plan_cost * 12.0) * 100.0
}

/// Plan cost over monthly savings; `None` when nothing is saved.
pub fn payback_period(plan_cost: f64, monthly_savings: f64) -> Option<f64> {
    if monthly_savings <= 0.0 {
        return None;
    }
    Some(plan_cost / monthly_savings).filter(|p| p.is_finite())
}

pub fn cost_effectiveness(
    average_wage: f64,
    break_even: Option<&BreakEvenPoint>,
) -> CostEffectiveness {
    match break_even {
        Some(be) if average_wage >= be.wage => CostEffectiveness::AboveBreakEven,
        Some(_) => CostEffectiveness::BelowBreakEven,
        None => CostEffectiveness::NoBreakEven,
    }
}

/// Build the metric record from actual costs, hour totals and the
/// break-even point.
pub fn derive_metrics(
    input: &ProjectionInput,
    totals: &LaborTotals,
    actual_without: f64,
    actual_with: f64,
    break_even: Option<&BreakEvenPoint>,
) -> DerivedMetrics {
    let plan_cost = input.plan.monthly_cost;
    let monthly_savings = actual_without - actual_with;
    let annual_savings = monthly_savings * 12.0;
    let monthly_calls =
        input.calls.calls_per_week * WEEKS_PER_MONTH * input.modifiers.seasonality_factor;
    let average_wage = input.staffing.average_wage();

    DerivedMetrics {
        actual_cost_without_automation: actual_without,
        actual_cost_with_automation: actual_with,
        monthly_savings,
        annual_savings,
        roi_percent: roi_percent(annual_savings, plan_cost),
        payback_period: payback_period(plan_cost, monthly_savings),
        cost_per_call_without_automation: ratio_or_zero(actual_without, monthly_calls),
        cost_per_call_with_automation: ratio_or_zero(actual_with, monthly_calls),
        monthly_saved_hours: totals.monthly_saved_hours,
        fte_freed: totals.monthly_saved_hours / FTE_MONTHLY_HOURS,
        staff_utilization_percent: ratio_or_zero(
            totals.monthly_call_hours,
            totals.monthly_labor_hours,
        ) * 100.0,
        average_wage,
        cost_effectiveness: cost_effectiveness(average_wage, break_even),
    }
}
