//! Labor and call-hour totals.
//!
//! Converts weekly staffing and call volume into the monthly hour
//! totals every other calculation is built on.

use crate::models::{CallProfile, LaborTotals, ProjectionInput, WEEKS_PER_MONTH};

/// Effective average call time and automation percent for a call profile.
///
/// Without a breakdown (or when every category has a zero share) this
/// is simply the profile's own values.  Otherwise both are the
/// share-weighted means over the categories, with shares renormalised
/// to sum to one, and the explicit automation percent acts as a floor
/// on the weighted rate.
pub fn effective_call_mix(calls: &CallProfile) -> (f64, f64) {
    let total_share: f64 = calls.call_types.iter().map(|c| c.percentage_share).sum();
    if total_share <= 0.0 {
        return (calls.avg_call_time_minutes, calls.automation_percent);
    }
    let (minutes, rate) = calls.call_types.iter().fold((0.0, 0.0), |(m, r), c| {
        let weight = c.percentage_share / total_share;
        (
            m + weight * c.avg_time_minutes,
            r + weight * c.automation_rate_percent,
        )
    });
    (minutes, calls.automation_percent.max(rate))
}

/// Compute the hour totals for an input.
///
/// Saved hours are reported uncapped; callers that subtract them from
/// labor hours clamp at zero themselves.
pub fn derive_totals(input: &ProjectionInput) -> LaborTotals {
    let weekly_labor_hours: f64 = input
        .staffing
        .active()
        .iter()
        .map(|m| m.weekly_hours)
        .sum();
    let monthly_labor_hours = weekly_labor_hours * WEEKS_PER_MONTH;

    let (effective_call_minutes, automation_percent) = effective_call_mix(&input.calls);
    let weekly_call_hours = input.calls.calls_per_week * effective_call_minutes / 60.0;
    let monthly_call_hours =
        weekly_call_hours * WEEKS_PER_MONTH * input.modifiers.seasonality_factor;
    let automation_fraction = (automation_percent / 100.0).clamp(0.0, 1.0);

    LaborTotals {
        weekly_labor_hours,
        monthly_labor_hours,
        effective_call_minutes,
        weekly_call_hours,
        monthly_call_hours,
        automation_fraction,
        monthly_saved_hours: monthly_call_hours * automation_fraction,
    }
}
