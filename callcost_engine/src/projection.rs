//! Multi-year savings projection and net present value.
//!
//! Call volume compounds by the annual growth rate starting in year
//! two; each year's savings are recomputed from scratch at that volume
//! (so saved hours stay capped by staffing) and discounted at the
//! configured rate.

use crate::engine::evaluate_costs;
use crate::models::{MultiYearProjection, ProjectionInput, YearProjection};

/// Project annual savings over `modifiers.projection_years` years.
pub fn project_years(input: &ProjectionInput) -> MultiYearProjection {
    let growth = 1.0 + input.modifiers.annual_growth_percent / 100.0;
    let discount = 1.0 + input.modifiers.discount_rate_percent / 100.0;
    let base_calls = input.calls.calls_per_week;

    let mut cumulative = 0.0;
    let mut npv = 0.0;
    let mut scenario = input.clone();
    let years = (1..=input.modifiers.projection_years)
        .map(|year| {
            let calls_per_week = base_calls * growth.powi(year as i32 - 1);
            scenario.calls.calls_per_week = calls_per_week;
            let (without, with) = evaluate_costs(&scenario);
            let annual_savings = (without - with) * 12.0;
            let discounted_savings = annual_savings / discount.powi(year as i32);
            cumulative += annual_savings;
            npv += discounted_savings;
            YearProjection {
                year,
                calls_per_week,
                annual_savings,
                discounted_savings,
                cumulative_savings: cumulative,
            }
        })
        .collect();

    MultiYearProjection {
        years,
        total_savings: cumulative,
        npv,
    }
}
