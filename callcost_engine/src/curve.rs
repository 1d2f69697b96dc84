//! Synthetic cost curve.
//!
//! The curve answers "what would the monthly cost look like if every
//! active worker earned `w`?" for each sampled wage `w`.  It reuses the
//! hour totals but ignores individual wages, so it is deliberately
//! distinct from the actual costs computed in [`crate::allocation`].
//! Samples are evaluated in parallel with [`rayon`]; the result is in
//! ascending wage order and identical to a sequential evaluation.

use crate::models::{CostCurvePoint, LaborTotals, WageRange};
use rayon::prelude::*;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Strictly ascending wage samples across an inclusive range, each
/// rounded to cents.  Samples are computed by index so that float error
/// does not accumulate or drop the upper bound; samples that round to
/// the same cent are collapsed.
pub fn sample_wages(range: &WageRange) -> Vec<f64> {
    if range.step <= 0.0 || range.max < range.min {
        return vec![round_cents(range.min)];
    }
    let intervals = ((range.max - range.min) / range.step + 1e-9).floor() as usize;
    let mut wages: Vec<f64> = (0..=intervals)
        .map(|i| round_cents(range.min + i as f64 * range.step))
        .collect();
    wages.dedup();
    wages
}

/// Curve value at a single wage.
pub fn point_at(
    wage: f64,
    totals: &LaborTotals,
    benefits_multiplier: f64,
    plan_cost: f64,
) -> CostCurvePoint {
    let remaining_hours = (totals.monthly_labor_hours - totals.monthly_saved_hours).max(0.0);
    CostCurvePoint {
        wage,
        cost_without_automation: wage * totals.monthly_labor_hours * benefits_multiplier,
        cost_with_automation: wage * remaining_hours * benefits_multiplier + plan_cost,
    }
}

/// Evaluate the curve at every sampled wage.
pub fn generate_curve(
    wages: &[f64],
    totals: &LaborTotals,
    benefits_multiplier: f64,
    plan_cost: f64,
) -> Vec<CostCurvePoint> {
    wages
        .par_iter()
        .map(|&wage| point_at(wage, totals, benefits_multiplier, plan_cost))
        .collect()
}
