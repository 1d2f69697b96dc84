//! Cost projection engine.
//!
//! The `engine` module is responsible for turning a [`ProjectionInput`]
//! into a [`ProjectionResult`].  It strings together the hour totals,
//! saved-hour allocation, cost curve, break-even search and metric
//! derivation.  Every function here is pure: calling [`project`] twice
//! with the same input yields the same output, and nothing is cached
//! between calls.

use crate::allocation::{actual_costs, worker_costs};
use crate::break_even::find_break_even;
use crate::curve::{generate_curve, sample_wages};
use crate::hours::derive_totals;
use crate::metrics::derive_metrics;
use crate::models::{
    BreakEvenPoint, CostCurvePoint, LaborTotals, ProjectionInput, ProjectionResult,
    RawProjectionInput, WorkerCost,
};
use crate::projection::project_years;
use crate::sanitize::sanitize;
use crate::sensitivity;
use tracing::debug;

/// Intermediate results shared by the full projection and the
/// scenario sweeps.
#[derive(Debug, Clone)]
pub struct CoreEvaluation {
    pub totals: LaborTotals,
    pub workers: Vec<WorkerCost>,
    pub curve: Vec<CostCurvePoint>,
    pub break_even: Option<BreakEvenPoint>,
    pub actual_without: f64,
    pub actual_with: f64,
}

/// Actual monthly cost `(without, with)` automation, skipping the curve.
pub fn evaluate_costs(input: &ProjectionInput) -> (f64, f64) {
    let totals = derive_totals(input);
    let workers = worker_costs(input.staffing.active(), &totals, &input.modifiers);
    actual_costs(&workers, input.plan.monthly_cost)
}

/// Totals, actual costs, curve and break-even for one input.
pub fn evaluate_core(input: &ProjectionInput) -> CoreEvaluation {
    let totals = derive_totals(input);
    let workers = worker_costs(input.staffing.active(), &totals, &input.modifiers);
    let (actual_without, actual_with) = actual_costs(&workers, input.plan.monthly_cost);

    let wages = sample_wages(&input.wage_range);
    let curve = generate_curve(
        &wages,
        &totals,
        input.modifiers.benefits_multiplier(),
        input.plan.monthly_cost,
    );
    let break_even = find_break_even(&curve);

    CoreEvaluation {
        totals,
        workers,
        curve,
        break_even,
        actual_without,
        actual_with,
    }
}

/// Runs a full projection for a sanitised input.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let core = evaluate_core(input);
    let metrics = derive_metrics(
        input,
        &core.totals,
        core.actual_without,
        core.actual_with,
        core.break_even.as_ref(),
    );
    debug!(
        active = input.staffing.active().len(),
        points = core.curve.len(),
        break_even = ?core.break_even.map(|be| be.wage),
        monthly_savings = metrics.monthly_savings,
        "projection computed"
    );

    ProjectionResult {
        totals: core.totals,
        workers: core.workers,
        curve: core.curve,
        break_even: core.break_even,
        metrics,
        projection: project_years(input),
        sensitivity: sensitivity::analyze(input),
    }
}

/// Sanitises raw form state and runs a projection on it.  Never fails.
pub fn project_raw(raw: &RawProjectionInput) -> ProjectionResult {
    project(&sanitize(raw))
}
