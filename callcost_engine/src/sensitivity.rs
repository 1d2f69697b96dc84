//! Sensitivity of monthly savings and break-even to automation rate
//! and call volume.

use crate::engine::evaluate_core;
use crate::hours::effective_call_mix;
use crate::models::{ProjectionInput, SensitivityAnalysis, SensitivityPoint};
use rayon::prelude::*;

/// Automation percentages swept by [`analyze`].
pub const AUTOMATION_STEPS: [f64; 11] = [
    0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Multipliers applied to the current call volume by [`analyze`].
pub const CALL_VOLUME_FACTORS: [f64; 5] = [0.5, 0.75, 1.0, 1.25, 1.5];

fn evaluate(input: &ProjectionInput, parameter_value: f64) -> SensitivityPoint {
    let core = evaluate_core(input);
    SensitivityPoint {
        parameter_value,
        monthly_savings: core.actual_without - core.actual_with,
        break_even_wage: core.break_even.map(|be| be.wage),
    }
}

/// Savings at a fixed automation percent.  Any call-type breakdown is
/// folded into its average call time so that the swept percent is the
/// effective rate rather than a floor under the breakdown's rate.
pub fn at_automation(input: &ProjectionInput, percent: f64) -> SensitivityPoint {
    let mut scenario = input.clone();
    let (minutes, _) = effective_call_mix(&input.calls);
    scenario.calls.avg_call_time_minutes = minutes;
    scenario.calls.call_types.clear();
    scenario.calls.automation_percent = percent;
    evaluate(&scenario, percent)
}

/// Savings with call volume scaled by `factor`.
pub fn at_call_volume(input: &ProjectionInput, factor: f64) -> SensitivityPoint {
    let mut scenario = input.clone();
    scenario.calls.calls_per_week *= factor;
    evaluate(&scenario, factor)
}

pub fn analyze(input: &ProjectionInput) -> SensitivityAnalysis {
    SensitivityAnalysis {
        automation: AUTOMATION_STEPS
            .par_iter()
            .map(|&p| at_automation(input, p))
            .collect(),
        call_volume: CALL_VOLUME_FACTORS
            .par_iter()
            .map(|&f| at_call_volume(input, f))
            .collect(),
    }
}
