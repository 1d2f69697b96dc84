//! Distribution of saved hours across the active staff and the actual
//! monthly cost that results from it.

use crate::models::{LaborTotals, Modifiers, StaffMember, WorkerCost, WEEKS_PER_MONTH};

/// Split `saved_hours` across workers in proportion to their monthly hours.
///
/// Each worker's share is capped at their own monthly hours.  Whatever
/// a cap cuts off is carried to the next worker in order; anything
/// still left after the last worker is dropped.  The result therefore
/// never gives a worker more than they work and never sums to more
/// than `saved_hours`.
pub fn allocate_saved_hours(monthly_hours: &[f64], saved_hours: f64) -> Vec<f64> {
    let total: f64 = monthly_hours.iter().sum();
    let mut carry = 0.0;
    monthly_hours
        .iter()
        .map(|&hours| {
            let proportion = if total > 0.0 { hours / total } else { 0.0 };
            let wanted = saved_hours * proportion + carry;
            let given = wanted.min(hours).max(0.0);
            carry = wanted - given;
            given
        })
        .collect()
}

/// Actual monthly cost per active worker using their real wages.
pub fn worker_costs(
    active: &[StaffMember],
    totals: &LaborTotals,
    modifiers: &Modifiers,
) -> Vec<WorkerCost> {
    let multiplier = modifiers.benefits_multiplier();
    let monthly: Vec<f64> = active
        .iter()
        .map(|m| m.weekly_hours * WEEKS_PER_MONTH)
        .collect();
    let saved = allocate_saved_hours(&monthly, totals.monthly_saved_hours);

    active
        .iter()
        .zip(monthly.iter().zip(saved.iter()))
        .map(|(member, (&hours, &saved_hours))| WorkerCost {
            monthly_hours: hours,
            saved_hours,
            hourly_wage: member.hourly_wage,
            cost_without_automation: member.hourly_wage * hours * multiplier,
            cost_with_automation: member.hourly_wage * (hours - saved_hours).max(0.0) * multiplier,
        })
        .collect()
}

/// Actual monthly cost `(without, with)` automation.  The plan fee is
/// added once to the "with" side.
pub fn actual_costs(workers: &[WorkerCost], plan_cost: f64) -> (f64, f64) {
    let without: f64 = workers.iter().map(|w| w.cost_without_automation).sum();
    let with: f64 = workers.iter().map(|w| w.cost_with_automation).sum::<f64>() + plan_cost;
    (without, with)
}
