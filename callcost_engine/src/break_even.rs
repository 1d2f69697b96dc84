//! Break-even search over a sampled cost curve.

use crate::models::{BreakEvenPoint, CostCurvePoint};

/// Find the first wage at which the two curves cross.
///
/// Adjacent samples are scanned for a change of sign (or an exact zero)
/// in `cost_without - cost_with`.  Segments whose difference does not
/// change are skipped, so parallel or identical curves produce `None`.
/// Inside the first crossing segment the wage is found by linear
/// interpolation of the difference, and the cost by interpolating
/// `cost_without_automation` at the same fraction.
pub fn find_break_even(curve: &[CostCurvePoint]) -> Option<BreakEvenPoint> {
    curve.windows(2).find_map(|pair| {
        let (p1, p2) = (&pair[0], &pair[1]);
        let (d1, d2) = (p1.diff(), p2.diff());
        if d1 * d2 > 0.0 || d2 == d1 {
            return None;
        }
        let (x1, x2) = (p1.wage, p2.wage);
        // Rounding can push the interpolant a hair past the segment.
        let wage = (x1 - d1 * (x2 - x1) / (d2 - d1)).clamp(x1.min(x2), x1.max(x2));
        let fraction = (wage - x1) / (x2 - x1);
        let cost = p1.cost_without_automation
            + (p2.cost_without_automation - p1.cost_without_automation) * fraction;
        Some(BreakEvenPoint { wage, cost })
    })
}
