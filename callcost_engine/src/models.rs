//! Data models for the Call Cost Engine.
//!
//! The `models` module defines the serialisable structs and enums that
//! describe a projection request (staffing, call profile, subscription
//! plan and optional modifiers) and the projection result (sampled
//! cost curve, break-even point and derived metrics).  Raw variants of
//! the input types accept the loosely typed values a form produces
//! while it is being edited; see [`crate::sanitize`] for how they are
//! turned into the strict types used by the engine.

use serde::{Deserialize, Serialize};

/// Average number of weeks in a month (approximates 52 / 12).
pub const WEEKS_PER_MONTH: f64 = 4.3;

/// Monthly hours of one full-time-equivalent worker.
pub const FTE_MONTHLY_HOURS: f64 = 160.0;

/// Maximum number of staff members that may be active at once.
pub const STAFF_CAPACITY: usize = 10;

/// Lowest hourly wage accepted by the calculator and the default
/// substituted for a missing wage.
pub const MINIMUM_WAGE_FLOOR: f64 = 4.74;

/// Smallest average call time, in minutes.  Keeps call-hour
/// arithmetic away from zero.
pub const MIN_CALL_TIME_MINUTES: f64 = 0.1;

/// A single worker who answers the phone as part of their shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Hours worked per week.  Never negative.
    pub weekly_hours: f64,
    /// Hourly wage in dollars.  Never negative.
    pub hourly_wage: f64,
}

/// The staff roster together with the number of active workers.
///
/// Only the first `active_count` members take part in a calculation;
/// members past that prefix are kept so that raising the count again
/// restores their values, but they are otherwise inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingInput {
    pub members: Vec<StaffMember>,
    pub active_count: usize,
}

impl StaffingInput {
    /// The active prefix of the roster.
    pub fn active(&self) -> &[StaffMember] {
        let n = self.active_count.min(self.members.len());
        &self.members[..n]
    }

    /// Mean hourly wage of the active workers, or `0.0` with nobody active.
    pub fn average_wage(&self) -> f64 {
        let active = self.active();
        if active.is_empty() {
            return 0.0;
        }
        active.iter().map(|m| m.hourly_wage).sum::<f64>() / active.len() as f64
    }
}

/// One category of incoming call, e.g. reservations or opening hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallType {
    pub name: String,
    /// Share of all calls in this category, in percent.  Shares across
    /// a breakdown are expected to sum to 100 but are renormalised.
    pub percentage_share: f64,
    pub avg_time_minutes: f64,
    /// Share of this category's calls the automated service handles.
    pub automation_rate_percent: f64,
}

/// Call volume and how much of it the automated service absorbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallProfile {
    pub calls_per_week: f64,
    /// Average call length in minutes; at least [`MIN_CALL_TIME_MINUTES`].
    pub avg_call_time_minutes: f64,
    /// Share of phone-handling hours eliminated, in `[0, 100]`.
    pub automation_percent: f64,
    /// Optional per-category refinement.  When non-empty it replaces
    /// `avg_call_time_minutes` and sets a floor on `automation_percent`.
    #[serde(default)]
    pub call_types: Vec<CallType>,
}

/// The automated service's flat monthly subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub name: String,
    /// Monthly fee in dollars, independent of usage.
    pub monthly_cost: f64,
}

/// Optional adjustments applied on top of the base calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Employer overhead on wages (benefits, payroll taxes) in percent.
    /// Labor costs are scaled by `1 + benefits_percent / 100`.
    pub benefits_percent: f64,
    /// Multiplier applied to monthly call hours to model a busy or
    /// quiet season.  `1.0` means an average month.
    pub seasonality_factor: f64,
    /// Year-over-year call volume growth used by the multi-year
    /// projection, in percent.
    pub annual_growth_percent: f64,
    /// Annual discount rate for the net present value, in percent.
    pub discount_rate_percent: f64,
    /// Number of years covered by the multi-year projection.
    pub projection_years: u32,
}

impl Modifiers {
    /// Multiplier applied to every labor cost.
    pub fn benefits_multiplier(&self) -> f64 {
        1.0 + self.benefits_percent / 100.0
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            benefits_percent: 0.0,
            seasonality_factor: 1.0,
            annual_growth_percent: 0.0,
            discount_rate_percent: 0.0,
            projection_years: 5,
        }
    }
}

/// Inclusive range of wages sampled for the cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for WageRange {
    fn default() -> Self {
        Self {
            min: MINIMUM_WAGE_FLOOR,
            max: 18.0,
            step: 0.25,
        }
    }
}

/// A fully sanitised projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub staffing: StaffingInput,
    pub calls: CallProfile,
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub wage_range: WageRange,
}

/// A numeric form value as it arrives from a client: either a JSON
/// number or the text currently held by an input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStaffMember {
    pub weekly_hours: Option<RawNumber>,
    pub hourly_wage: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCallType {
    pub name: Option<String>,
    pub percentage_share: Option<RawNumber>,
    pub avg_time_minutes: Option<RawNumber>,
    pub automation_rate_percent: Option<RawNumber>,
}

/// Unvalidated projection request.
///
/// Every numeric field may be absent, empty, non-numeric or out of
/// range.  [`crate::sanitize::sanitize`] always turns it into a usable
/// [`ProjectionInput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProjectionInput {
    pub active_count: Option<RawNumber>,
    pub staff: Vec<RawStaffMember>,
    pub calls_per_week: Option<RawNumber>,
    pub avg_call_time_minutes: Option<RawNumber>,
    pub automation_percent: Option<RawNumber>,
    pub call_types: Vec<RawCallType>,
    pub plan_name: Option<String>,
    pub plan_cost: Option<RawNumber>,
    pub benefits_percent: Option<RawNumber>,
    pub seasonality_factor: Option<RawNumber>,
    pub annual_growth_percent: Option<RawNumber>,
    pub discount_rate_percent: Option<RawNumber>,
    pub projection_years: Option<RawNumber>,
    pub wage_range: Option<WageRange>,
}

/// Hour totals shared by the curve and the actual-cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborTotals {
    pub weekly_labor_hours: f64,
    pub monthly_labor_hours: f64,
    /// Average call time after applying any call-type breakdown.
    pub effective_call_minutes: f64,
    pub weekly_call_hours: f64,
    pub monthly_call_hours: f64,
    /// Fraction of call hours saved, in `[0, 1]`.
    pub automation_fraction: f64,
    pub monthly_saved_hours: f64,
}

/// Actual monthly cost of one active worker with and without automation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkerCost {
    pub monthly_hours: f64,
    pub saved_hours: f64,
    pub hourly_wage: f64,
    pub cost_without_automation: f64,
    pub cost_with_automation: f64,
}

/// One sample of the synthetic cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCurvePoint {
    pub wage: f64,
    pub cost_without_automation: f64,
    pub cost_with_automation: f64,
}

impl CostCurvePoint {
    /// Monthly cost saved by automating at this wage; negative when the
    /// subscription costs more than the labor it replaces.
    pub fn diff(&self) -> f64 {
        self.cost_without_automation - self.cost_with_automation
    }
}

/// Wage at which the two cost curves cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenPoint {
    pub wage: f64,
    pub cost: f64,
}

/// Where the staff's current average wage sits relative to break-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostEffectiveness {
    /// The average wage is at or above break-even: automating pays off.
    AboveBreakEven,
    /// The average wage is below break-even: automating costs more.
    BelowBreakEven,
    /// The curves never cross in the sampled range.
    NoBreakEven,
}

/// Scalar results derived from the actual costs and the break-even point.
///
/// Every field is finite.  Ratios with a zero denominator fall back to
/// `0.0`, except the payback period which becomes `None` ("not
/// applicable") when there are no savings to pay the plan back with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub actual_cost_without_automation: f64,
    pub actual_cost_with_automation: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Annual savings over annual plan cost, in percent.
    pub roi_percent: f64,
    /// Plan cost divided by monthly savings.
    pub payback_period: Option<f64>,
    pub cost_per_call_without_automation: f64,
    pub cost_per_call_with_automation: f64,
    pub monthly_saved_hours: f64,
    pub fte_freed: f64,
    /// Share of labor hours spent on the phone, in percent.
    pub staff_utilization_percent: f64,
    pub average_wage: f64,
    pub cost_effectiveness: CostEffectiveness,
}

/// Savings for one year of the multi-year projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,
    pub calls_per_week: f64,
    pub annual_savings: f64,
    pub discounted_savings: f64,
    pub cumulative_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiYearProjection {
    pub years: Vec<YearProjection>,
    pub total_savings: f64,
    /// Net present value of the yearly savings.
    pub npv: f64,
}

/// Monthly savings and break-even at one value of a varied parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub parameter_value: f64,
    pub monthly_savings: f64,
    pub break_even_wage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityAnalysis {
    /// Savings as the automation percent sweeps from 0 to 100.
    pub automation: Vec<SensitivityPoint>,
    /// Savings as call volume is scaled around its current value.
    pub call_volume: Vec<SensitivityPoint>,
}

/// The complete output of a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub totals: LaborTotals,
    pub workers: Vec<WorkerCost>,
    pub curve: Vec<CostCurvePoint>,
    pub break_even: Option<BreakEvenPoint>,
    pub metrics: DerivedMetrics,
    pub projection: MultiYearProjection,
    pub sensitivity: SensitivityAnalysis,
}
