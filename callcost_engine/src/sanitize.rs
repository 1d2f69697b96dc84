//! Input sanitisation.
//!
//! Numeric form fields transiently hold empty or half-typed text while
//! a user edits them, and the engine must stay callable on every
//! keystroke.  [`sanitize`] turns a [`RawProjectionInput`] into a
//! [`ProjectionInput`] in a single pass, substituting a fixed default
//! for every missing or invalid field.  It never fails.
//!
//! | field                  | default | accepted range                   |
//! |------------------------|---------|----------------------------------|
//! | active staff count     | 1       | clamped to `1..=STAFF_CAPACITY`  |
//! | weekly hours           | 0       | `0..=168`                        |
//! | hourly wage            | 4.74    | `0..=1_000`                      |
//! | calls per week         | 0       | `0..=1_000_000`                  |
//! | avg call time (min)    | 0.1     | clamped to `0.1..=1_440`         |
//! | automation percent     | 0       | clamped to `0..=100`             |
//! | plan cost              | 0       | `0..=1_000_000`                  |
//! | benefits percent       | 0       | `0..=1_000`                      |
//! | seasonality factor     | 1       | `0..=10`                         |
//! | annual growth percent  | 0       | clamped to `-100..=1_000`        |
//! | discount rate percent  | 0       | `0..=1_000`                      |
//! | projection years       | 5       | clamped to `1..=30`              |
//! | call-type share        | 0       | `0..=1_000` (renormalised later) |
//! | call-type time (min)   | 0.1     | clamped to `0.1..=1_440`         |
//! | call-type automation   | 0       | clamped to `0..=100`             |
//!
//! A value that is negative where the range starts at `0` is treated as
//! invalid and replaced by the default.  A value above a ceiling is
//! clamped to the ceiling.  The ceilings keep every product the engine
//! forms finite.
//!
//! A caller-supplied wage range must satisfy `0 <= min <= max <= 10_000`,
//! `step >= 0.01` and produce fewer than [`MAX_CURVE_POINTS`] samples;
//! otherwise the default range is used.

use crate::models::{
    CallProfile, CallType, Modifiers, ProjectionInput, RawCallType, RawNumber,
    RawProjectionInput, RawStaffMember, StaffMember, StaffingInput, SubscriptionPlan, WageRange,
    MINIMUM_WAGE_FLOOR, MIN_CALL_TIME_MINUTES, STAFF_CAPACITY,
};
use tracing::debug;

/// Upper bound on the number of sampled wages in a caller-supplied range.
pub const MAX_CURVE_POINTS: usize = 2_000;

/// Smallest wage step; samples are rounded to cents.
pub const MIN_WAGE_STEP: f64 = 0.01;

pub const MAX_WEEKLY_HOURS: f64 = 168.0;
pub const MAX_HOURLY_WAGE: f64 = 1_000.0;
pub const MAX_CALLS_PER_WEEK: f64 = 1_000_000.0;
pub const MAX_CALL_TIME_MINUTES: f64 = 1_440.0;
pub const MAX_PLAN_COST: f64 = 1_000_000.0;
pub const MAX_PERCENT_MODIFIER: f64 = 1_000.0;
pub const MAX_SEASONALITY_FACTOR: f64 = 10.0;
pub const MAX_CURVE_WAGE: f64 = 10_000.0;

const MAX_PROJECTION_YEARS: u32 = 30;

/// Parse a raw value into a finite number.  Empty or unparsable text
/// and non-finite numbers yield `None`.
pub fn parse_number(raw: Option<&RawNumber>) -> Option<f64> {
    let value = match raw? {
        RawNumber::Number(n) => *n,
        RawNumber::Text(text) => text.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// A number in `0..=max`, or `default` when the value is missing,
/// invalid or negative.
fn bounded_or(raw: Option<&RawNumber>, default: f64, max: f64, field: &str) -> f64 {
    match parse_number(raw) {
        Some(v) if v >= 0.0 => v.min(max),
        other => {
            if raw.is_some() {
                debug!(field, value = ?other, default, "substituting default for invalid input");
            }
            default
        }
    }
}

fn clamped_or(raw: Option<&RawNumber>, default: f64, min: f64, max: f64, field: &str) -> f64 {
    match parse_number(raw) {
        Some(v) => v.clamp(min, max),
        None => {
            if raw.is_some() {
                debug!(field, default, "substituting default for unparsable input");
            }
            default
        }
    }
}

fn call_minutes_or_floor(raw: Option<&RawNumber>, field: &str) -> f64 {
    clamped_or(
        raw,
        MIN_CALL_TIME_MINUTES,
        MIN_CALL_TIME_MINUTES,
        MAX_CALL_TIME_MINUTES,
        field,
    )
}

fn sanitize_member(raw: &RawStaffMember) -> StaffMember {
    StaffMember {
        weekly_hours: bounded_or(
            raw.weekly_hours.as_ref(),
            0.0,
            MAX_WEEKLY_HOURS,
            "weekly_hours",
        ),
        hourly_wage: bounded_or(
            raw.hourly_wage.as_ref(),
            MINIMUM_WAGE_FLOOR,
            MAX_HOURLY_WAGE,
            "hourly_wage",
        ),
    }
}

/// Sanitise the roster.  The active count is clamped to
/// `1..=STAFF_CAPACITY` and the roster is padded with default members
/// so that every active slot exists.
fn sanitize_staffing(active_count: Option<&RawNumber>, staff: &[RawStaffMember]) -> StaffingInput {
    let active_count = parse_number(active_count)
        .map(|n| n.floor().clamp(1.0, STAFF_CAPACITY as f64) as usize)
        .unwrap_or(1);
    let mut members: Vec<StaffMember> = staff.iter().map(sanitize_member).collect();
    if members.len() < active_count {
        members.resize(active_count, sanitize_member(&RawStaffMember::default()));
    }
    StaffingInput {
        members,
        active_count,
    }
}

fn sanitize_call_type(index: usize, raw: &RawCallType) -> CallType {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Category {}", index + 1));
    CallType {
        name,
        percentage_share: bounded_or(
            raw.percentage_share.as_ref(),
            0.0,
            MAX_PERCENT_MODIFIER,
            "percentage_share",
        ),
        avg_time_minutes: call_minutes_or_floor(raw.avg_time_minutes.as_ref(), "avg_time_minutes"),
        automation_rate_percent: clamped_or(
            raw.automation_rate_percent.as_ref(),
            0.0,
            0.0,
            100.0,
            "automation_rate_percent",
        ),
    }
}

/// Validate a caller-supplied wage range, falling back to the default
/// range when it is unusable.
pub fn sanitize_wage_range(range: Option<WageRange>) -> WageRange {
    let Some(range) = range else {
        return WageRange::default();
    };
    let finite = range.min.is_finite() && range.max.is_finite() && range.step.is_finite();
    let usable = finite
        && range.min >= 0.0
        && range.max >= range.min
        && range.max <= MAX_CURVE_WAGE
        && range.step >= MIN_WAGE_STEP
        && (range.max - range.min) / range.step < MAX_CURVE_POINTS as f64;
    if usable {
        range
    } else {
        debug!(?range, "wage range rejected, using default");
        WageRange::default()
    }
}

/// Turn raw form state into a fully defined projection input.
pub fn sanitize(raw: &RawProjectionInput) -> ProjectionInput {
    let staffing = sanitize_staffing(raw.active_count.as_ref(), &raw.staff);

    let calls = CallProfile {
        calls_per_week: bounded_or(
            raw.calls_per_week.as_ref(),
            0.0,
            MAX_CALLS_PER_WEEK,
            "calls_per_week",
        ),
        avg_call_time_minutes: call_minutes_or_floor(
            raw.avg_call_time_minutes.as_ref(),
            "avg_call_time_minutes",
        ),
        automation_percent: clamped_or(
            raw.automation_percent.as_ref(),
            0.0,
            0.0,
            100.0,
            "automation_percent",
        ),
        call_types: raw
            .call_types
            .iter()
            .enumerate()
            .map(|(i, c)| sanitize_call_type(i, c))
            .collect(),
    };

    let plan = SubscriptionPlan {
        name: raw
            .plan_name
            .clone()
            .unwrap_or_else(|| "Custom Plan".to_string()),
        monthly_cost: bounded_or(raw.plan_cost.as_ref(), 0.0, MAX_PLAN_COST, "plan_cost"),
    };

    let defaults = Modifiers::default();
    let modifiers = Modifiers {
        benefits_percent: bounded_or(
            raw.benefits_percent.as_ref(),
            0.0,
            MAX_PERCENT_MODIFIER,
            "benefits_percent",
        ),
        seasonality_factor: bounded_or(
            raw.seasonality_factor.as_ref(),
            defaults.seasonality_factor,
            MAX_SEASONALITY_FACTOR,
            "seasonality_factor",
        ),
        annual_growth_percent: clamped_or(
            raw.annual_growth_percent.as_ref(),
            0.0,
            -100.0,
            MAX_PERCENT_MODIFIER,
            "annual_growth_percent",
        ),
        discount_rate_percent: bounded_or(
            raw.discount_rate_percent.as_ref(),
            0.0,
            MAX_PERCENT_MODIFIER,
            "discount_rate_percent",
        ),
        projection_years: parse_number(raw.projection_years.as_ref())
            .map(|y| y.round().clamp(1.0, MAX_PROJECTION_YEARS as f64) as u32)
            .unwrap_or(defaults.projection_years),
    };

    ProjectionInput {
        staffing,
        calls,
        plan,
        modifiers,
        wage_range: sanitize_wage_range(raw.wage_range),
    }
}
