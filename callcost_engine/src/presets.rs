//! Built-in defaults: the initial form state and the plan catalogue.

use crate::models::{
    CallProfile, Modifiers, ProjectionInput, StaffMember, StaffingInput, SubscriptionPlan,
    WageRange, STAFF_CAPACITY,
};

pub const DEFAULT_STAFF_COUNT: usize = 4;
pub const DEFAULT_WEEKLY_HOURS: f64 = 15.0;
pub const DEFAULT_HOURLY_WAGE: f64 = 16.0;
pub const DEFAULT_CALLS_PER_WEEK: f64 = 410.0;
pub const DEFAULT_AVG_CALL_TIME: f64 = 3.0;
pub const DEFAULT_AUTOMATION_PERCENT: f64 = 70.0;

/// Subscription plans offered by the automated answering service.
pub fn plan_catalogue() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            name: "No Subscription".to_string(),
            monthly_cost: 0.0,
        },
        SubscriptionPlan {
            name: "Core Plan".to_string(),
            monthly_cost: 399.0,
        },
        SubscriptionPlan {
            name: "Premium Plan".to_string(),
            monthly_cost: 599.0,
        },
    ]
}

/// The input a fresh calculator starts with: four hosts working 15
/// hours a week at $16, 410 calls of three minutes, 70% automation and
/// the Core plan.  All ten roster slots are filled so that raising the
/// staff count reveals sensible values.
pub fn default_input() -> ProjectionInput {
    ProjectionInput {
        staffing: StaffingInput {
            members: vec![
                StaffMember {
                    weekly_hours: DEFAULT_WEEKLY_HOURS,
                    hourly_wage: DEFAULT_HOURLY_WAGE,
                };
                STAFF_CAPACITY
            ],
            active_count: DEFAULT_STAFF_COUNT,
        },
        calls: CallProfile {
            calls_per_week: DEFAULT_CALLS_PER_WEEK,
            avg_call_time_minutes: DEFAULT_AVG_CALL_TIME,
            automation_percent: DEFAULT_AUTOMATION_PERCENT,
            call_types: Vec::new(),
        },
        plan: SubscriptionPlan {
            name: "Core Plan".to_string(),
            monthly_cost: 399.0,
        },
        modifiers: Modifiers::default(),
        wage_range: WageRange::default(),
    }
}
