use callcost_engine::allocation::allocate_saved_hours;
use callcost_engine::curve::sample_wages;
use callcost_engine::engine::{project, project_raw};
use callcost_engine::models::{
    CallProfile, Modifiers, ProjectionInput, RawCallType, RawNumber, RawProjectionInput,
    RawStaffMember, StaffMember, StaffingInput, SubscriptionPlan, WageRange,
};
use callcost_engine::sanitize::sanitize_wage_range;
use proptest::prelude::*;

fn arb_member() -> impl Strategy<Value = StaffMember> {
    (0.0f64..60.0, 0.0f64..40.0).prop_map(|(weekly_hours, hourly_wage)| StaffMember {
        weekly_hours,
        hourly_wage,
    })
}

fn arb_input() -> impl Strategy<Value = ProjectionInput> {
    (
        prop::collection::vec(arb_member(), 1..=10),
        1usize..=10,
        0.0f64..3_000.0,
        0.1f64..20.0,
        0.0f64..=100.0,
        0.0f64..1_000.0,
        0.0f64..50.0,
    )
        .prop_map(
            |(members, active, calls, minutes, automation, plan, benefits)| ProjectionInput {
                staffing: StaffingInput {
                    active_count: active.min(members.len()),
                    members,
                },
                calls: CallProfile {
                    calls_per_week: calls,
                    avg_call_time_minutes: minutes,
                    automation_percent: automation,
                    call_types: Vec::new(),
                },
                plan: SubscriptionPlan {
                    name: "Plan".to_string(),
                    monthly_cost: plan,
                },
                modifiers: Modifiers {
                    benefits_percent: benefits,
                    projection_years: 2,
                    ..Modifiers::default()
                },
                wage_range: WageRange::default(),
            },
        )
}

/// Raw field values spanning ordinary input up to the edge of `f64`.
fn arb_extreme() -> impl Strategy<Value = Option<RawNumber>> {
    prop_oneof![
        Just(Some(RawNumber::Number(f64::MAX))),
        (1e100f64..f64::MAX).prop_map(|n| Some(RawNumber::Number(n))),
        (-f64::MAX..f64::MAX).prop_map(|n| Some(RawNumber::Number(n))),
        Just(Some(RawNumber::from("1e308"))),
        Just(None),
    ]
}

fn arb_extreme_raw() -> impl Strategy<Value = RawProjectionInput> {
    (
        prop::collection::vec((arb_extreme(), arb_extreme()), 1..=10),
        prop::collection::vec((arb_extreme(), arb_extreme(), arb_extreme()), 0..=3),
        prop::collection::vec(arb_extreme(), 10),
    )
        .prop_map(|(staff, call_types, fields)| RawProjectionInput {
            active_count: fields[0].clone(),
            staff: staff
                .into_iter()
                .map(|(weekly_hours, hourly_wage)| RawStaffMember {
                    weekly_hours,
                    hourly_wage,
                })
                .collect(),
            calls_per_week: fields[1].clone(),
            avg_call_time_minutes: fields[2].clone(),
            automation_percent: fields[3].clone(),
            call_types: call_types
                .into_iter()
                .map(|(share, time, rate)| RawCallType {
                    name: None,
                    percentage_share: share,
                    avg_time_minutes: time,
                    automation_rate_percent: rate,
                })
                .collect(),
            plan_name: None,
            plan_cost: fields[4].clone(),
            benefits_percent: fields[5].clone(),
            seasonality_factor: fields[6].clone(),
            annual_growth_percent: fields[7].clone(),
            discount_rate_percent: fields[8].clone(),
            projection_years: fields[9].clone(),
            wage_range: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn curve_is_finite_and_non_negative(input in arb_input()) {
        let result = project(&input);
        for p in &result.curve {
            prop_assert!(p.cost_without_automation.is_finite());
            prop_assert!(p.cost_with_automation.is_finite());
            prop_assert!(p.cost_without_automation >= 0.0);
            prop_assert!(p.cost_with_automation >= 0.0);
        }
    }

    #[test]
    fn curve_is_non_decreasing_in_wage(input in arb_input()) {
        let result = project(&input);
        for w in result.curve.windows(2) {
            prop_assert!(w[0].wage < w[1].wage);
            prop_assert!(w[0].cost_without_automation <= w[1].cost_without_automation);
            prop_assert!(w[0].cost_with_automation <= w[1].cost_with_automation);
        }
    }

    #[test]
    fn break_even_lies_inside_its_segment(input in arb_input()) {
        let result = project(&input);
        if let Some(be) = result.break_even {
            let segment = result
                .curve
                .windows(2)
                .find(|w| w[0].wage <= be.wage && be.wage <= w[1].wage);
            prop_assert!(segment.is_some());
            let w = segment.unwrap();
            let lo = w[0].cost_without_automation.min(w[1].cost_without_automation);
            let hi = w[0].cost_without_automation.max(w[1].cost_without_automation);
            prop_assert!(be.cost >= lo - 1e-9 && be.cost <= hi + 1e-9);
        }
    }

    #[test]
    fn no_automation_means_no_break_even(mut input in arb_input()) {
        input.calls.automation_percent = 0.0;
        prop_assert!(project(&input).break_even.is_none());
    }

    #[test]
    fn projection_is_idempotent(input in arb_input()) {
        prop_assert_eq!(project(&input), project(&input));
    }

    #[test]
    fn metrics_are_finite(input in arb_input()) {
        let m = project(&input).metrics;
        for value in [
            m.monthly_savings,
            m.annual_savings,
            m.roi_percent,
            m.cost_per_call_with_automation,
            m.cost_per_call_without_automation,
            m.staff_utilization_percent,
            m.fte_freed,
        ] {
            prop_assert!(value.is_finite());
        }
        if let Some(payback) = m.payback_period {
            prop_assert!(payback.is_finite() && payback >= 0.0);
            prop_assert!(m.monthly_savings > 0.0);
        }
    }

    #[test]
    fn allocation_respects_caps(
        hours in prop::collection::vec(0.0f64..300.0, 1..=10),
        saved in 0.0f64..2_000.0,
    ) {
        let allocated = allocate_saved_hours(&hours, saved);
        prop_assert_eq!(allocated.len(), hours.len());
        for (a, h) in allocated.iter().zip(hours.iter()) {
            prop_assert!(*a >= 0.0 && a <= h);
        }
        let total: f64 = allocated.iter().sum();
        prop_assert!(total <= saved + 1e-9);
    }

    #[test]
    fn extreme_raw_input_stays_finite(raw in arb_extreme_raw()) {
        let result = project_raw(&raw);
        for p in &result.curve {
            prop_assert!(p.cost_without_automation.is_finite());
            prop_assert!(p.cost_with_automation.is_finite());
        }
        if let Some(be) = result.break_even {
            prop_assert!(be.wage.is_finite() && be.cost.is_finite());
        }
        let m = &result.metrics;
        for value in [
            m.actual_cost_without_automation,
            m.actual_cost_with_automation,
            m.monthly_savings,
            m.annual_savings,
            m.roi_percent,
            m.cost_per_call_with_automation,
            m.cost_per_call_without_automation,
            m.staff_utilization_percent,
            m.fte_freed,
        ] {
            prop_assert!(value.is_finite());
        }
        for worker in &result.workers {
            prop_assert!(worker.saved_hours.is_finite());
            prop_assert!(worker.saved_hours <= worker.monthly_hours);
        }
        prop_assert!(result.projection.npv.is_finite());
        prop_assert!(result.projection.total_savings.is_finite());
    }

    #[test]
    fn sampled_wages_are_strictly_ascending(
        min in 0.0f64..50.0,
        span in 0.0f64..20.0,
        step in 0.0001f64..2.0,
    ) {
        let range = sanitize_wage_range(Some(WageRange { min, max: min + span, step }));
        let wages = sample_wages(&range);
        prop_assert!(!wages.is_empty());
        for w in wages.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }
}
