#![cfg(feature = "temporal")]

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use waypoint_validator::codes;
use waypoint_validator::prelude::*;

struct Delivery {
    ordered_at: Option<NaiveDateTime>,
    delivered_at: Option<DateTime<Utc>>,
    window_opens: Option<NaiveTime>,
}

fn may(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

fn utc(day: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&may(day))
}

fn rules(delivery: &Delivery) -> ValidationResult {
    let campaign = (may(1), may(31));
    let opening = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");

    Context::of("delivery", delivery)
        .evaluate_temporal("orderedAt", |d| d.ordered_at.as_ref(), |ordered| {
            ordered.fail_when_missing().fail_when_not_between(&campaign.0, &campaign.1)
        })
        .validate_temporal("deliveredAt", |d| d.delivered_at.as_ref(), |delivered| {
            delivered
                .as_optional()
                .fail_when_after(&utc(31))
                .into_result()
        })
        .evaluate_temporal("windowOpens", |d| d.window_opens.as_ref(), |window| {
            window.as_optional().fail_when_before(&opening)
        })
        .into_result()
}

#[test]
fn in_campaign_delivery_is_clean() {
    let delivery = Delivery {
        ordered_at: Some(may(1)),
        delivered_at: Some(utc(31)),
        window_opens: Some(NaiveTime::from_hms_opt(8, 0, 0).expect("valid time")),
    };
    let result = rules(&delivery);
    assert!(result.is_empty(), "{}", result.all_details_as_string());
}

#[test]
fn out_of_campaign_order_is_located() {
    let delivery = Delivery {
        ordered_at: NaiveDate::from_ymd_opt(2024, 6, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
        delivered_at: None,
        window_opens: None,
    };

    let result = rules(&delivery);
    let failure = result.first_failure().expect("order date out of campaign");

    assert_eq!(failure.code(), codes::NOT_BETWEEN_TEMPORAL);
    assert_eq!(failure.message(), "not in between");
    assert_eq!(failure.location(), "delivery.orderedAt");
    assert_eq!(failure.inputs(), [Some("2024-06-01 00:00:00".to_owned())]);
    assert!(!result.has_warning());
}

#[test]
fn late_delivery_renders_offset() {
    let delivery = Delivery {
        ordered_at: Some(may(2)),
        delivered_at: Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).single(),
        window_opens: None,
    };

    let result = rules(&delivery);
    let failure = result.find_validation_code(codes::AFTER_TEMPORAL).expect("late delivery");
    assert_eq!(failure.context_path(), "delivery.deliveredAt");
    assert_eq!(failure.inputs(), [Some("2024-06-02 09:30:00 UTC".to_owned())]);
}

#[rstest]
#[case(7, 59, true)]
#[case(8, 0, false)]
#[case(23, 59, false)]
fn window_must_not_open_before_eight(#[case] hour: u32, #[case] minute: u32, #[case] fails: bool) {
    let delivery = Delivery {
        ordered_at: Some(may(2)),
        delivered_at: None,
        window_opens: NaiveTime::from_hms_opt(hour, minute, 0),
    };

    let result = rules(&delivery);
    assert_eq!(result.has_validation_code(codes::BEFORE_TEMPORAL), fails);
}

#[test]
fn missing_order_date_fails_without_range_check() {
    let delivery = Delivery {
        ordered_at: None,
        delivered_at: None,
        window_opens: None,
    };

    let result = rules(&delivery);
    let codes_found: Vec<&str> = result.iter().map(Registration::code).collect();
    assert_eq!(codes_found, [codes::MISSING, codes::NOT_MARKED_AS_OPTIONAL]);
}

#[test]
fn forbidden_interval_is_inclusive() {
    let holiday = (may(10), may(12));

    let outcomes: Vec<bool> = [may(9), may(10), may(11), may(12), may(13)]
        .iter()
        .map(|day| {
            TemporalContext::of("shipDate", day)
                .fail_when_between(&holiday.0, &holiday.1)
                .into_result()
                .has_validation_code(codes::BETWEEN_TEMPORAL)
        })
        .collect();

    assert_eq!(outcomes, [false, true, true, true, false]);
}
