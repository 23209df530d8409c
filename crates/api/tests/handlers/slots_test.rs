use axum::extract::{Query, State};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use freeslot_core::errors::SlotError;
use freeslot_core::experts::{ExpertDirectory, ExpertName};
use freeslot_core::models::busy::BusyInterval;
use freeslot_core::models::response::SlotsResponse;
use freeslot_core::models::slot::Slot;

use crate::test_utils::TestContext;
use freeslot_api::handlers::slots::{get_slots, SlotQuery};

// Well in the future so the past-start check never trips in tests
const START: &str = "2099-01-01T09:00:00.000000Z";
const END: &str = "2099-01-01T10:00:00.000000Z";

fn query(start: Option<&str>, end: Option<&str>, expert: Option<&str>) -> Query<SlotQuery> {
    Query(SlotQuery {
        start_date_time: start.map(str::to_string),
        end_date_time: end.map(str::to_string),
        expert_name: expert.map(str::to_string),
    })
}

#[tokio::test]
async fn test_whole_window_free_short_circuits() {
    let mut ctx = TestContext::new();

    let expected_id = ExpertDirectory::builtin()
        .calendar_id(ExpertName::Person1)
        .unwrap()
        .to_string();
    ctx.calendar
        .expect_fetch_busy_intervals()
        .times(1)
        .withf(move |calendar_id, window| {
            calendar_id == expected_id
                && window.start == Utc.with_ymd_and_hms(2099, 1, 1, 9, 0, 0).unwrap()
                && window.end == Utc.with_ymd_and_hms(2099, 1, 1, 10, 0, 0).unwrap()
        })
        .returning(|_, _| Ok(Vec::new()));

    let result = get_slots(
        State(ctx.into_state()),
        query(Some(START), Some(END), Some("Person1")),
    )
    .await;

    let response = result.expect("request should succeed");
    assert_eq!(response.0, SlotsResponse::Free);
}

#[tokio::test]
async fn test_busy_intervals_are_echoed_and_free_slots_computed() {
    let mut ctx = TestContext::new();

    let busy = BusyInterval {
        start: Utc.with_ymd_and_hms(2099, 1, 1, 9, 15, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2099, 1, 1, 9, 30, 0).unwrap(),
    };
    ctx.calendar
        .expect_fetch_busy_intervals()
        .times(1)
        .returning(move |_, _| Ok(vec![busy]));

    let result = get_slots(
        State(ctx.into_state()),
        query(Some(START), Some(END), Some("Person1")),
    )
    .await;

    let response = result.expect("request should succeed");

    let expected_free: Vec<_> = [(9, 0, 9, 15), (9, 30, 9, 45), (9, 45, 10, 0)]
        .iter()
        .map(|&(sh, sm, eh, em)| {
            Slot {
                start: Utc.with_ymd_and_hms(2099, 1, 1, sh, sm, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2099, 1, 1, eh, em, 0).unwrap(),
            }
            .rendered()
        })
        .collect();
    assert_eq!(
        response.0,
        SlotsResponse::BusyFree {
            busy_slots: vec![busy],
            free_slots: expected_free,
        }
    );
}

#[tokio::test]
async fn test_missing_parameters_are_rejected_before_the_lookup() {
    let ctx = TestContext::new();

    let result = get_slots(
        State(ctx.into_state()),
        query(Some(START), None, Some("Person1")),
    )
    .await;

    let err = result.err().expect("request should fail");
    assert!(matches!(err.0, SlotError::InvalidInput(_)));
}

#[tokio::test]
async fn test_unknown_expert_is_rejected_before_the_lookup() {
    let ctx = TestContext::new();

    let result = get_slots(
        State(ctx.into_state()),
        query(Some(START), Some(END), Some("Nobody")),
    )
    .await;

    let err = result.err().expect("request should fail");
    assert!(matches!(err.0, SlotError::UnknownExpert(_)));
}

#[tokio::test]
async fn test_past_start_is_rejected_before_the_lookup() {
    let ctx = TestContext::new();

    let result = get_slots(
        State(ctx.into_state()),
        query(
            Some("2020-01-01T09:00:00.000000Z"),
            Some("2020-01-01T10:00:00.000000Z"),
            Some("Person1"),
        ),
    )
    .await;

    let err = result.err().expect("request should fail");
    assert!(matches!(err.0, SlotError::PastStart));
}

#[tokio::test]
async fn test_cross_day_window_is_rejected_before_the_lookup() {
    let ctx = TestContext::new();

    let result = get_slots(
        State(ctx.into_state()),
        query(
            Some("2099-01-01T23:00:00.000000Z"),
            Some("2099-01-02T00:30:00.000000Z"),
            Some("Person1"),
        ),
    )
    .await;

    let err = result.err().expect("request should fail");
    assert!(matches!(err.0, SlotError::CrossDayWindow));
}

#[tokio::test]
async fn test_source_reported_error_fails_the_request() {
    let mut ctx = TestContext::new();

    ctx.calendar
        .expect_fetch_busy_intervals()
        .times(1)
        .returning(|_, _| Err(SlotError::CalendarSource("global: notFound".to_string())));

    let result = get_slots(
        State(ctx.into_state()),
        query(Some(START), Some(END), Some("Person1")),
    )
    .await;

    let err = result.err().expect("request should fail");
    match err.0 {
        SlotError::CalendarSource(message) => assert_eq!(message, "global: notFound"),
        other => panic!("expected CalendarSource error, got: {other:?}"),
    }
}
