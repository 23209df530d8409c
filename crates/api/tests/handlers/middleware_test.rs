use axum::http::StatusCode;
use rstest::rstest;

use freeslot_api::middleware::error_handling::map_error;
use freeslot_core::errors::SlotError;

#[rstest]
#[case::invalid_input(
    SlotError::InvalidInput("missing".to_string()),
    StatusCode::BAD_REQUEST
)]
#[case::unknown_expert(
    SlotError::UnknownExpert("Nobody".to_string()),
    StatusCode::BAD_REQUEST
)]
#[case::calendar_source(
    SlotError::CalendarSource("global: notFound".to_string()),
    StatusCode::BAD_REQUEST
)]
#[case::past_start(SlotError::PastStart, StatusCode::UNPROCESSABLE_ENTITY)]
#[case::end_before_start(SlotError::EndBeforeStart, StatusCode::UNPROCESSABLE_ENTITY)]
#[case::cross_day(SlotError::CrossDayWindow, StatusCode::UNPROCESSABLE_ENTITY)]
fn test_error_status_mapping(#[case] error: SlotError, #[case] status: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), status);
}

#[test]
fn test_external_errors_are_internal_server_errors() {
    let response = map_error(SlotError::External(eyre::eyre!("connection refused")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
