//! Validation of requested time windows.
//!
//! Every comparison here operates on parsed UTC instants, never on the raw
//! query strings. The current instant is passed in by the caller so the
//! checks stay pure and testable.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::{SlotError, SlotResult};
use crate::experts::{ExpertDirectory, ExpertName};
use crate::models::window::TimeWindow;

/// Exact accepted shape for `startDateTime` / `endDateTime` values:
/// `YYYY-MM-DDTHH:MM:SS.ffffffZ` with six fractional digits.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A validated `/get_slots` request: the parsed window plus the resolved
/// calendar for the requested expert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub expert: ExpertName,
    pub calendar_id: String,
    pub window: TimeWindow,
}

/// Parse one strict request timestamp. Anything outside the exact pattern is
/// rejected as invalid input.
pub fn parse_request_datetime(field: &str, value: &str) -> SlotResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            SlotError::InvalidInput(format!(
                "{field} must match YYYY-MM-DDTHH:MM:SS.ffffffZ, got {value:?}"
            ))
        })
}

/// Validate a requested window before any external call is made.
///
/// Checks run in a fixed order: required parameters, known expert, strict
/// timestamp parse, start not in the past, end not before start, and both
/// instants on the same UTC calendar date.
pub fn validate_request(
    start: Option<&str>,
    end: Option<&str>,
    expert: Option<&str>,
    now: DateTime<Utc>,
    directory: &ExpertDirectory,
) -> SlotResult<ValidatedRequest> {
    let (Some(start), Some(end), Some(expert)) = (start, end, expert) else {
        return Err(SlotError::InvalidInput(
            "Please provide all required parameters".to_string(),
        ));
    };

    let expert: ExpertName = expert.parse()?;
    let calendar_id = directory
        .calendar_id(expert)
        .ok_or_else(|| SlotError::UnknownExpert(expert.to_string()))?
        .to_string();

    let start = parse_request_datetime("startDateTime", start)?;
    let end = parse_request_datetime("endDateTime", end)?;

    if start < now {
        return Err(SlotError::PastStart);
    }
    if end < start {
        return Err(SlotError::EndBeforeStart);
    }
    if start.date_naive() != end.date_naive() {
        return Err(SlotError::CrossDayWindow);
    }

    Ok(ValidatedRequest {
        expert,
        calendar_id,
        window: TimeWindow { start, end },
    })
}
