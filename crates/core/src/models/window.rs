use chrono::{DateTime, Utc};

/// The caller-specified half-open `[start, end)` range to search.
///
/// Constructed by the request validator, which guarantees `start <= end` and
/// that both instants fall on the same UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
