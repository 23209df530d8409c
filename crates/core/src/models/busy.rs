use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open range during which an expert is unavailable, as reported by
/// the external calendar source.
///
/// The source reports whole-second UTC timestamps (`YYYY-MM-DDTHH:MM:SSZ`);
/// chrono's default serde rendering reproduces that format when the list is
/// echoed back to the caller. Intervals are not assumed sorted or
/// non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
