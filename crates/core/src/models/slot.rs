use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Fixed display timezone for rendered slots (Indian Standard Time).
pub const DISPLAY_TZ: Tz = chrono_tz::Asia::Kolkata;

/// One candidate free block, computed in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Slot {
    /// Format in the display zone with full offset, e.g.
    /// `2026-08-07T14:45:00+05:30`.
    ///
    /// Only the rendered offset changes; the instant is preserved.
    pub fn rendered(&self) -> RenderedSlot {
        RenderedSlot {
            start: self
                .start
                .with_timezone(&DISPLAY_TZ)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            end: self
                .end
                .with_timezone(&DISPLAY_TZ)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

/// A slot formatted for the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSlot {
    pub start: String,
    pub end: String,
}
