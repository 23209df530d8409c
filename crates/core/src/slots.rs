//! Free-slot computation over busy intervals.
//!
//! All interval arithmetic stays in UTC; the display-zone conversion happens
//! only in [`Slot::rendered`](crate::models::slot::Slot::rendered) at the
//! response boundary.

use chrono::Duration;

use crate::models::busy::BusyInterval;
use crate::models::slot::Slot;
use crate::models::window::TimeWindow;

/// Width of every candidate slot, in minutes.
pub const SLOT_MINUTES: i64 = 15;

/// Walk the window in fixed 15-minute steps and keep the candidates that
/// overlap no busy interval.
///
/// Candidates are half-open `[cursor, cursor + 15m)` ranges emitted in cursor
/// order; the last one ends at or before `window.end`, so a trailing partial
/// block is never reported. A candidate touching a busy interval only at an
/// endpoint counts as free. Busy intervals may overlap each other; each is
/// tested independently, which is equivalent to testing against their merged
/// form. O(candidates x busy intervals), which is fine for bounded
/// single-day windows.
pub fn find_free_slots(window: &TimeWindow, busy: &[BusyInterval]) -> Vec<Slot> {
    let step = Duration::minutes(SLOT_MINUTES);
    let mut slots = Vec::new();

    let mut cursor = window.start;
    while cursor + step <= window.end {
        let candidate = Slot {
            start: cursor,
            end: cursor + step,
        };
        let is_free = busy
            .iter()
            .all(|b| candidate.start >= b.end || candidate.end <= b.start);
        if is_free {
            slots.push(candidate);
        }
        cursor += step;
    }

    slots
}
