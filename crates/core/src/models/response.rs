use serde::{Deserialize, Serialize};

use super::busy::BusyInterval;
use super::slot::RenderedSlot;

/// Body of a successful `/get_slots` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SlotsResponse {
    /// The source reported no busy intervals: the whole window is free.
    #[serde(rename = "Free")]
    Free,

    /// Busy intervals exist: echo them as reported and list the remaining
    /// free slots in display-zone rendering.
    #[serde(rename = "Busy/Free")]
    BusyFree {
        busy_slots: Vec<BusyInterval>,
        free_slots: Vec<RenderedSlot>,
    },
}
