//! # Freeslot Calendar
//!
//! The external calendar collaborator. This crate exposes the narrow
//! [`BusyIntervalSource`] interface the rest of the workspace depends on,
//! the Google Calendar free/busy client that implements it, and a mock
//! implementation for tests.

/// Google Calendar free/busy client
pub mod google;
/// Mock calendar source for tests
pub mod mock;

use async_trait::async_trait;
use freeslot_core::errors::SlotResult;
use freeslot_core::models::busy::BusyInterval;
use freeslot_core::models::window::TimeWindow;

/// Narrow interface over the external calendar service.
///
/// Handlers depend on this trait rather than on the concrete client, so the
/// validator and the free-slot calculator are exercisable without network
/// access.
#[async_trait]
pub trait BusyIntervalSource: Send + Sync {
    /// Fetch the busy intervals for one calendar within the given window.
    ///
    /// A per-calendar error reported by the service is a request failure,
    /// never a partial result.
    async fn fetch_busy_intervals(
        &self,
        calendar_id: &str,
        window: TimeWindow,
    ) -> SlotResult<Vec<BusyInterval>>;
}
