use async_trait::async_trait;
use mockall::mock;

use freeslot_core::errors::SlotResult;
use freeslot_core::models::busy::BusyInterval;
use freeslot_core::models::window::TimeWindow;

use crate::BusyIntervalSource;

// Mock calendar source for handler tests
mock! {
    pub CalendarSource {}

    #[async_trait]
    impl BusyIntervalSource for CalendarSource {
        async fn fetch_busy_intervals(
            &self,
            calendar_id: &str,
            window: TimeWindow,
        ) -> SlotResult<Vec<BusyInterval>>;
    }
}
