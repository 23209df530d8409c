//! Google Calendar free/busy client.
//!
//! Sends a free/busy query for a single calendar and maps the response to
//! the workspace's busy-interval model. A per-calendar error reported by the
//! service fails the whole request; transport failures and unexpected shapes
//! surface as external errors.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing::debug;

use freeslot_core::errors::{SlotError, SlotResult};
use freeslot_core::models::busy::BusyInterval;
use freeslot_core::models::window::TimeWindow;

use crate::BusyIntervalSource;

/// Default free/busy query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/calendar/v3/freeBusy";

/// Client for the Google Calendar free/busy API.
///
/// Holds a shared `reqwest::Client`; cloning is cheap and safe across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleCalendarClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeBusyQuery<'a> {
    time_min: String,
    time_max: String,
    time_zone: &'a str,
    items: Vec<FreeBusyItem<'a>>,
}

#[derive(Debug, Serialize)]
struct FreeBusyItem<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct FreeBusyResponse {
    #[serde(default)]
    calendars: HashMap<String, CalendarEntry>,
}

#[derive(Debug, Deserialize)]
struct CalendarEntry {
    #[serde(default)]
    busy: Vec<BusyInterval>,
    #[serde(default)]
    errors: Vec<CalendarError>,
}

#[derive(Debug, Deserialize)]
struct CalendarError {
    #[serde(default)]
    domain: String,
    reason: String,
}

/// Serialize a query bound from the parsed UTC instant, not the raw request
/// string.
fn format_query_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Extract the busy list for one calendar from a free/busy response.
fn busy_intervals_for(
    calendar_id: &str,
    mut response: FreeBusyResponse,
) -> SlotResult<Vec<BusyInterval>> {
    let entry = response.calendars.remove(calendar_id).ok_or_else(|| {
        SlotError::External(eyre!(
            "calendar {calendar_id} missing from free/busy response"
        ))
    })?;

    if !entry.errors.is_empty() {
        let reasons: Vec<String> = entry
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.domain, e.reason))
            .collect();
        return Err(SlotError::CalendarSource(reasons.join(", ")));
    }

    Ok(entry.busy)
}

#[async_trait]
impl BusyIntervalSource for GoogleCalendarClient {
    async fn fetch_busy_intervals(
        &self,
        calendar_id: &str,
        window: TimeWindow,
    ) -> SlotResult<Vec<BusyInterval>> {
        let query = FreeBusyQuery {
            time_min: format_query_instant(window.start),
            time_max: format_query_instant(window.end),
            time_zone: "UTC",
            items: vec![FreeBusyItem { id: calendar_id }],
        };

        debug!(calendar_id, "querying free/busy");

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&query)
            .send()
            .await
            .map_err(eyre::Report::new)?
            .error_for_status()
            .map_err(eyre::Report::new)?;

        let body: FreeBusyResponse = response.json().await.map_err(eyre::Report::new)?;
        busy_intervals_for(calendar_id, body)
    }
}
