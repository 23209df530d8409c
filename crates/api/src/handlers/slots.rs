//! # Slot Discovery Handler
//!
//! Handler for the `/get_slots` endpoint. The flow is: validate the
//! requested window, ask the external calendar source for busy intervals,
//! then either short-circuit to whole-window-free or run the free-slot
//! calculator over the reported intervals.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use freeslot_core::models::response::SlotsResponse;
use freeslot_core::slots::find_free_slots;
use freeslot_core::validator::validate_request;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot discovery endpoint.
///
/// All three are required. They are extracted as optional so the validator
/// can reject missing values with the standard error body instead of the
/// extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Window start, strict `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    #[serde(rename = "startDateTime")]
    pub start_date_time: Option<String>,

    /// Window end, strict `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    #[serde(rename = "endDateTime")]
    pub end_date_time: Option<String>,

    /// One of the five known expert identifiers
    #[serde(rename = "expertName")]
    pub expert_name: Option<String>,
}

/// Finds free 15-minute slots for one expert within a same-day UTC window.
///
/// # Endpoint
///
/// ```text
/// GET /get_slots?startDateTime=...&endDateTime=...&expertName=Person1
/// ```
///
/// # Responses
///
/// * `200` `{"status": "Free"}` — the source reported no busy intervals
/// * `200` `{"status": "Busy/Free", "busy_slots": [...], "free_slots": [...]}`
/// * `400` — missing/malformed parameters, unknown expert, or a
///   per-calendar error reported by the source
/// * `422` — start in the past, end before start, or a window crossing a
///   UTC day boundary
/// * `500` — any other failure from the external dependency
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let request = validate_request(
        query.start_date_time.as_deref(),
        query.end_date_time.as_deref(),
        query.expert_name.as_deref(),
        Utc::now(),
        &state.experts,
    )?;

    let busy = state
        .calendar
        .fetch_busy_intervals(&request.calendar_id, request.window)
        .await?;

    // No busy intervals: the whole window is free and the calculator is not
    // invoked at all.
    if busy.is_empty() {
        return Ok(Json(SlotsResponse::Free));
    }

    let free_slots = find_free_slots(&request.window, &busy)
        .iter()
        .map(|slot| slot.rendered())
        .collect();

    Ok(Json(SlotsResponse::BusyFree {
        busy_slots: busy,
        free_slots,
    }))
}
