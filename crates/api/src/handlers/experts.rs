use axum::{extract::State, Json};
use std::sync::Arc;

use crate::ApiState;

/// Returns the fixed ordered list of expert identifiers.
///
/// # Endpoint
///
/// ```text
/// GET /get_expert_list
/// ```
#[axum::debug_handler]
pub async fn get_expert_list(State(state): State<Arc<ApiState>>) -> Json<Vec<String>> {
    Json(state.experts.names())
}
