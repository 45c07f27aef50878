//! Router for the calendar API

use std::sync::Arc;

use axum::{Router, extract::State, response::Json};

use crate::api::state::AppState;
use super::public;

type SharedState = Arc<AppState>;

/// Always responds 200. A failed provider lookup shows up as
/// `success: false` in the body, never as an error status.
async fn calendar_handler(State(state): State<SharedState>) -> Json<public::CalendarEnvelope> {
    Json(state.calendar.today().await)
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(calendar_handler))
}
