//! API routes module

pub mod calendar;
pub mod site;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Calendar routes
        .nest("/calendar", calendar::router())
        // Site config and friend links
        .merge(site::router())
}
