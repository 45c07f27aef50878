//! Router for the site config and friend links API

use std::sync::Arc;

use axum::{Router, response::Json};

use crate::api::state::AppState;
use crate::site;
use super::public;

type SharedState = Arc<AppState>;

async fn site_handler() -> Result<Json<public::SiteResponse>, crate::api::public::ApiError> {
    let config = site::site_config();
    config.validate()?;

    let nav_bar = site::nav_bar_config()
        .links
        .iter()
        .map(site::NavLink::resolve)
        .collect();

    Ok(Json(public::SiteResponse {
        site: config,
        nav_bar,
        profile: site::profile_config(),
        license: site::license_config(),
        expressive_code: site::expressive_code_config(),
    }))
}

async fn friends_handler() -> Json<public::FriendsResponse> {
    Json(public::FriendsResponse {
        friends: site::pinned_first(site::friends()),
    })
}

/// Create the site router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/site", axum::routing::get(site_handler))
        .route("/friends", axum::routing::get(friends_handler))
}
