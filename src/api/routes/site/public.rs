//! Public types for the site API
use serde::Serialize;

use crate::site::{LicenseConfig, ProfileConfig, ResolvedNavLink, SiteConfig};
use crate::site::config::ExpressiveCodeConfig;

pub use crate::site::Friend;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub site: SiteConfig,
    pub nav_bar: Vec<ResolvedNavLink>,
    pub profile: ProfileConfig,
    pub license: LicenseConfig,
    pub expressive_code: ExpressiveCodeConfig,
}

#[derive(Serialize)]
pub struct FriendsResponse {
    pub friends: Vec<Friend>,
}
