//! Static data the page templates consume

pub mod config;
pub mod friends;

pub use config::{
    LicenseConfig, NavBarConfig, NavLink, ProfileConfig, ResolvedNavLink, SiteConfig,
    expressive_code_config, license_config, nav_bar_config, profile_config, site_config,
};
pub use friends::{Friend, friends, pinned_first};
