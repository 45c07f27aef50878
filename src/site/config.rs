//! Site metadata, navigation, profile and license settings for the blog

use anyhow::{Result, ensure};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    pub lang: String,
    pub theme_color: ThemeColor,
    pub banner: Banner,
    pub toc: Toc,
    pub favicon: Vec<Favicon>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ThemeColor {
    /// 0 to 360
    pub hue: u16,
    /// Hides the theme color picker for visitors
    pub fixed: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct Banner {
    pub enable: bool,
    pub src: String,
    pub position: BannerPosition,
    pub credit: BannerCredit,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    Top,
    Center,
    Bottom,
}

#[derive(Serialize, Debug, Clone)]
pub struct BannerCredit {
    pub enable: bool,
    pub text: String,
    pub url: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Toc {
    pub enable: bool,
    /// Deepest heading level shown, 1 to 3
    pub depth: u8,
}

#[derive(Serialize, Debug, Clone)]
pub struct Favicon {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.theme_color.hue <= 360,
            "Theme hue must be between 0 and 360, got {}",
            self.theme_color.hue
        );
        ensure!(
            (1..=3).contains(&self.toc.depth),
            "Table of contents depth must be between 1 and 3, got {}",
            self.toc.depth
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPreset {
    Home,
    Archive,
    About,
}

#[derive(Debug, Clone)]
pub enum NavLink {
    Preset(LinkPreset),
    Custom {
        name: String,
        url: String,
        external: bool,
    },
}

/// A nav link as the page templates consume it
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNavLink {
    pub name: String,
    pub url: String,
    pub external: bool,
}

impl NavLink {
    pub fn resolve(&self) -> ResolvedNavLink {
        match self {
            NavLink::Preset(preset) => {
                let (name, url) = match preset {
                    LinkPreset::Home => ("Home", "/"),
                    LinkPreset::Archive => ("Archive", "/archive/"),
                    LinkPreset::About => ("About", "/about/"),
                };
                ResolvedNavLink {
                    name: name.to_string(),
                    url: url.to_string(),
                    external: false,
                }
            }
            NavLink::Custom {
                name,
                url,
                external,
            } => ResolvedNavLink {
                name: name.clone(),
                url: url.clone(),
                external: *external,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavBarConfig {
    pub links: Vec<NavLink>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProfileConfig {
    pub avatar: String,
    pub name: String,
    pub bio: String,
    pub links: Vec<ProfileLink>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProfileLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct LicenseConfig {
    pub enable: bool,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ExpressiveCodeConfig {
    pub theme: String,
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        title: "xhc861's Blog".to_string(),
        subtitle: "xhc861的安全屋".to_string(),
        lang: "zh_CN".to_string(),
        theme_color: ThemeColor {
            hue: 250,
            fixed: false,
        },
        banner: Banner {
            enable: true,
            src: "https://t.alcy.cc/fj".to_string(),
            position: BannerPosition::Center,
            credit: BannerCredit {
                enable: false,
                text: String::new(),
                url: String::new(),
            },
        },
        toc: Toc {
            enable: true,
            depth: 2,
        },
        favicon: vec![Favicon {
            src: "/favicon/fav00.ico".to_string(),
            theme: None,
            sizes: Some("32x32".to_string()),
        }],
    }
}

pub fn nav_bar_config() -> NavBarConfig {
    NavBarConfig {
        links: vec![
            NavLink::Preset(LinkPreset::Home),
            NavLink::Preset(LinkPreset::Archive),
            NavLink::Preset(LinkPreset::About),
            NavLink::Custom {
                name: "GitHub".to_string(),
                // Internal links leave out the base path
                url: "https://github.com/xhc861/myFuwari".to_string(),
                external: true,
            },
        ],
    }
}

pub fn profile_config() -> ProfileConfig {
    let link = |name: &str, icon: &str, url: &str| ProfileLink {
        name: name.to_string(),
        icon: icon.to_string(),
        url: url.to_string(),
    };

    ProfileConfig {
        avatar: "assets/images/avatar.jpg".to_string(),
        name: "xhc861".to_string(),
        bio: "这就是xhc861的Blog，不定期发表内容，记得来看！".to_string(),
        links: vec![
            link("微信", "fa6-brands:weixin", "/webpage/wechat.html"),
            link(
                "Twitter(X)",
                "fa6-brands:square-x-twitter",
                "https://x.com/SiiWay_xhc861",
            ),
            link("Twitch", "fa6-brands:twitch", "https://www.twitch.tv/xhc861"),
            link("Telegram", "fa6-brands:telegram", "https://t.me/xhc9510"),
            link("Mail", "fa6-solid:envelope", "/webpage/mail.html"),
            link("GitHub", "fa6-brands:github", "https://github.com/xhc861"),
        ],
    }
}

pub fn license_config() -> LicenseConfig {
    LicenseConfig {
        enable: true,
        name: "CC BY-NC-SA 4.0".to_string(),
        url: "https://creativecommons.org/licenses/by-nc-sa/4.0/".to_string(),
    }
}

pub fn expressive_code_config() -> ExpressiveCodeConfig {
    // Only dark themes work with the current page styles
    ExpressiveCodeConfig {
        theme: "github-dark".to_string(),
    }
}
