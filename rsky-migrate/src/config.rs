//! Site configuration
//!
//! Everything on the page is static; the only knobs are the metadata the
//! export writes into the document head and the presentation timings of the
//! tooltip and download overlay. Values are resolved from defaults, then an
//! optional JSON file, then `MIGRATE_*` environment variables.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::asset::SOCIAL_CARD_IMAGE;
use crate::error::{Error, Result};

pub const DEFAULT_SITE_URL: &str = "https://www.bluesky-migrate.com";
pub const DEFAULT_TITLE: &str = "Bluesky Migrate";
pub const DEFAULT_DESCRIPTION: &str = "This page serves a simple guide on how to migrate to Bluesky from X. All steps are optional, but you should really do the first two.";
pub const DEFAULT_AUTHOR: &str = "Andrew Lisowski";
pub const DEFAULT_CREATOR_PROFILE: &str = "https://bsky.app/profile/hipstersmoothie.com";
pub const DEFAULT_SOURCE_REPO: &str = "https://github.com/hipstersmoothie/bluesky-migrate";
pub const DEFAULT_ANALYTICS_DOMAIN: &str = "bluesky-migrate.com";
pub const DEFAULT_ANALYTICS_SRC: &str =
    "https://plausible.io/js/script.file-downloads.outbound-links.js";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin, used for absolute URLs in the social card
    pub site_url: String,
    pub title: String,
    pub description: String,
    /// Name shown in the footer copyright line
    pub author: String,
    pub creator_profile: String,
    pub source_repo: String,
    pub analytics: AnalyticsConfig,
    pub ui: UiTimings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            creator_profile: DEFAULT_CREATOR_PROFILE.to_string(),
            source_repo: DEFAULT_SOURCE_REPO.to_string(),
            analytics: AnalyticsConfig::default(),
            ui: UiTimings::default(),
        }
    }
}

/// Third party analytics script declared once in the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub domain: String,
    pub script_src: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            domain: DEFAULT_ANALYTICS_DOMAIN.to_string(),
            script_src: DEFAULT_ANALYTICS_SRC.to_string(),
        }
    }
}

/// Presentation constants for the two interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiTimings {
    pub tooltip_show_delay_ms: u64,
    pub tooltip_hide_delay_ms: u64,
    pub overlay_transition_ms: u64,
    pub overlay_hover_opacity: f32,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            tooltip_show_delay_ms: 700,
            tooltip_hide_delay_ms: 100,
            overlay_transition_ms: 150,
            overlay_hover_opacity: 0.8,
        }
    }
}

impl UiTimings {
    pub fn tooltip(&self) -> TooltipConfig {
        TooltipConfig {
            show_delay: Duration::from_millis(self.tooltip_show_delay_ms),
            hide_delay: Duration::from_millis(self.tooltip_hide_delay_ms),
        }
    }

    pub fn overlay(&self) -> OverlayConfig {
        OverlayConfig {
            transition: Duration::from_millis(self.overlay_transition_ms),
            hover_opacity: self.overlay_hover_opacity.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Pointer must rest on the trigger this long before the content shows
    pub show_delay: Duration,
    /// Grace period after the pointer leaves, so it can travel onto the content
    pub hide_delay: Duration,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        UiTimings::default().tooltip()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    pub transition: Duration,
    pub hover_opacity: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        UiTimings::default().overlay()
    }
}

impl SiteConfig {
    /// Load from a JSON file; missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve the full stack: defaults, then `path` if given, then the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// Apply `MIGRATE_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Pretty JSON in the same shape `from_json_file` reads.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply `MIGRATE_*` overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MIGRATE_SITE_URL") {
            self.site_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("MIGRATE_TITLE") {
            self.title = v;
        }
        if let Some(v) = lookup("MIGRATE_DESCRIPTION") {
            self.description = v;
        }
        if let Some(v) = lookup("MIGRATE_AUTHOR") {
            self.author = v;
        }
        if let Some(v) = lookup("MIGRATE_CREATOR_PROFILE") {
            self.creator_profile = v;
        }
        if let Some(v) = lookup("MIGRATE_SOURCE_REPO") {
            self.source_repo = v;
        }
        if let Some(v) = lookup("MIGRATE_ANALYTICS_ENABLED") {
            self.analytics.enabled = parse_flag("MIGRATE_ANALYTICS_ENABLED", &v)?;
        }
        if let Some(v) = lookup("MIGRATE_ANALYTICS_DOMAIN") {
            self.analytics.domain = v;
        }
        if let Some(v) = lookup("MIGRATE_ANALYTICS_SRC") {
            self.analytics.script_src = v;
        }
        if let Some(v) = lookup("MIGRATE_TOOLTIP_SHOW_DELAY_MS") {
            self.ui.tooltip_show_delay_ms = parse_value("MIGRATE_TOOLTIP_SHOW_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("MIGRATE_TOOLTIP_HIDE_DELAY_MS") {
            self.ui.tooltip_hide_delay_ms = parse_value("MIGRATE_TOOLTIP_HIDE_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("MIGRATE_OVERLAY_TRANSITION_MS") {
            self.ui.overlay_transition_ms = parse_value("MIGRATE_OVERLAY_TRANSITION_MS", &v)?;
        }
        if let Some(v) = lookup("MIGRATE_OVERLAY_HOVER_OPACITY") {
            let opacity: f32 = parse_value("MIGRATE_OVERLAY_HOVER_OPACITY", &v)?;
            if !(0.0..=1.0).contains(&opacity) {
                return Err(Error::InvalidConfig {
                    key: "MIGRATE_OVERLAY_HOVER_OPACITY".to_string(),
                    value: v,
                });
            }
            self.ui.overlay_hover_opacity = opacity;
        }
        Ok(self)
    }

    /// Absolute URL of the social card image.
    pub fn card_image_url(&self) -> String {
        format!(
            "{}{}",
            self.site_url.trim_end_matches('/'),
            SOCIAL_CARD_IMAGE
        )
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
