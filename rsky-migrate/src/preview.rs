//! Hover affordance of the download preview.
//!
//! The overlay is a pure function of whether the pointer is inside the
//! control. Nothing toggles styles directly.

use std::time::Duration;

use crate::config::OverlayConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub opacity: f32,
    pub transition: Duration,
}

impl Overlay {
    pub fn for_pointer(inside: bool, config: &OverlayConfig) -> Self {
        Self {
            opacity: if inside { config.hover_opacity } else { 0.0 },
            transition: config.transition,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transition: opacity {}ms ease-in-out;",
            self.opacity,
            self.transition.as_millis()
        )
    }
}
