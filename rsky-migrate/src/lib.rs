//! Bluesky migration guide
//!
//! A single page walking through the move from X to Bluesky. The page is
//! static apart from two small controls: a tooltip used on the footer icons
//! and a thumbnail that downloads the asset it previews. Their state
//! machines live in [`tooltip`] and [`preview`]; the Dioxus components that
//! drive them are in [`components`].

pub mod asset;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod guide;
pub mod preview;
#[cfg(not(target_arch = "wasm32"))]
pub mod render;
pub mod tooltip;

pub use config::SiteConfig;
pub use error::{Error, Result};
