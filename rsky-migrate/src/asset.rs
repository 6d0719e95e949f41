//! Static asset references shown by the download previews.
//!
//! An [`AssetRef`] pairs a path served next to the page with the alt text
//! and the box the browser should reserve for it. The dimensions are only
//! ever used for layout and are never checked against the real file.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Light theme banner, natural size.
pub const BANNER_LIGHT: AssetRef =
    AssetRef::from_static("/banner.webp", "Bluesky Banner", 1090, 567);

/// Dark theme banner, natural size.
pub const BANNER_DARK: AssetRef =
    AssetRef::from_static("/banner-dark.webp", "Dark Bluesky Banner", 1090, 567);

pub const BLUESKY_LOGO: AssetRef =
    AssetRef::from_static("/bluesky-logo.svg", "Bluesky logo", 32, 32);

/// Image used by the social preview card. Not shown on the page itself.
pub const SOCIAL_CARD_IMAGE: &str = "/banner-dark.png";

/// Banner previews reserve a fifth of the natural size.
pub const BANNER_THUMBNAIL_DIVISOR: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub path: Cow<'static, str>,
    pub alt: Cow<'static, str>,
    pub width: u32,
    pub height: u32,
}

impl AssetRef {
    /// Compile-time constructor. Invalid dimensions or a relative path abort the build.
    pub const fn from_static(
        path: &'static str,
        alt: &'static str,
        width: u32,
        height: u32,
    ) -> Self {
        assert!(width > 0 && height > 0, "asset dimensions must be positive");
        assert!(
            !path.is_empty() && path.as_bytes()[0] == b'/',
            "asset path must be absolute"
        );
        Self {
            path: Cow::Borrowed(path),
            alt: Cow::Borrowed(alt),
            width,
            height,
        }
    }

    pub fn new(
        path: impl Into<Cow<'static, str>>,
        alt: impl Into<Cow<'static, str>>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(Error::InvalidAssetPath(path.into_owned()));
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                path: path.into_owned(),
                width,
                height,
            });
        }
        Ok(Self {
            path,
            alt: alt.into(),
            width,
            height,
        })
    }

    /// Same asset with its reserved box divided by `divisor`, so a thumbnail
    /// can be shown without shipping a separately scaled file.
    pub fn scaled_down(&self, divisor: u32) -> Self {
        let divisor = divisor.max(1);
        Self {
            width: (self.width / divisor).max(1),
            height: (self.height / divisor).max(1),
            ..self.clone()
        }
    }

    /// Last path segment; used as the suggested name of the saved file.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn layout_box(&self) -> LayoutBox {
        LayoutBox {
            width: self.width,
            height: self.height,
        }
    }

    pub fn download_target(&self) -> DownloadTarget<'_> {
        DownloadTarget {
            href: &self.path,
            disposition: Disposition::Download {
                file_name: self.file_name(),
            },
        }
    }
}

/// Space reserved for an image before it has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBox {
    pub width: u32,
    pub height: u32,
}

impl LayoutBox {
    /// Ratio reduced to lowest terms.
    pub fn aspect_ratio(&self) -> (u32, u32) {
        let divisor = gcd(self.width, self.height).max(1);
        (self.width / divisor, self.height / divisor)
    }

    pub fn style(&self) -> String {
        let (w, h) = self.aspect_ratio();
        format!(
            "width: {}px; height: {}px; aspect-ratio: {w} / {h};",
            self.width, self.height
        )
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// How activating a link is handled by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// Save the resource to disk instead of opening it.
    Download { file_name: &'a str },
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadTarget<'a> {
    pub href: &'a str,
    pub disposition: Disposition<'a>,
}

impl DownloadTarget<'_> {
    pub fn is_forced_download(&self) -> bool {
        matches!(self.disposition, Disposition::Download { .. })
    }
}
