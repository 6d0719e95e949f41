//! The fixed sequence of migration steps.

use crate::asset::{AssetRef, BANNER_DARK, BANNER_LIGHT, BLUESKY_LOGO};

pub const BLUESKY_APP: &str = "https://bsky.app";
pub const FOLLOWER_BRIDGE: &str = "https://chromewebstore.google.com/detail/sky-follower-bridge/behhbpbpmailcnfbjagknjngnfdojpko?hl=en";
pub const STARTER_PACKS: &str = "https://blueskydirectory.com/starter-packs/all";
pub const FAREWELL_COMPOSE: &str = "https://x.com/compose/post?text=🦋g";
pub const BLUEARK: &str = "https://blueark.app/en-us/";
pub const TWITTER_TO_BLUESKY: &str = "https://github.com/marcomaroni-github/twitter-to-bluesky";
pub const TWEET_DELETE: &str = "https://tweetdelete.net/";
pub const TWEETXER: &str = "https://github.com/lucahammer/tweetXer";

pub const DISPLAY_NAME_TEMPLATE: &str = "Your Name 🦋 @your.bluesky.handle";
pub const PROFILE_URL_TEMPLATE: &str = "https://bsky.app/profile/your.bluesky.handle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideStep {
    ImportFollowers,
    StarterPacks,
    DisplayName,
    Farewell,
    Banner,
    ImportPosts,
    DeletePosts,
    SocialLinks,
}

impl GuideStep {
    /// Document order.
    pub const ALL: [GuideStep; 8] = [
        GuideStep::ImportFollowers,
        GuideStep::StarterPacks,
        GuideStep::DisplayName,
        GuideStep::Farewell,
        GuideStep::Banner,
        GuideStep::ImportPosts,
        GuideStep::DeletePosts,
        GuideStep::SocialLinks,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GuideStep::ImportFollowers => "Import X Followers",
            GuideStep::StarterPacks => "Starter packs",
            GuideStep::DisplayName => "X Display Name",
            GuideStep::Farewell => "Say goodbye to X",
            GuideStep::Banner => "X Banner",
            GuideStep::ImportPosts => "Import Tweets",
            GuideStep::DeletePosts => "Delete Tweets",
            GuideStep::SocialLinks => "Update social links",
        }
    }

    /// Where the step title links to. Label-only steps have none.
    pub fn href(self) -> Option<&'static str> {
        match self {
            GuideStep::ImportFollowers => Some(FOLLOWER_BRIDGE),
            GuideStep::StarterPacks => Some(STARTER_PACKS),
            GuideStep::Farewell => Some(FAREWELL_COMPOSE),
            GuideStep::ImportPosts => Some(BLUEARK),
            GuideStep::DeletePosts => Some(TWEET_DELETE),
            GuideStep::DisplayName | GuideStep::Banner | GuideStep::SocialLinks => None,
        }
    }

    /// Steps that cannot be undone get a warning colour.
    pub fn is_destructive(self) -> bool {
        matches!(self, GuideStep::DeletePosts)
    }

    /// Stable identifier used as the list item's `id` and `data-step`.
    pub fn slug(self) -> &'static str {
        match self {
            GuideStep::ImportFollowers => "import-followers",
            GuideStep::StarterPacks => "starter-packs",
            GuideStep::DisplayName => "display-name",
            GuideStep::Farewell => "farewell",
            GuideStep::Banner => "banner",
            GuideStep::ImportPosts => "import-posts",
            GuideStep::DeletePosts => "delete-posts",
            GuideStep::SocialLinks => "social-links",
        }
    }

    /// Assets offered for download inside the step, at their natural size.
    pub fn downloadable_assets(self) -> Vec<AssetRef> {
        match self {
            GuideStep::Banner => vec![BANNER_LIGHT, BANNER_DARK],
            GuideStep::SocialLinks => vec![BLUESKY_LOGO],
            _ => Vec::new(),
        }
    }
}

/// Every asset the page offers for download, in document order.
pub fn downloadable_assets() -> Vec<AssetRef> {
    GuideStep::ALL
        .iter()
        .flat_map(|step| step.downloadable_assets())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_steps_in_guide_order() {
        let titles: Vec<_> = GuideStep::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            [
                "Import X Followers",
                "Starter packs",
                "X Display Name",
                "Say goodbye to X",
                "X Banner",
                "Import Tweets",
                "Delete Tweets",
                "Update social links",
            ]
        );
    }

    #[test]
    fn only_delete_is_destructive() {
        let destructive: Vec<_> = GuideStep::ALL
            .into_iter()
            .filter(|s| s.is_destructive())
            .collect();
        assert_eq!(destructive, [GuideStep::DeletePosts]);
    }

    #[test]
    fn label_only_steps_have_no_link() {
        assert_eq!(GuideStep::DisplayName.href(), None);
        assert_eq!(GuideStep::Banner.href(), None);
        assert_eq!(GuideStep::SocialLinks.href(), None);
        assert_eq!(GuideStep::StarterPacks.href(), Some(STARTER_PACKS));
    }

    #[test]
    fn downloads_are_banners_then_logo() {
        let paths: Vec<_> = downloadable_assets()
            .into_iter()
            .map(|a| a.path.into_owned())
            .collect();
        assert_eq!(paths, ["/banner.webp", "/banner-dark.webp", "/bluesky-logo.svg"]);
    }
}
