pub mod footer;
pub mod head;
pub mod icons;
pub mod link;
pub mod page;
pub mod preview;
pub mod tooltip;

pub use footer::{footer_links, Footer, FooterIcon, FooterIconLink, FooterLink};
pub use head::{AnalyticsScript, DocumentHead, HeadTags, HeadTagsProps, SocialCard};
pub use icons::{BlueSkyLogo, DownloadIcon, GithubLogo, IconSize};
pub use link::{GuideLink, LinkVariant};
pub use page::{App, GuideRoot, GuideRootProps, Home};
pub use preview::DownloadPreview;
pub use tooltip::{Side, Tooltip};
