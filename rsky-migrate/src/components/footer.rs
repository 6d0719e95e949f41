use dioxus::prelude::*;

use crate::components::icons::{BlueSkyLogo, GithubLogo, IconSize};
use crate::components::tooltip::Tooltip;
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterIcon {
    Bluesky,
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub href: String,
    pub label: &'static str,
    pub icon: FooterIcon,
}

pub const CREATOR_LABEL: &str = "View creator on BlueSky";
pub const SOURCE_LABEL: &str = "View source on Github";

pub fn footer_links(config: &SiteConfig) -> Vec<FooterLink> {
    vec![
        FooterLink {
            href: config.creator_profile.clone(),
            label: CREATOR_LABEL,
            icon: FooterIcon::Bluesky,
        },
        FooterLink {
            href: config.source_repo.clone(),
            label: SOURCE_LABEL,
            icon: FooterIcon::Github,
        },
    ]
}

/// Icon link annotated with a tooltip carrying its label.
#[component]
pub fn FooterIconLink(link: FooterLink, #[props(default)] default_open: bool) -> Element {
    let icon = match link.icon {
        FooterIcon::Bluesky => rsx! { BlueSkyLogo { size: IconSize::Small, color: "currentColor" } },
        FooterIcon::Github => rsx! { GithubLogo { size: IconSize::Small, color: "currentColor" } },
    };
    rsx! {
        Tooltip {
            default_open,
            trigger: rsx! {
                a {
                    class: "footer-icon",
                    href: "{link.href}",
                    target: "_blank",
                    rel: "noopener",
                    "aria-label": link.label,
                    {icon}
                }
            },
            content: rsx! {
                p { "{link.label}" }
            },
        }
    }
}

#[component]
pub fn Footer(year: i32, #[props(into)] author: String, links: Vec<FooterLink>) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-links",
                for link in links {
                    FooterIconLink { key: "{link.href}", link: link.clone() }
                }
            }
            div { class: "copyright", "Copyright © {year} {author}" }
        }
    }
}
