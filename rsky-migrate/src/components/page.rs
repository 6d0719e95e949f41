use dioxus::prelude::*;

use crate::asset::{BANNER_DARK, BANNER_LIGHT, BANNER_THUMBNAIL_DIVISOR, BLUESKY_LOGO};
use crate::clock::SharedClock;
use crate::components::footer::{footer_links, Footer};
use crate::components::head::DocumentHead;
use crate::components::icons::BlueSkyLogo;
use crate::components::link::{GuideLink, LinkVariant};
use crate::components::preview::DownloadPreview;
use crate::config::SiteConfig;
use crate::guide::{
    GuideStep, BLUESKY_APP, DISPLAY_NAME_TEMPLATE, PROFILE_URL_TEMPLATE, TWEETXER,
    TWITTER_TO_BLUESKY,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Web entry point.
#[component]
pub fn App() -> Element {
    let config = use_hook(SiteConfig::default);
    let clock = use_hook(SharedClock::system);

    rsx! {
        DocumentHead { config: config.clone() }
        link { rel: "stylesheet", href: MAIN_CSS },
        GuideRoot { config, clock }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct GuideRootProps {
    pub config: SiteConfig,
    pub clock: SharedClock,
}

/// Provides the clock and timings to the tree, then renders the page.
#[allow(non_snake_case)]
pub fn GuideRoot(props: GuideRootProps) -> Element {
    let GuideRootProps { config, clock } = props;
    use_context_provider(|| clock);
    use_context_provider(|| config.ui);
    rsx! {
        Home { config }
    }
}

#[component]
pub fn Home(config: SiteConfig) -> Element {
    let year = try_use_context::<SharedClock>().unwrap_or_default().year();
    let links = footer_links(&config);

    rsx! {
        div { class: "page",
            main { class: "guide",
                header { class: "guide-header",
                    BlueSkyLogo {}
                    h1 { "Bluesky Migration" }
                }
                div { class: "guide-body",
                    p { class: "intro",
                        "This page serves a simple guide on how to migrate to "
                        GuideLink { href: BLUESKY_APP, external: false, "Bluesky" }
                        " from X. All steps are optional, but you should really do the first two."
                    }
                    ol { class: "steps",
                        for step in GuideStep::ALL {
                            StepItem { key: "{step.slug()}", step }
                        }
                    }
                }
            }
            Footer { year, author: config.author.clone(), links }
        }
    }
}

#[component]
fn StepItem(step: GuideStep) -> Element {
    let variant = if step.is_destructive() {
        LinkVariant::Destructive
    } else {
        LinkVariant::Default
    };
    let heading = match step.href() {
        Some(href) => rsx! {
            GuideLink { href, variant, "{step.title()}" }
        },
        None => rsx! {
            span { class: "step-label", "{step.title()}" }
        },
    };

    rsx! {
        li { id: step.slug(), class: "step", "data-step": step.slug(),
            {heading}
            " - "
            {step_body(step)}
        }
    }
}

fn step_body(step: GuideStep) -> Element {
    match step {
        GuideStep::ImportFollowers => rsx! {
            "To start you can check if anyone you follow on X is on Bluesky"
        },
        GuideStep::StarterPacks => rsx! {
            "Lists of users that help you mass follow members of a community."
        },
        GuideStep::DisplayName => rsx! {
            "Change your display name on X (not your handle) to:"
            div { class: "callout callout-centered", "{DISPLAY_NAME_TEMPLATE}" }
        },
        GuideStep::Farewell => rsx! {
            "Post a goodbye with a 🦋"
        },
        GuideStep::Banner => rsx! {
            "Change your banner to one of the following images:"
            div { class: "banner-row",
                DownloadPreview { asset: BANNER_LIGHT.scaled_down(BANNER_THUMBNAIL_DIVISOR) }
                DownloadPreview { asset: BANNER_DARK.scaled_down(BANNER_THUMBNAIL_DIVISOR) }
            }
        },
        GuideStep::ImportPosts => rsx! {
            "Bring all your tweets along with you. Developers can use "
            GuideLink { href: TWITTER_TO_BLUESKY, "this" }
            "."
        },
        GuideStep::DeletePosts => rsx! {
            "(Very optional) A paid service, but you can use "
            GuideLink { href: TWEETXER, "this project" }
            " if you are technical. This will mess up any embedded tweets throughout the internet."
        },
        GuideStep::SocialLinks => rsx! {
            "Replace X with Bluesky. Make this change across LinkedIn, GitHub, Medium, personal website, and other platforms."
            div { class: "social-row",
                DownloadPreview { asset: BLUESKY_LOGO, padded: true }
                div { class: "callout", "{PROFILE_URL_TEMPLATE}" }
            }
        },
    }
}
