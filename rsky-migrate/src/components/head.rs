use dioxus::prelude::*;

use crate::config::{AnalyticsConfig, SiteConfig};

/// Twitter card metadata for link unfurls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl SocialCard {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            card: "summary_large_image",
            title: config.title.clone(),
            description: config.description.clone(),
            image: config.card_image_url(),
        }
    }

    pub fn meta_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("twitter:card", self.card.to_string()),
            ("twitter:title", self.title.clone()),
            ("twitter:description", self.description.clone()),
            ("twitter:image", self.image.clone()),
        ]
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeadTagsProps {
    pub config: SiteConfig,
}

/// Everything that belongs in `<head>` of the exported document.
#[allow(non_snake_case)]
pub fn HeadTags(props: HeadTagsProps) -> Element {
    let config = props.config;
    let card = SocialCard::from_config(&config);
    rsx! {
        meta { charset: "utf-8" }
        meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        title { "{config.title}" }
        meta { name: "description", content: "{config.description}" }
        for (name, content) in card.meta_tags() {
            meta { name: name, content: content }
        }
        AnalyticsScript { analytics: config.analytics.clone() }
    }
}

/// Head tags for the client-side app. The renderer's document hoists each
/// of these into `<head>`.
#[component]
pub fn DocumentHead(config: SiteConfig) -> Element {
    let card = SocialCard::from_config(&config);
    let analytics = config.analytics.clone();

    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: config.description.clone() }
        for (name, content) in card.meta_tags() {
            document::Meta { name, content }
        }
        if analytics.enabled {
            document::Script {
                src: analytics.script_src.clone(),
                defer: true,
                "data-domain": analytics.domain.clone(),
            }
        }
    }
}

/// Deferred analytics tag. Download and outbound link tracking is handled
/// by the script itself.
#[component]
pub fn AnalyticsScript(analytics: AnalyticsConfig) -> Element {
    if !analytics.enabled {
        return rsx! {};
    }
    rsx! {
        script {
            defer: true,
            "data-domain": "{analytics.domain}",
            src: "{analytics.script_src}",
        }
    }
}
