#[cfg(test)]
mod page_tests {
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::{Mutation, Mutations};
    use dioxus::document::{Document, Eval, NoOpDocument};
    use dioxus::html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
    use dioxus::prelude::*;
    use rsky_migrate::asset::{BANNER_DARK, BANNER_LIGHT, BANNER_THUMBNAIL_DIVISOR};
    use rsky_migrate::clock::{FixedClock, SharedClock};
    use rsky_migrate::components::{
        footer_links, DocumentHead, DownloadPreview, FooterIconLink, GuideLink, LinkVariant,
        Tooltip,
    };
    use rsky_migrate::guide::GuideStep;
    use rsky_migrate::render::{render_body, render_head};
    use rsky_migrate::config::{UiTimings, DEFAULT_ANALYTICS_SRC};
    use rsky_migrate::SiteConfig;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    // Document that records what components send to the head
    #[derive(Default)]
    struct HeadRecorder {
        title: RefCell<Option<String>>,
        elements: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl Document for HeadRecorder {
        fn eval(&self, js: String) -> Eval {
            NoOpDocument.eval(js)
        }

        fn set_title(&self, title: String) {
            *self.title.borrow_mut() = Some(title);
        }

        fn create_head_element(
            &self,
            name: &str,
            attributes: &[(&str, String)],
            _contents: Option<String>,
        ) {
            let attributes = attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect();
            self.elements.borrow_mut().push((name.to_string(), attributes));
        }
    }

    fn render_page(year: i32) -> String {
        let clock = SharedClock::new(FixedClock::in_year(year).unwrap());
        render_body(&SiteConfig::default(), clock)
    }

    #[test]
    fn test_page_lists_eight_steps_in_order() {
        let html = render_page(2024);
        assert_eq!(html.matches("data-step=\"").count(), 8);

        let mut last = 0;
        for step in GuideStep::ALL {
            let marker = format!("data-step=\"{}\"", step.slug());
            let at = html
                .find(&marker)
                .unwrap_or_else(|| panic!("missing step {}", step.slug()));
            assert!(at >= last, "{} out of order", step.slug());
            assert!(html[at..].contains(step.title()));
            last = at;
        }
    }

    #[test]
    fn test_step_links_open_isolated() {
        let html = render_page(2024);
        let follower = html.find("sky-follower-bridge").unwrap();
        let anchor = &html[html[..follower].rfind("<a").unwrap()..];
        let anchor = &anchor[..anchor.find('>').unwrap()];
        assert!(anchor.contains("target=\"_blank\""));
        assert!(anchor.contains("rel=\"noopener\""));
        assert!(html.contains("link link-destructive"));
    }

    #[test]
    fn test_light_banner_downloads_from_banner_webp() {
        fn app() -> Element {
            rsx! { DownloadPreview { asset: BANNER_LIGHT.scaled_down(BANNER_THUMBNAIL_DIVISOR) } }
        }
        let html = render(app);
        assert!(html.contains("href=\"/banner.webp\""));
        assert!(html.contains("download=\"banner.webp\""));
        assert!(html.contains("alt=\"Bluesky Banner\""));
    }

    #[test]
    fn test_dark_banner_downloads_from_banner_dark_webp() {
        fn app() -> Element {
            rsx! { DownloadPreview { asset: BANNER_DARK.scaled_down(BANNER_THUMBNAIL_DIVISOR) } }
        }
        let html = render(app);
        assert!(html.contains("href=\"/banner-dark.webp\""));
        assert!(html.contains("download=\"banner-dark.webp\""));
    }

    #[test]
    fn test_preview_reserves_box_and_hides_overlay() {
        fn app() -> Element {
            rsx! { DownloadPreview { asset: BANNER_LIGHT.scaled_down(BANNER_THUMBNAIL_DIVISOR) } }
        }
        let html = render(app);
        assert!(html.contains("width=\"218\""));
        assert!(html.contains("height=\"113\""));
        assert!(html.contains("aspect-ratio: 218 / 113;"));
        assert!(html.contains("opacity: 0;"));
    }

    #[test]
    fn test_page_embeds_both_banners_and_logo() {
        let html = render_page(2024);
        assert!(html.contains("href=\"/banner.webp\""));
        assert!(html.contains("href=\"/banner-dark.webp\""));
        assert!(html.contains("href=\"/bluesky-logo.svg\""));
        assert!(html.contains("preview preview-padded"));
    }

    #[test]
    fn test_footer_tooltip_shows_creator_label() {
        fn app() -> Element {
            let links = footer_links(&SiteConfig::default());
            rsx! { FooterIconLink { link: links[0].clone(), default_open: true } }
        }
        let html = render(app);
        let tooltip = html.find("role=\"tooltip\"").expect("tooltip not shown");
        assert!(html[tooltip..].contains("<p>View creator on BlueSky</p>"));
        assert!(html.contains("href=\"https://bsky.app/profile/hipstersmoothie.com\""));
    }

    #[test]
    fn test_tooltips_start_hidden() {
        let html = render_page(2024);
        assert!(!html.contains("role=\"tooltip\""));
        assert!(html.contains("aria-label=\"View creator on BlueSky\""));
        assert!(html.contains("aria-label=\"View source on Github\""));
    }

    #[test]
    fn test_tooltip_slots_are_composed() {
        fn app() -> Element {
            rsx! {
                Tooltip {
                    default_open: true,
                    trigger: rsx! { button { "trigger" } },
                    content: rsx! { strong { "details" } },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<button>trigger</button>"));
        assert!(html.contains("<strong>details</strong>"));
        assert!(html.contains("tooltip-content tooltip-top"));
    }

    #[test]
    fn test_empty_tooltip_renders_no_bubble() {
        fn app() -> Element {
            rsx! {
                Tooltip {
                    default_open: true,
                    trigger: rsx! { button { "trigger" } },
                    content: rsx! {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<button>trigger</button>"));
        assert!(!html.contains("role=\"tooltip\""));
        assert!(!html.contains("aria-describedby"));
    }

    #[tokio::test]
    async fn test_hovering_footer_icon_reveals_label() {
        fn app() -> Element {
            use_context_provider(|| UiTimings {
                tooltip_show_delay_ms: 20,
                ..UiTimings::default()
            });
            let links = footer_links(&SiteConfig::default());
            rsx! { FooterIconLink { link: links[0].clone() } }
        }

        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        assert!(!dioxus_ssr::render(&dom).contains("role=\"tooltip\""));

        let trigger = mutations
            .edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "mouseenter" => Some(*id),
                _ => None,
            })
            .expect("trigger listens for mouseenter");
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            false,
        );
        dom.runtime().handle_event("mouseenter", event, trigger);
        dom.process_events();
        dom.render_immediate_to_vec();
        // the show delay is still running
        assert!(!dioxus_ssr::render(&dom).contains("role=\"tooltip\""));

        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("show timer never fired");
        dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        let tooltip = html.find("role=\"tooltip\"").expect("tooltip not shown after hover");
        assert!(html[tooltip..].contains("<p>View creator on BlueSky</p>"));
        assert!(html.contains("aria-describedby=\"tooltip-"));
    }

    #[test]
    fn test_footer_year_comes_from_clock() {
        let html = render_page(2031);
        assert!(html.contains("Copyright © 2031 Andrew Lisowski"));
    }

    #[test]
    fn test_footer_year_defaults_to_current_year() {
        use chrono::{Datelike, Local};
        let before = Local::now().year();
        let html = render_body(&SiteConfig::default(), SharedClock::system());
        let after = Local::now().year();
        assert!(
            html.contains(&format!("Copyright © {} ", before))
                || html.contains(&format!("Copyright © {} ", after))
        );
    }

    #[test]
    fn test_internal_link_has_no_target() {
        fn app() -> Element {
            rsx! {
                GuideLink { href: "https://bsky.app", external: false, "Bluesky" }
                GuideLink { href: "https://example.test", variant: LinkVariant::Destructive, "Gone" }
            }
        }
        let html = render(app);
        let internal = &html[..html.find("Bluesky").unwrap()];
        assert!(!internal.contains("target="));
        assert!(html.contains("class=\"link link-destructive\""));
    }

    #[test]
    fn test_head_carries_card_and_analytics() {
        let html = render_head(&SiteConfig::default());
        assert!(html.contains("<title>Bluesky Migrate</title>"));
        assert!(html.contains("name=\"twitter:card\""));
        assert!(html.contains("content=\"summary_large_image\""));
        assert!(html.contains("content=\"https://www.bluesky-migrate.com/banner-dark.png\""));
        assert!(html.contains("data-domain=\"bluesky-migrate.com\""));
        assert!(html.contains(
            "src=\"https://plausible.io/js/script.file-downloads.outbound-links.js\""
        ));
        assert!(html.contains("defer"));
    }

    #[test]
    fn test_head_without_analytics() {
        let mut config = SiteConfig::default();
        config.analytics.enabled = false;
        let html = render_head(&config);
        assert!(!html.contains("plausible.io"));
        assert!(html.contains("twitter:title"));
    }

    #[test]
    fn test_web_head_is_sent_to_the_document() {
        fn app() -> Element {
            rsx! { DocumentHead { config: SiteConfig::default() } }
        }
        let recorder = Rc::new(HeadRecorder::default());
        let mut dom = VirtualDom::new(app).with_root_context(recorder.clone() as Rc<dyn Document>);
        dom.rebuild_in_place();

        let body = dioxus_ssr::render(&dom);
        assert!(!body.contains("<meta"));
        assert!(!body.contains("<script"));
        assert_eq!(recorder.title.borrow().as_deref(), Some("Bluesky Migrate"));

        let elements = recorder.elements.borrow();
        let has_meta = |name: &str| {
            elements.iter().any(|(tag, attrs)| {
                tag == "meta" && attrs.iter().any(|(key, value)| key == "name" && value == name)
            })
        };
        for name in [
            "description",
            "twitter:card",
            "twitter:title",
            "twitter:description",
            "twitter:image",
        ] {
            assert!(has_meta(name), "missing meta {}", name);
        }

        let (_, script) = elements
            .iter()
            .find(|(tag, _)| tag == "script")
            .expect("analytics script not sent");
        let attr = |key: &str| {
            script
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(attr("data-domain"), Some("bluesky-migrate.com"));
        assert_eq!(attr("src"), Some(DEFAULT_ANALYTICS_SRC));
        assert_eq!(attr("defer"), Some("true"));
    }

    #[test]
    fn test_web_head_skips_disabled_analytics() {
        fn app() -> Element {
            let mut config = SiteConfig::default();
            config.analytics.enabled = false;
            rsx! { DocumentHead { config } }
        }
        let recorder = Rc::new(HeadRecorder::default());
        let mut dom = VirtualDom::new(app).with_root_context(recorder.clone() as Rc<dyn Document>);
        dom.rebuild_in_place();

        let elements = recorder.elements.borrow();
        assert!(elements.iter().all(|(tag, _)| tag != "script"));
        assert!(elements.iter().any(|(tag, _)| tag == "meta"));
    }
}
