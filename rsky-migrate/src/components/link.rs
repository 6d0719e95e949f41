use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkVariant {
    #[default]
    Default,
    Destructive,
}

impl LinkVariant {
    fn class(self) -> &'static str {
        match self {
            LinkVariant::Default => "link",
            LinkVariant::Destructive => "link link-destructive",
        }
    }
}

/// Inline text link. External links open in a new, isolated browsing context.
#[component]
pub fn GuideLink(
    #[props(into)] href: String,
    #[props(default)] variant: LinkVariant,
    #[props(default = true)] external: bool,
    children: Element,
) -> Element {
    let class = variant.class();
    if external {
        rsx! {
            a {
                class,
                href: "{href}",
                target: "_blank",
                rel: "noopener",
                {children}
            }
        }
    } else {
        rsx! {
            a { class, href: "{href}", {children} }
        }
    }
}
