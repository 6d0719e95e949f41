use dioxus::prelude::*;

use crate::asset::{AssetRef, Disposition};
use crate::components::icons::DownloadIcon;
use crate::config::UiTimings;
use crate::preview::Overlay;

/// Thumbnail that saves `asset` to disk when clicked.
///
/// The image box is reserved from the asset's declared dimensions. A missing
/// file shows up as the browser's broken image.
#[component]
pub fn DownloadPreview(asset: AssetRef, #[props(default)] padded: bool) -> Element {
    let timings = try_use_context::<UiTimings>().unwrap_or_default();
    let mut hovered = use_signal(|| false);
    let overlay = Overlay::for_pointer(hovered(), &timings.overlay());

    let target = asset.download_target();
    let href = target.href.to_string();
    let file_name = match target.disposition {
        Disposition::Download { file_name } => file_name.to_string(),
        Disposition::Navigate => String::new(),
    };
    let layout = asset.layout_box();
    let class = if padded {
        "preview preview-padded"
    } else {
        "preview"
    };
    let logged_href = href.clone();

    rsx! {
        a {
            class,
            href: "{href}",
            download: "{file_name}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| tracing::debug!(href = %logged_href, "asset download requested"),
            img {
                src: "{href}",
                alt: "{asset.alt}",
                width: "{layout.width}",
                height: "{layout.height}",
                style: layout.style(),
                loading: "lazy",
            }
            div {
                class: "preview-overlay",
                style: overlay.style(),
                "aria-hidden": "true",
                DownloadIcon { size: 24 }
            }
        }
    }
}
