use dioxus::prelude::*;

const BLUESKY_PATH: &str = "m135.72 44.03c66.496 49.921 138.02 151.14 164.28 205.46 26.262-54.316 97.782-155.54 164.28-205.46 47.98-36.021 125.72-63.892 125.72 24.795 0 17.712-10.155 148.79-16.111 170.07-20.703 73.984-96.144 92.854-163.25 81.433 117.3 19.964 147.14 86.092 82.697 152.22-122.39 125.59-175.91-31.511-189.63-71.766-2.514-7.3797-3.6904-10.832-3.7077-7.8964-0.0174-2.9357-1.1937 0.51669-3.7077 7.8964-13.714 40.255-67.233 197.36-189.63 71.766-64.444-66.128-34.605-132.26 82.697-152.22-67.108 11.421-142.55-7.4491-163.25-81.433-5.9562-21.282-16.111-152.36-16.111-170.07 0-88.687 77.742-60.816 125.72-24.795z";

const GITHUB_PATH: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z";

const DOWNLOAD_PATH: &str = "M7.50005 1.04999C7.74858 1.04999 7.95005 1.25146 7.95005 1.49999V8.41359L10.1819 6.18179C10.3576 6.00605 10.6425 6.00605 10.8182 6.18179C10.994 6.35753 10.994 6.64245 10.8182 6.81819L7.81825 9.81819C7.64251 9.99392 7.35759 9.99392 7.18185 9.81819L4.18185 6.81819C4.00611 6.64245 4.00611 6.35753 4.18185 6.18179C4.35759 6.00605 4.64251 6.00605 4.81825 6.18179L7.05005 8.41359V1.49999C7.05005 1.25146 7.25152 1.04999 7.50005 1.04999ZM2.5 10C2.77614 10 3 10.2239 3 10.5V12C3 12.5539 3.44565 13 3.99635 13H11.0012C11.5529 13 12 12.5528 12 12V10.5C12 10.2239 12.2239 10 12.5 10C12.7761 10 13 10.2239 13 10.5V12C13 13.104 12.1062 14 11.0012 14H3.99635C2.89019 14 2 13.103 2 12V10.5C2 10.2239 2.22386 10 2.5 10Z";

pub const BLUESKY_BLUE: &str = "#1185fe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    #[default]
    Large,
    Small,
}

impl IconSize {
    pub fn px(self) -> u32 {
        match self {
            IconSize::Large => 48,
            IconSize::Small => 20,
        }
    }
}

/// The butterfly. Height follows the glyph's 600:530 box.
#[component]
pub fn BlueSkyLogo(
    #[props(default)] size: IconSize,
    #[props(into, default = BLUESKY_BLUE.to_string())] color: String,
) -> Element {
    let width = size.px();
    let height = width * 530 / 600;
    rsx! {
        svg {
            class: "icon icon-bluesky",
            width: "{width}",
            height: "{height}",
            view_box: "0 0 600 530",
            fill: "{color}",
            "aria-hidden": "true",
            path { d: BLUESKY_PATH }
        }
    }
}

#[component]
pub fn GithubLogo(
    #[props(default)] size: IconSize,
    #[props(into, default = "currentColor".to_string())] color: String,
) -> Element {
    let px = size.px();
    rsx! {
        svg {
            class: "icon icon-github",
            width: "{px}",
            height: "{px}",
            view_box: "0 0 16 16",
            fill: "{color}",
            "aria-hidden": "true",
            path { d: GITHUB_PATH }
        }
    }
}

#[component]
pub fn DownloadIcon(#[props(default = 15)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon icon-download",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 15 15",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: DOWNLOAD_PATH,
                fill: "currentColor",
                fill_rule: "evenodd",
                clip_rule: "evenodd",
            }
        }
    }
}
