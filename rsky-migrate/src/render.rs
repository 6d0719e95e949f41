//! Static export
//!
//! Renders the page to a complete HTML document and lays it out next to the
//! public assets, so the site can be served from any static file host.

use std::fs;
use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::clock::SharedClock;
use crate::components::{GuideRoot, GuideRootProps, HeadTags, HeadTagsProps};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::guide;

pub const STYLESHEET: &str = include_str!("../assets/main.css");
pub const STYLESHEET_NAME: &str = "main.css";
pub const INDEX_NAME: &str = "index.html";

pub fn render_head(config: &SiteConfig) -> String {
    let mut dom = VirtualDom::new_with_props(
        HeadTags,
        HeadTagsProps {
            config: config.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_body(config: &SiteConfig, clock: SharedClock) -> String {
    let mut dom = VirtualDom::new_with_props(
        GuideRoot,
        GuideRootProps {
            config: config.clone(),
            clock,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_document(config: &SiteConfig, clock: SharedClock) -> String {
    let head = render_head(config);
    let body = render_body(config, clock);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}\n<link rel=\"stylesheet\" href=\"/{STYLESHEET_NAME}\">\n</head>\n<body class=\"antialiased\">\n<div id=\"main\">{body}</div>\n</body>\n</html>\n"
    )
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Copied verbatim into `out_dir` when present
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub files_written: Vec<PathBuf>,
    /// Downloadable assets the page links to but the export does not contain
    pub missing_assets: Vec<String>,
}

pub fn export_site(
    options: &ExportOptions,
    config: &SiteConfig,
    clock: SharedClock,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();
    fs::create_dir_all(&options.out_dir)?;

    if let Some(public_dir) = &options.public_dir {
        copy_dir(public_dir, &options.out_dir, &mut report.files_written)?;
    }

    let index = options.out_dir.join(INDEX_NAME);
    fs::write(&index, render_document(config, clock))?;
    report.files_written.push(index);

    let stylesheet = options.out_dir.join(STYLESHEET_NAME);
    fs::write(&stylesheet, STYLESHEET)?;
    report.files_written.push(stylesheet);

    // Missing downloads surface as broken images in the browser; just report them.
    for asset in guide::downloadable_assets() {
        let relative = asset.path.trim_start_matches('/');
        if !options.out_dir.join(relative).is_file() {
            warn!(path = %asset.path, "downloadable asset missing from export");
            report.missing_assets.push(asset.path.into_owned());
        }
    }

    info!(
        out_dir = %options.out_dir.display(),
        files = report.files_written.len(),
        missing = report.missing_assets.len(),
        "site exported"
    );
    Ok(report)
}

fn copy_dir(from: &Path, to: &Path, written: &mut Vec<PathBuf>) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let dest = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&source, &dest, written)?;
        } else {
            fs::copy(&source, &dest)?;
            debug!(file = %dest.display(), "copied public asset");
            written.push(dest);
        }
    }
    Ok(())
}
