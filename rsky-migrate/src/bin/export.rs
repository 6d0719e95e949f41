//! Renders the migration guide to `index.html` plus its static assets.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::{anyhow, Context, Result};
    use clap::Parser;
    use rsky_migrate::clock::{FixedClock, SharedClock};
    use rsky_migrate::render::{export_site, ExportOptions};
    use rsky_migrate::SiteConfig;
    use tracing::{debug, info, warn};
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    #[derive(Parser, Debug)]
    #[command(name = "migrate-export", version, about = "Render the Bluesky migration guide to static files")]
    struct Cli {
        /// Directory the site is written to
        #[arg(short, long, default_value = "dist")]
        out_dir: PathBuf,

        /// Static assets copied next to index.html
        #[arg(long, default_value = "public")]
        public_dir: PathBuf,

        /// JSON file with site configuration
        #[arg(short, long, env = "MIGRATE_CONFIG")]
        config: Option<PathBuf>,

        /// Dotenv file with MIGRATE_* overrides
        #[arg(long)]
        env_file: Option<String>,

        /// Render the footer for this year instead of the current one
        #[arg(long)]
        year: Option<i32>,

        /// Print the resolved configuration as JSON and exit
        #[arg(long)]
        print_config: bool,
    }

    pub fn run() -> Result<()> {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,rsky_migrate=debug")),
            )
            .init();

        let cli = Cli::parse();

        match &cli.env_file {
            Some(env_file) => {
                let path = shellexpand::full(env_file)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| env_file.clone());
                dotenv::from_path(&path)
                    .context(format!("Failed to load .env file from {}", path))?;
            }
            None => {
                dotenv::dotenv().ok();
            }
        }

        let config = SiteConfig::load(cli.config.as_deref()).context(match &cli.config {
            Some(path) => format!("Failed to load config from {} and environment", path.display()),
            None => "Invalid MIGRATE_* environment".to_string(),
        })?;
        if cli.print_config {
            println!("{}", config.to_json_pretty()?);
            return Ok(());
        }
        debug!(title = %config.title, analytics = config.analytics.enabled, "Resolved site config");

        let clock = match cli.year {
            Some(year) => SharedClock::new(
                FixedClock::in_year(year).ok_or_else(|| anyhow!("Year {} is out of range", year))?,
            ),
            None => SharedClock::system(),
        };

        let public_dir = if cli.public_dir.is_dir() {
            Some(cli.public_dir.clone())
        } else {
            warn!(dir = %cli.public_dir.display(), "public directory not found, skipping assets");
            None
        };

        info!(site = %config.site_url, out_dir = %cli.out_dir.display(), "Exporting migration guide");
        let report = export_site(
            &ExportOptions {
                out_dir: cli.out_dir.clone(),
                public_dir,
            },
            &config,
            clock,
        )
        .context(format!("Failed to export site to {}", cli.out_dir.display()))?;

        if !report.missing_assets.is_empty() {
            warn!(
                "{} downloadable asset(s) missing; add them to {}",
                report.missing_assets.len(),
                cli.public_dir.display()
            );
        }
        Ok(())
    }
}
