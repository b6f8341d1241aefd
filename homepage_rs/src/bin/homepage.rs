//! # homepage
//!
//! Loads the homepage content once and prints the rendered HTML document to
//! stdout. Logs go to stderr.
//!
//! ## Usage
//!
//! ```bash
//! API_BASE_URL=https://api.example.com homepage > index.html
//!
//! # Same-origin API
//! homepage --origin http://localhost:5173
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, Offset, Utc};
use clap::Parser;
use tracing::{debug, info};

use homepage::{Config, PageView};

#[derive(Parser, Debug)]
#[command(name = "homepage")]
#[command(about = "Render the marketing homepage from the content API")]
#[command(version)]
struct Args {
    /// API base URL; blank means same origin
    #[arg(long, env = "API_BASE_URL")]
    api_base_url: Option<String>,

    /// Site origin used for same-origin API requests
    #[arg(long, env = "SITE_ORIGIN")]
    origin: Option<String>,

    /// Show the last-updated timestamp in UTC instead of local time
    #[arg(long)]
    utc: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> Config {
        let utc_offset = if self.utc {
            Utc.fix()
        } else {
            Local::now().offset().fix()
        };

        Config::new(self.api_base_url.as_deref())
            .with_origin(self.origin.as_deref())
            .with_utc_offset(utc_offset)
    }
}

async fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = args.config();
    debug!(?config, "resolved configuration");

    let mut view = PageView::new(&config);
    info!(endpoint = view.endpoint(), "loading homepage");
    view.load().await;

    let html = view.render();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{html}").context("failed to write page to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[homepage] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
