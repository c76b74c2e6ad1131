// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wpc - WebPush Crawler CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod handler;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use crate::handler::LogHandler;
use wpc_crawler::{Crawler, CrawlerConfig};

/// Crawl web page contents on incoming WebPush notifications.
///
/// The crawler claims org.freedesktop.Notifications, so it must run in
/// the context of a fresh session bus:
///
///     dbus-run-session -- wpc --server selenium.jar --profile ./profile
#[derive(Parser)]
#[command(name = "wpc", version, about, verbatim_doc_comment)]
struct Cli {
    /// Automation-server artifact (Selenium jar or a webdriver binary)
    #[arg(long, value_name = "PATH")]
    server: PathBuf,

    /// Browser profile directory with the WebPush subscriptions
    #[arg(long, value_name = "PATH")]
    profile: PathBuf,

    /// Run the browser with a GUI
    #[arg(long)]
    gui: bool,

    /// File the page-URL log is appended to
    #[arg(long, value_name = "PATH", default_value = "log.txt")]
    log: PathBuf,

    /// Automation server endpoint
    #[arg(long, value_name = "URL", default_value = wpc_crawler::DEFAULT_WEBDRIVER_URL)]
    webdriver_url: String,

    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long, value_name = "SECS")]
    duration: Option<u64>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let mut config = CrawlerConfig::new(cli.server, cli.profile);
    config.headless = !cli.gui;
    config.webdriver_url = cli.webdriver_url;

    let crawler = Crawler::start(config, LogHandler::new(cli.log)).await?;
    info!(bus = crawler.dbus_address(), "crawling; press Ctrl-C to stop");

    wait_for_stop(cli.duration).await?;
    crawler.close().await;
    Ok(())
}

/// Block until Ctrl-C, SIGTERM, or the optional duration elapses.
async fn wait_for_stop(duration: Option<u64>) -> Result<()> {
    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    match duration {
        Some(secs) => {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(secs)) => {
                    info!(secs, "duration elapsed, shutting down");
                }
                _ = tokio::signal::ctrl_c() => info!("interrupted, shutting down"),
                _ = sigterm.recv() => info!("terminated, shutting down"),
            }
        }
        None => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => info!("interrupted, shutting down"),
                _ = sigterm.recv() => info!("terminated, shutting down"),
            }
        }
    }
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
