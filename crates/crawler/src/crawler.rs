// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crawler orchestration: startup order and coordinated shutdown.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::env;
use crate::supervisor::{ManagedProcess, SupervisorError};
use wpc_core::{PageHandler, ProcessRole};
use wpc_driver::{BrowserConfig, BrowserError, DriverError, WebDriverBrowser, WindowPoller};

/// Default automation server endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Errors from crawler startup. All are fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The crawler must run inside a session that already has a bus,
    /// e.g. `dbus-run-session -- wpc ...`.
    #[error("DBUS_SESSION_BUS_ADDRESS is not set; run inside an existing session bus")]
    BusAddressMissing,
    #[error("browser profile directory not found: {0}")]
    ProfileNotFound(PathBuf),
    #[error(transparent)]
    Supervisor(#[from] SupervisorError),
    #[error("failed to start browser session: {0}")]
    Browser(#[from] BrowserError),
}

/// Crawler configuration
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Automation-server artifact. `.jar` files are run through
    /// `java -jar`; anything else is executed directly.
    pub automation_server: PathBuf,
    /// Browser profile directory holding the WebPush subscriptions.
    pub profile_dir: PathBuf,
    /// Run the browser without a GUI.
    pub headless: bool,
    /// Automation server endpoint the driver connects to.
    pub webdriver_url: String,
    /// Override for the wpc-notifyd binary; discovered next to the
    /// current executable when unset.
    pub notifyd_binary: Option<PathBuf>,
}

impl CrawlerConfig {
    pub fn new(automation_server: impl Into<PathBuf>, profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            automation_server: automation_server.into(),
            profile_dir: profile_dir.into(),
            headless: true,
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            notifyd_binary: None,
        }
    }
}

/// Handle to the in-process browser driver task.
#[derive(Debug)]
struct DriverHandle {
    task: JoinHandle<Result<(), DriverError>>,
    shutdown: watch::Sender<bool>,
}

/// The top-level crawler.
///
/// Owns the notification service and automation server as child
/// processes and the browser driver as a task. Content flows from the
/// browser to the handler without ever passing through here.
#[derive(Debug)]
pub struct Crawler {
    bus_address: String,
    notification_service: ManagedProcess,
    automation_server: ManagedProcess,
    driver: DriverHandle,
}

impl Crawler {
    /// Start all three units. Everything is up when this returns; on
    /// partial failure every already-started unit is torn down before
    /// the error is handed back.
    pub async fn start<H: PageHandler>(
        config: CrawlerConfig,
        handler: H,
    ) -> Result<Self, SetupError> {
        let bus_address = env::session_bus_address().ok_or(SetupError::BusAddressMissing)?;
        if !config.profile_dir.is_dir() {
            return Err(SetupError::ProfileNotFound(config.profile_dir));
        }

        let mut notification_service = ManagedProcess::spawn(
            ProcessRole::NotificationService,
            notifyd_command(&config, &bus_address),
        )?;

        let mut automation_server = match ManagedProcess::spawn(
            ProcessRole::AutomationServer,
            automation_server_command(&config.automation_server),
        ) {
            Ok(process) => process,
            Err(e) => {
                notification_service.shutdown().await;
                return Err(e.into());
            }
        };

        let browser_config = BrowserConfig {
            webdriver_url: config.webdriver_url.clone(),
            profile_dir: config.profile_dir.clone(),
            headless: config.headless,
        };
        let browser = match WebDriverBrowser::connect(&browser_config).await {
            Ok(browser) => browser,
            Err(e) => {
                automation_server.shutdown_escalating().await;
                notification_service.shutdown().await;
                return Err(e.into());
            }
        };

        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(WindowPoller::new(browser, handler).run(shutdown_rx));

        info!(bus = first_segment(&bus_address), "crawler started");
        Ok(Self {
            bus_address,
            notification_service,
            automation_server,
            driver: DriverHandle { task, shutdown },
        })
    }

    /// Bare session bus address: the first comma-separated segment of
    /// the raw value, with any GUID suffix stripped.
    pub fn dbus_address(&self) -> &str {
        first_segment(&self.bus_address)
    }

    /// Tear everything down: the browser driver first, then the
    /// automation server with terminate-retry-kill escalation, then
    /// the notification service. Failures along the way are logged and
    /// never surfaced; all OS resources are released regardless.
    pub async fn close(mut self) {
        let _ = self.driver.shutdown.send(true);
        match self.driver.task.await {
            Ok(Ok(())) => info!(role = %ProcessRole::BrowserDriver, "driver stopped"),
            Ok(Err(e)) => {
                // The driver may have died earlier (e.g. a handler
                // failure); shutdown proceeds regardless.
                warn!(role = %ProcessRole::BrowserDriver, error = %e, "driver stopped with error");
            }
            Err(e) => {
                warn!(role = %ProcessRole::BrowserDriver, error = %e, "driver task join failed");
            }
        }

        self.automation_server.shutdown_escalating().await;
        self.notification_service.shutdown().await;
        info!("crawler closed");
    }
}

/// First comma-separated segment of a bus address.
fn first_segment(address: &str) -> &str {
    address.split(',').next().unwrap_or(address)
}

/// Command to launch wpc-notifyd on the given bus.
///
/// The raw address is passed through untruncated; the service binds
/// exactly what the environment provided.
fn notifyd_command(config: &CrawlerConfig, bus_address: &str) -> Command {
    let binary = config
        .notifyd_binary
        .clone()
        .or_else(|| env::notifyd_binary().map(PathBuf::from))
        .unwrap_or_else(default_notifyd_binary);

    let mut cmd = Command::new(binary);
    cmd.arg("--bus-address")
        .arg(bus_address)
        .stdin(Stdio::null());
    cmd
}

/// Find the wpc-notifyd binary: sibling of the current executable,
/// falling back to a PATH lookup.
fn default_notifyd_binary() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("wpc-notifyd")))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from("wpc-notifyd"))
}

/// Command to launch the automation server artifact.
fn automation_server_command(artifact: &Path) -> Command {
    let mut cmd = if artifact.extension().is_some_and(|ext| ext == "jar") {
        let mut java = Command::new("java");
        java.arg("-jar").arg(artifact);
        java
    } else {
        Command::new(artifact)
    };
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

#[cfg(test)]
#[path = "crawler_tests.rs"]
mod tests;
