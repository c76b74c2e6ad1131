// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WebDriver-backed browser session

use super::{BrowserAdapter, BrowserError};
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::wd::WindowHandle;
use fantoccini::{Client, ClientBuilder, Locator};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Delay between connection attempts to the automation server.
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Connection attempts before giving up on the automation server.
const CONNECT_ATTEMPTS: u32 = 20;

/// Browser session configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Automation server endpoint, e.g. `http://localhost:4444`.
    pub webdriver_url: String,
    /// Profile directory holding the WebPush subscriptions.
    pub profile_dir: PathBuf,
    /// Run without a GUI.
    pub headless: bool,
}

/// Firefox session driven over the WebDriver protocol.
pub struct WebDriverBrowser {
    client: Client,
}

impl WebDriverBrowser {
    /// Start a session against the automation server, retrying with a
    /// short backoff. The server is launched alongside this process
    /// and may not accept connections immediately.
    pub async fn connect(config: &BrowserConfig) -> Result<Self, BrowserError> {
        let capabilities = firefox_capabilities(&config.profile_dir, config.headless);

        let mut last_error = String::new();
        for attempt in 1..=CONNECT_ATTEMPTS {
            match ClientBuilder::native()
                .capabilities(capabilities.clone())
                .connect(&config.webdriver_url)
                .await
            {
                Ok(client) => {
                    debug!(attempt, url = %config.webdriver_url, "browser session started");
                    return Ok(Self { client });
                }
                Err(e) => {
                    debug!(attempt, error = %e, "automation server not ready");
                    last_error = e.to_string();
                }
            }
            tokio::time::sleep(CONNECT_RETRY_DELAY).await;
        }

        Err(BrowserError::Connect(last_error))
    }
}

/// Capabilities for a profile-loaded, optionally headless Firefox.
fn firefox_capabilities(
    profile_dir: &Path,
    headless: bool,
) -> serde_json::map::Map<String, serde_json::Value> {
    let mut args = vec!["-profile".to_string(), profile_dir.display().to_string()];
    if headless {
        args.push("-headless".to_string());
    }

    let mut capabilities = serde_json::map::Map::new();
    capabilities.insert("browserName".to_string(), serde_json::json!("firefox"));
    capabilities.insert(
        "moz:firefoxOptions".to_string(),
        serde_json::json!({ "args": args }),
    );
    capabilities
}

fn command_error(e: CmdError) -> BrowserError {
    BrowserError::Command(e.to_string())
}

#[async_trait]
impl BrowserAdapter for WebDriverBrowser {
    type Window = WindowHandle;

    async fn windows(&mut self) -> Result<Vec<WindowHandle>, BrowserError> {
        self.client.windows().await.map_err(command_error)
    }

    async fn focus(&mut self, window: &WindowHandle) -> Result<(), BrowserError> {
        self.client
            .switch_to_window(window.clone())
            .await
            .map_err(command_error)
    }

    async fn current_url(&mut self) -> Result<String, BrowserError> {
        let url = self.client.current_url().await.map_err(command_error)?;
        Ok(url.to_string())
    }

    async fn title(&mut self) -> Result<String, BrowserError> {
        self.client.title().await.map_err(command_error)
    }

    async fn page_source(&mut self) -> Result<String, BrowserError> {
        self.client.source().await.map_err(command_error)
    }

    async fn rendered_element_count(&mut self) -> Result<usize, BrowserError> {
        let elements = self
            .client
            .find_all(Locator::Css("*"))
            .await
            .map_err(command_error)?;
        Ok(elements.len())
    }

    async fn close_window(&mut self) -> Result<(), BrowserError> {
        self.client.close_window().await.map_err(command_error)
    }

    async fn quit(&mut self) -> Result<(), BrowserError> {
        self.client
            .clone()
            .close()
            .await
            .map_err(command_error)
    }
}

#[cfg(test)]
#[path = "webdriver_tests.rs"]
mod tests;
