// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Window poller loop.
//!
//! Watches the browser session for windows opened by notification
//! default actions. Every window past the session's base window is
//! focused, waited on until it has navigated and rendered, handed to
//! the page handler, and closed. The loop has no completion condition
//! of its own; it runs until the supervisor signals shutdown.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::browser::{BrowserAdapter, BrowserError};
use wpc_core::{HandlerError, Page, PageHandler};

/// Transitional page the browser shows before navigation commits.
pub const BLANK_PAGE: &str = "about:blank";

/// Upper bound on the wait for a window to leave the blank placeholder
/// page, and on the wait for the document to render.
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(100);

/// Delay between window-enumeration passes.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Delay between url/render probes while waiting on a window.
const WAIT_PROBE_INTERVAL: Duration = Duration::from_millis(250);

/// Errors from the driver loop
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Browser(#[from] BrowserError),
    /// The window never left the blank placeholder page.
    #[error("window {window} still on about:blank after {timeout:?}")]
    NavigationTimeout { window: String, timeout: Duration },
    /// The window navigated but never rendered an element.
    #[error("window {window} rendered nothing after {timeout:?}")]
    RenderTimeout { window: String, timeout: Duration },
    /// The page handler failed. The loop has no recovery state worth
    /// preserving, so this stops the driver.
    #[error("page handler failed: {0}")]
    Handler(#[from] HandlerError),
}

/// Poller timing knobs; the defaults are the production values.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub load_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            load_timeout: LOAD_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        }
    }
}

/// The browser driver loop: one session, one handler.
pub struct WindowPoller<B, H> {
    browser: B,
    handler: H,
    config: PollerConfig,
}

impl<B, H> WindowPoller<B, H>
where
    B: BrowserAdapter,
    H: PageHandler,
{
    pub fn new(browser: B, handler: H) -> Self {
        Self::with_config(browser, handler, PollerConfig::default())
    }

    pub fn with_config(browser: B, handler: H, config: PollerConfig) -> Self {
        Self {
            browser,
            handler,
            config,
        }
    }

    /// Run until `shutdown` flips or the handler fails.
    ///
    /// Browser-level and handler errors propagate out and stop the
    /// driver; load-wait timeouts do not (see [`Self::pass`]).
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), DriverError> {
        info!("window poller running");
        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                result = self.pass() => result?,
            }
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }

        if let Err(e) = self.browser.quit().await {
            warn!(error = %e, "failed to quit browser session");
        }
        info!("window poller stopped");
        Ok(())
    }

    /// One enumeration pass over every window after the base window.
    ///
    /// A window that times out waiting to navigate or render is left
    /// open for the next pass; slow pages get another chance instead
    /// of crashing the loop or hanging it.
    async fn pass(&mut self) -> Result<(), DriverError> {
        let windows = self.browser.windows().await?;
        for window in windows.into_iter().skip(1) {
            match self.process_window(&window).await {
                Ok(()) => {}
                Err(
                    e @ (DriverError::NavigationTimeout { .. } | DriverError::RenderTimeout { .. }),
                ) => {
                    warn!(error = %e, "window not ready, leaving it for the next pass");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Focus a window, wait for it to load, dispatch it, close it.
    async fn process_window(&mut self, window: &B::Window) -> Result<(), DriverError> {
        self.browser.focus(window).await?;
        self.wait_for_navigation(window).await?;
        self.wait_for_render(window).await?;

        let page = Page {
            url: self.browser.current_url().await?,
            title: self.browser.title().await?,
            source: self.browser.page_source().await?,
        };
        debug!(url = %page.url, title = %page.title, "dispatching page");
        self.handler.handle(page).await?;

        self.browser.close_window().await?;
        Ok(())
    }

    /// Wait until the focused window's url is no longer the blank
    /// placeholder. The automated default action opens a transitional
    /// blank window before navigation commits.
    async fn wait_for_navigation(&mut self, window: &B::Window) -> Result<(), DriverError> {
        let deadline = Instant::now() + self.config.load_timeout;
        loop {
            if self.browser.current_url().await? != BLANK_PAGE {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(DriverError::NavigationTimeout {
                    window: format!("{window:?}"),
                    timeout: self.config.load_timeout,
                });
            }
            tokio::time::sleep(WAIT_PROBE_INTERVAL).await;
        }
    }

    /// Wait until the page reports at least one rendered element.
    async fn wait_for_render(&mut self, window: &B::Window) -> Result<(), DriverError> {
        let deadline = Instant::now() + self.config.load_timeout;
        loop {
            if self.browser.rendered_element_count().await? > 0 {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(DriverError::RenderTimeout {
                    window: format!("{window:?}"),
                    timeout: self.config.load_timeout,
                });
            }
            tokio::time::sleep(WAIT_PROBE_INTERVAL).await;
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
