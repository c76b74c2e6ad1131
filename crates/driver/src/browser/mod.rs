// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Browser session adapters

mod webdriver;

pub use webdriver::{BrowserConfig, WebDriverBrowser};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{BrowserCall, FakeBrowser, FakeWindow};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from browser session operations
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to reach automation server: {0}")]
    Connect(String),
    #[error("webdriver command failed: {0}")]
    Command(String),
}

/// Adapter for one automated browser session.
///
/// Commands operate on the currently focused window; [`focus`] selects
/// which one that is.
///
/// [`focus`]: BrowserAdapter::focus
#[async_trait]
pub trait BrowserAdapter: Send + Sync + 'static {
    /// Opaque window identifier, as the wire protocol hands it out.
    type Window: Clone + PartialEq + Send + Sync + std::fmt::Debug;

    /// All open windows, in enumeration order. Index 0 is the
    /// session's persistent base window.
    async fn windows(&mut self) -> Result<Vec<Self::Window>, BrowserError>;

    /// Switch focus to a window.
    async fn focus(&mut self, window: &Self::Window) -> Result<(), BrowserError>;

    /// URL of the focused window.
    async fn current_url(&mut self) -> Result<String, BrowserError>;

    /// Title of the focused window.
    async fn title(&mut self) -> Result<String, BrowserError>;

    /// Full rendered source of the focused window.
    async fn page_source(&mut self) -> Result<String, BrowserError>;

    /// Number of rendered elements in the focused window; a coarse
    /// "page is loaded" signal, not full network-idle.
    async fn rendered_element_count(&mut self) -> Result<usize, BrowserError>;

    /// Close the focused window.
    async fn close_window(&mut self) -> Result<(), BrowserError>;

    /// End the session, closing the browser.
    async fn quit(&mut self) -> Result<(), BrowserError>;
}
