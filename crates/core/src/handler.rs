// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page handler boundary

use async_trait::async_trait;
use thiserror::Error;

/// A rendered page extracted from a freshly opened browser window.
///
/// Observed, consumed once, then the window is closed; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub title: String,
    /// Full rendered page source.
    pub source: String,
}

/// Failure raised by a [`PageHandler`].
///
/// Handler failures terminate the browser driver; the poll loop has no
/// recovery state worth preserving, so the contract is fail-fast.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

/// Callback invoked once per detected window.
///
/// The return value carries no data on success; errors stop the
/// driver (see [`HandlerError`]).
#[async_trait]
pub trait PageHandler: Send + Sync + 'static {
    async fn handle(&self, page: Page) -> Result<(), HandlerError>;
}
