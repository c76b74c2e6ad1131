// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Example page handler: append each page URL to a log file.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use wpc_core::{HandlerError, Page, PageHandler};

/// Appends one line per handled page. The page body is deliberately
/// ignored; this handler only demonstrates the callback boundary.
pub struct LogHandler {
    path: PathBuf,
}

impl LogHandler {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PageHandler for LogHandler {
    async fn handle(&self, page: Page) -> Result<(), HandlerError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| HandlerError(format!("open {}: {e}", self.path.display())))?;

        file.write_all(format!("{}\n", page.url).as_bytes())
            .await
            .map_err(|e| HandlerError(format!("write {}: {e}", self.path.display())))?;

        tracing::info!(url = %page.url, title = %page.title, "logged page");
        Ok(())
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
