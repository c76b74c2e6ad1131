// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test fakes shared across crates
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::handler::{HandlerError, Page, PageHandler};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded handler invocation.
pub type HandledPage = Page;

struct FakeHandlerState {
    pages: Vec<HandledPage>,
    fail_with: Option<String>,
}

/// Fake page handler that records every page it is given.
#[derive(Clone)]
pub struct FakePageHandler {
    inner: Arc<Mutex<FakeHandlerState>>,
}

impl Default for FakePageHandler {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeHandlerState {
                pages: Vec::new(),
                fail_with: None,
            })),
        }
    }
}

impl FakePageHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records the page and then fails.
    pub fn failing(message: impl Into<String>) -> Self {
        let handler = Self::new();
        handler.inner.lock().fail_with = Some(message.into());
        handler
    }

    /// All pages handled so far.
    pub fn pages(&self) -> Vec<HandledPage> {
        self.inner.lock().pages.clone()
    }
}

#[async_trait]
impl PageHandler for FakePageHandler {
    async fn handle(&self, page: Page) -> Result<(), HandlerError> {
        let mut state = self.inner.lock();
        state.pages.push(page);
        match &state.fail_with {
            Some(message) => Err(HandlerError(message.clone())),
            None => Ok(()),
        }
    }
}
