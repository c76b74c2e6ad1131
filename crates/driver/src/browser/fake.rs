// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake browser session for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BrowserAdapter, BrowserError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded browser call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    Windows,
    Focus(String),
    CloseWindow(String),
    Quit,
}

/// One scripted window.
///
/// `urls` holds the values successive `current_url` reads observe; the
/// last entry repeats forever, so a single-element script is a window
/// that never navigates.
#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub id: String,
    pub urls: Vec<String>,
    pub title: String,
    pub source: String,
    pub element_count: usize,
}

impl FakeWindow {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            urls: vec![url.into()],
            title: String::new(),
            source: String::new(),
            element_count: 1,
        }
    }

    /// A window that steps through `urls` on successive reads.
    pub fn navigating(id: impl Into<String>, urls: Vec<&str>) -> Self {
        let mut window = Self::new(id, "");
        window.urls = urls.into_iter().map(String::from).collect();
        window
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn element_count(mut self, count: usize) -> Self {
        self.element_count = count;
        self
    }
}

struct WindowState {
    window: FakeWindow,
    url_reads: usize,
}

impl WindowState {
    fn current_url(&mut self) -> String {
        let index = self.url_reads.min(self.window.urls.len().saturating_sub(1));
        self.url_reads += 1;
        self.window.urls.get(index).cloned().unwrap_or_default()
    }
}

struct FakeBrowserState {
    windows: Vec<WindowState>,
    focused: Option<String>,
    calls: Vec<BrowserCall>,
}

/// Fake browser session for testing
#[derive(Clone)]
pub struct FakeBrowser {
    inner: Arc<Mutex<FakeBrowserState>>,
}

impl Default for FakeBrowser {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeBrowserState {
                windows: Vec::new(),
                focused: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a window to the enumeration order. May be called while a
    /// poller owns a clone, simulating a notification opening a window.
    pub fn push_window(&self, window: FakeWindow) {
        self.inner.lock().windows.push(WindowState {
            window,
            url_reads: 0,
        });
    }

    /// All recorded calls
    pub fn calls(&self) -> Vec<BrowserCall> {
        self.inner.lock().calls.clone()
    }

    /// Ids of the windows still open
    pub fn open_windows(&self) -> Vec<String> {
        self.inner
            .lock()
            .windows
            .iter()
            .map(|w| w.window.id.clone())
            .collect()
    }
}

impl FakeBrowserState {
    fn focused_mut(&mut self) -> Result<&mut WindowState, BrowserError> {
        let id = self
            .focused
            .clone()
            .ok_or_else(|| BrowserError::Command("no window focused".to_string()))?;
        self.windows
            .iter_mut()
            .find(|w| w.window.id == id)
            .ok_or(BrowserError::Command(format!("no such window: {id}")))
    }
}

#[async_trait]
impl BrowserAdapter for FakeBrowser {
    type Window = String;

    async fn windows(&mut self) -> Result<Vec<String>, BrowserError> {
        let mut state = self.inner.lock();
        state.calls.push(BrowserCall::Windows);
        Ok(state.windows.iter().map(|w| w.window.id.clone()).collect())
    }

    async fn focus(&mut self, window: &String) -> Result<(), BrowserError> {
        let mut state = self.inner.lock();
        if !state.windows.iter().any(|w| &w.window.id == window) {
            return Err(BrowserError::Command(format!("no such window: {window}")));
        }
        state.focused = Some(window.clone());
        state.calls.push(BrowserCall::Focus(window.clone()));
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, BrowserError> {
        let mut state = self.inner.lock();
        state.focused_mut().map(WindowState::current_url)
    }

    async fn title(&mut self) -> Result<String, BrowserError> {
        let mut state = self.inner.lock();
        state.focused_mut().map(|w| w.window.title.clone())
    }

    async fn page_source(&mut self) -> Result<String, BrowserError> {
        let mut state = self.inner.lock();
        state.focused_mut().map(|w| w.window.source.clone())
    }

    async fn rendered_element_count(&mut self) -> Result<usize, BrowserError> {
        let mut state = self.inner.lock();
        state.focused_mut().map(|w| w.window.element_count)
    }

    async fn close_window(&mut self) -> Result<(), BrowserError> {
        let mut state = self.inner.lock();
        let id = state
            .focused
            .take()
            .ok_or_else(|| BrowserError::Command("no window focused".to_string()))?;
        state.windows.retain(|w| w.window.id != id);
        state.calls.push(BrowserCall::CloseWindow(id));
        Ok(())
    }

    async fn quit(&mut self) -> Result<(), BrowserError> {
        // Windows are kept so tests can inspect what was left open.
        self.inner.lock().calls.push(BrowserCall::Quit);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
