// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpc-driver: browser session and window poller
//!
//! Owns one automated browser session and watches it for windows
//! opened by notification default actions, handing each loaded page to
//! the caller's handler before closing the window.

mod browser;
mod poller;

pub use browser::{BrowserAdapter, BrowserConfig, BrowserError, WebDriverBrowser};
pub use poller::{DriverError, PollerConfig, WindowPoller, BLANK_PAGE, LOAD_TIMEOUT};

#[cfg(any(test, feature = "test-support"))]
pub use browser::{BrowserCall, FakeBrowser, FakeWindow};
