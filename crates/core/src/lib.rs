// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpc-core: Core library for the WebPush Crawler (wpc)

pub mod handler;
pub mod id;
pub mod notification;
pub mod process;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use handler::{HandlerError, Page, PageHandler};
pub use id::{IdAllocator, MAX_ID};
pub use notification::{
    Notification, CAPABILITIES, CLOSE_REASON_CLOSED, DEFAULT_ACTION, SERVER_NAME, SERVER_VENDOR,
    SERVER_VERSION, SPEC_VERSION,
};
pub use process::ProcessRole;

#[cfg(any(test, feature = "test-support"))]
pub use test_support::{FakePageHandler, HandledPage};
