// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpc-crawler: process supervision and orchestration
//!
//! Wires the three cooperating units together: the fake notification
//! service and the automation server as supervised child processes,
//! and the browser driver as an in-process task. The crawler never
//! sees notification or page content itself; it only manages
//! lifetimes.

mod crawler;
mod env;
mod supervisor;

pub use crawler::{Crawler, CrawlerConfig, SetupError, DEFAULT_WEBDRIVER_URL};
pub use supervisor::{ManagedProcess, SupervisorError, TERMINATE_ATTEMPTS, TERMINATE_WAIT};
