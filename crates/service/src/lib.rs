// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpc-service: fake `org.freedesktop.Notifications` service
//!
//! Impersonates the desktop notification service so that WebPush
//! notifications reaching a browser are accepted and dismissed
//! immediately, firing the client's default action instead of
//! displaying anything.

mod interface;
mod server;

pub use interface::Notifications;
pub use server::{serve, ServiceError, OBJECT_PATH, WELL_KNOWN_NAME};
