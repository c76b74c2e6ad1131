// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification data model and fixed protocol constants

use std::collections::HashMap;
use zvariant::OwnedValue;

/// Action string clients invoke when no specific action is chosen.
/// Messaging clients wire it to "open the associated URL".
pub const DEFAULT_ACTION: &str = "default";

/// `NotificationClosed` reason: closed by a `CloseNotification` call.
pub const CLOSE_REASON_CLOSED: u32 = 3;

/// Capabilities advertised by the service. Fixed set; the service
/// never actually renders anything.
pub const CAPABILITIES: [&str; 6] = [
    "actions",
    "body",
    "body-markup",
    "icon-static",
    "persistence",
    "sound",
];

/// `GetServerInformation` identity tuple.
pub const SERVER_NAME: &str = "wpc";
pub const SERVER_VENDOR: &str = "wpc";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SPEC_VERSION: &str = "1.2";

/// One accepted notification.
///
/// Built per `Notify` call and dropped when the call returns; the
/// service keeps no notification state. From the caller's point of
/// view a notification is accepted and closed atomically inside the
/// one call, so there is nothing to retain.
#[derive(Debug)]
pub struct Notification {
    /// Resolved id (the replacement target, or freshly allocated).
    pub id: u32,
    /// Raw `replaces_id` argument; 0 means "allocate new".
    pub replaces_id: u32,
    pub app_name: String,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub hints: HashMap<String, OwnedValue>,
    /// Expiration in milliseconds; -1 = server default, 0 = never.
    pub expire_timeout: i32,
}

impl Notification {
    /// Whether the caller addressed an existing notification.
    pub fn is_replacement(&self) -> bool {
        self.replaces_id != 0
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
