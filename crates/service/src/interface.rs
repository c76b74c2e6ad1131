// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The notification protocol object.
//!
//! Implements the standard `org.freedesktop.Notifications` interface
//! with one twist: every notification is treated as immediately
//! invoked-and-dismissed. `Notify` emits `ActionInvoked(id, "default")`
//! and `NotificationClosed(id, 3)` before it returns, which makes the
//! calling client (a messaging client inside the browser) open the
//! notification's target URL in a new window.

use std::collections::HashMap;

use tracing::{debug, warn};
use zbus::interface;
use zbus::object_server::SignalEmitter;
use zbus::zvariant::OwnedValue;

use wpc_core::{
    IdAllocator, Notification, CAPABILITIES, CLOSE_REASON_CLOSED, DEFAULT_ACTION, SERVER_NAME,
    SERVER_VENDOR, SERVER_VERSION, SPEC_VERSION,
};

/// The bus-exposed notification service object.
///
/// Owns the id allocator; zbus dispatches `&mut self` methods under an
/// exclusive lock, which serializes the counter mutation.
pub struct Notifications {
    ids: IdAllocator,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
        }
    }

    #[cfg(test)]
    fn starting_at(counter: u32) -> Self {
        Self {
            ids: IdAllocator::starting_at(counter),
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[interface(name = "org.freedesktop.Notifications")]
impl Notifications {
    /// Accept a notification and immediately fire-and-dismiss it.
    ///
    /// Wire signature `susssasa{sv}i -> u`. The three side effects run
    /// synchronously, in order, before the reply: `ActionInvoked`,
    /// the local no-op `CloseNotification`, `NotificationClosed`.
    /// Signal delivery is best-effort per bus semantics; emit failures
    /// are logged and never surfaced to the caller.
    #[allow(clippy::too_many_arguments)]
    async fn notify(
        &mut self,
        app_name: String,
        replaces_id: u32,
        app_icon: String,
        summary: String,
        body: String,
        actions: Vec<String>,
        hints: HashMap<String, OwnedValue>,
        expire_timeout: i32,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> u32 {
        let notification = Notification {
            id: self.ids.allocate(replaces_id),
            replaces_id,
            app_name,
            app_icon,
            summary,
            body,
            actions,
            hints,
            expire_timeout,
        };
        let id = notification.id;
        debug!(
            id,
            replacement = notification.is_replacement(),
            app = %notification.app_name,
            summary = %notification.summary,
            "accepted notification"
        );

        if let Err(e) = Self::action_invoked(&emitter, id, DEFAULT_ACTION).await {
            warn!(id, error = %e, "failed to emit ActionInvoked");
        }
        self.close_notification(id).await;
        if let Err(e) = Self::notification_closed(&emitter, id, CLOSE_REASON_CLOSED).await {
            warn!(id, error = %e, "failed to emit NotificationClosed");
        }

        id
    }

    /// No-op; present for protocol completeness, never raises.
    async fn close_notification(&self, _id: u32) {}

    async fn get_capabilities(&self) -> Vec<String> {
        CAPABILITIES.iter().map(|c| (*c).to_string()).collect()
    }

    async fn get_server_information(&self) -> (String, String, String, String) {
        (
            SERVER_NAME.to_string(),
            SERVER_VENDOR.to_string(),
            SERVER_VERSION.to_string(),
            SPEC_VERSION.to_string(),
        )
    }

    #[zbus(signal)]
    async fn action_invoked(
        emitter: &SignalEmitter<'_>,
        id: u32,
        action: &str,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn notification_closed(
        emitter: &SignalEmitter<'_>,
        id: u32,
        reason: u32,
    ) -> zbus::Result<()>;
}

#[cfg(test)]
#[path = "interface_tests.rs"]
mod tests;
