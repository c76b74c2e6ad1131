// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable access for the crawler.

/// Raw session bus address, exactly as the environment provides it.
///
/// The crawler never creates a bus; it expects to run inside a session
/// that already has one (e.g. under `dbus-run-session`).
pub fn session_bus_address() -> Option<String> {
    std::env::var("DBUS_SESSION_BUS_ADDRESS")
        .ok()
        .filter(|a| !a.is_empty())
}

/// Override for the wpc-notifyd binary path.
pub fn notifyd_binary() -> Option<String> {
    std::env::var("WPC_NOTIFYD_BINARY")
        .ok()
        .filter(|p| !p.is_empty())
}
