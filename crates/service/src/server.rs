// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus binding for the notification service.

use thiserror::Error;
use tracing::info;
use zbus::connection;

use crate::interface::Notifications;

/// Well-known name claimed on the bus.
pub const WELL_KNOWN_NAME: &str = "org.freedesktop.Notifications";

/// Object path the protocol object is served at.
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";

/// Errors from binding the notification service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Two competing fake notification services on one bus indicate a
    /// setup error and must not silently coexist.
    #[error("{WELL_KNOWN_NAME} is already owned on this bus")]
    NameTaken,
    #[error("invalid bus address: {0}")]
    BadAddress(zbus::Error),
    #[error("bus error: {0}")]
    Bus(#[from] zbus::Error),
}

/// Connect to `bus_address`, claim [`WELL_KNOWN_NAME`], and serve one
/// protocol object at [`OBJECT_PATH`].
///
/// The address is handed in by the supervisor, never auto-discovered.
/// Dispatch runs on the returned connection until it is dropped.
pub async fn serve(bus_address: &str) -> Result<zbus::Connection, ServiceError> {
    let connection = connection::Builder::address(bus_address)
        .map_err(ServiceError::BadAddress)?
        .name(WELL_KNOWN_NAME)?
        .serve_at(OBJECT_PATH, Notifications::new())?
        .build()
        .await
        .map_err(|e| match e {
            zbus::Error::NameTaken => ServiceError::NameTaken,
            other => ServiceError::Bus(other),
        })?;

    info!(name = WELL_KNOWN_NAME, "notification service registered");
    Ok(connection)
}
