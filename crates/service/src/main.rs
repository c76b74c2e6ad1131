// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WebPush Crawler notification daemon (wpc-notifyd)
//!
//! Binds the bus address handed in by the crawler, claims the
//! `org.freedesktop.Notifications` name, and dispatches until
//! terminated. Exits immediately if the name is already owned.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use wpc_service::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus_address = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bus-address" => {
                bus_address = args.next();
                if bus_address.is_none() {
                    eprintln!("error: --bus-address requires a value");
                    std::process::exit(1);
                }
            }
            "--version" | "-V" | "-v" => {
                println!("wpc-notifyd {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("wpc-notifyd {}", env!("CARGO_PKG_VERSION"));
                println!("WebPush Crawler notification daemon - fake org.freedesktop.Notifications service");
                println!();
                println!("USAGE:");
                println!("    wpc-notifyd --bus-address <ADDRESS>");
                println!();
                println!("The daemon is typically started by the wpc crawler and should not");
                println!("be invoked directly. Without --bus-address it falls back to");
                println!("DBUS_SESSION_BUS_ADDRESS.");
                println!();
                println!("OPTIONS:");
                println!("    --bus-address <ADDRESS>    Bus to register the service on");
                println!("    -h, --help                 Print help information");
                println!("    -v, --version              Print version information");
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: wpc-notifyd --bus-address <ADDRESS>");
                std::process::exit(1);
            }
        }
    }

    setup_logging();

    let bus_address = bus_address
        .or_else(|| std::env::var("DBUS_SESSION_BUS_ADDRESS").ok())
        .filter(|a| !a.is_empty())
        .ok_or("no bus address: pass --bus-address or set DBUS_SESSION_BUS_ADDRESS")?;

    // Fail fast on setup errors (bad address, name already owned).
    let _connection = serve(&bus_address).await?;

    info!("notification service ready, dispatching");

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        _ = sigint.recv() => info!("Received SIGINT, shutting down..."),
    }

    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
