// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process supervision.
//!
//! Graceful termination goes through SIGTERM (the `kill` command, so
//! no signal bindings are needed); escalation to SIGKILL is reserved
//! for the automation server, which may need time to flush and may not
//! respond to a single terminate.

use std::time::Duration;

use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{info, warn};
use wpc_core::ProcessRole;

/// How long each graceful-terminate attempt waits for exit.
pub const TERMINATE_WAIT: Duration = Duration::from_secs(5);

/// Total graceful-terminate attempts before escalating to SIGKILL.
pub const TERMINATE_ATTEMPTS: u32 = 3;

/// Errors from spawning supervised processes
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to spawn {role}: {source}")]
    Spawn {
        role: ProcessRole,
        source: std::io::Error,
    },
}

/// One supervised child process.
///
/// Owned exclusively by the crawler; the handle is released after
/// confirmed termination (on drop).
#[derive(Debug)]
pub struct ManagedProcess {
    role: ProcessRole,
    child: Child,
}

impl ManagedProcess {
    pub fn spawn(role: ProcessRole, mut command: Command) -> Result<Self, SupervisorError> {
        let child = command
            .spawn()
            .map_err(|source| SupervisorError::Spawn { role, source })?;
        info!(role = %role, pid = child.id(), "process started");
        Ok(Self { role, child })
    }

    pub fn role(&self) -> ProcessRole {
        self.role
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Liveness check; a process that is already gone is simply not
    /// alive, never an error.
    pub fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Ask the process to exit (SIGTERM). Harmless if already gone.
    pub fn terminate(&mut self) {
        if let Some(pid) = self.child.id() {
            kill_signal("-15", pid);
        }
    }

    /// Wait up to `timeout` for the process to exit.
    pub async fn wait_for_exit(&mut self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.child.wait())
            .await
            .is_ok()
    }

    /// Force kill (SIGKILL) and reap.
    pub async fn kill(&mut self) {
        if let Err(e) = self.child.kill().await {
            warn!(role = %self.role, error = %e, "kill failed");
        }
    }

    /// Terminate and wait for exit. For owned sub-processes whose
    /// cooperative termination is assumed reliable.
    pub async fn shutdown(&mut self) {
        self.terminate();
        if let Err(e) = self.child.wait().await {
            warn!(role = %self.role, error = %e, "wait failed");
        }
        info!(role = %self.role, "process stopped");
    }

    /// Terminate with retries, then kill.
    ///
    /// Up to [`TERMINATE_ATTEMPTS`] terminate-and-wait rounds of
    /// [`TERMINATE_WAIT`] each; if the final round still times out,
    /// exactly one SIGKILL is issued, with no further retry.
    pub async fn shutdown_escalating(&mut self) {
        self.escalate(TERMINATE_WAIT).await;
    }

    async fn escalate(&mut self, wait: Duration) {
        for attempt in 1..=TERMINATE_ATTEMPTS {
            self.terminate();
            if self.wait_for_exit(wait).await {
                info!(role = %self.role, "process stopped");
                return;
            }
            warn!(role = %self.role, attempt, "process did not exit after terminate");
        }
        warn!(role = %self.role, "escalating to kill");
        self.kill().await;
    }
}

/// Send a signal via the `kill` command.
fn kill_signal(signal: &str, pid: u32) -> bool {
    std::process::Command::new("kill")
        .args([signal, &pid.to_string()])
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
