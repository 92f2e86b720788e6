// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher that shells out to `notify-send`.
//!
//! Useful where linking a bus client is unwanted (containers, scripts) but
//! the `notify-send` binary is on the PATH. The server-assigned id comes
//! back through `--print-id`; subtitles have no flag and are dropped.

use async_trait::async_trait;
use nudge_core::{DispatchError, Dispatcher, Notification, ServerInformation, Timeout};
use std::time::Duration;
use tokio::process::Command;

/// Default timeout for a notify-send invocation.
const NOTIFY_SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct CommandDispatcher {
    program: String,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self {
            program: "notify-send".to_string(),
        }
    }

    /// Use a different notify-send-compatible binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_args(notification: &Notification) -> Vec<String> {
        let mut args = vec!["--print-id".to_string()];
        if !notification.appname.is_empty() {
            args.push("--app-name".to_string());
            args.push(notification.appname.clone());
        }
        if !notification.icon.is_empty() {
            args.push("--icon".to_string());
            args.push(notification.icon.clone());
        }
        if let Some(urgency) = notification.urgency {
            args.push("--urgency".to_string());
            args.push(urgency.to_string());
        }
        match notification.timeout {
            Timeout::Default => {}
            Timeout::Never => {
                args.push("--expire-time".to_string());
                args.push("0".to_string());
            }
            Timeout::Milliseconds(ms) => {
                args.push("--expire-time".to_string());
                args.push(ms.to_string());
            }
        }
        if let Some(sound) = &notification.sound_name {
            args.push(format!("--hint=string:sound-name:{}", sound));
        }
        if let Some(path) = &notification.image_path {
            args.push(format!("--hint=string:image-path:{}", path));
        }
        if let Some(id) = notification.id {
            args.push("--replace-id".to_string());
            args.push(id.to_string());
        }
        // Terminate option parsing so a dash-leading summary stays text.
        args.push("--".to_string());
        args.push(notification.summary.clone());
        if !notification.body.is_empty() {
            args.push(notification.body.clone());
        }
        args
    }
}

#[async_trait]
impl Dispatcher for CommandDispatcher {
    async fn dispatch(&self, notification: &Notification) -> Result<u32, DispatchError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::build_args(notification));

        tracing::info!(program = %self.program, summary = %notification.summary, "spawning notify-send");
        let output = tokio::time::timeout(NOTIFY_SEND_TIMEOUT, cmd.output())
            .await
            .map_err(|_elapsed| {
                DispatchError::SendFailed(format!(
                    "{} timed out after {}s",
                    self.program,
                    NOTIFY_SEND_TIMEOUT.as_secs()
                ))
            })?
            .map_err(|e| {
                DispatchError::SendFailed(format!("{} failed to spawn: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(%stderr, "notify-send exited with non-zero status");
            return Err(DispatchError::SendFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        // Older notify-send builds ignore --print-id; treat that as id 0.
        let id = String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0);
        tracing::info!(id, "notify-send dispatched");
        Ok(id)
    }

    async fn close(&self, _id: u32) -> Result<(), DispatchError> {
        Err(DispatchError::Unsupported("close"))
    }

    async fn server_information(&self) -> Result<ServerInformation, DispatchError> {
        Err(DispatchError::Unsupported("server information"))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
