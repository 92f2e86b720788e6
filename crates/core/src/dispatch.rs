// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The seam to the external display system.

use crate::{Notification, ServerInformation};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from dispatch operations
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("send failed: {0}")]
    SendFailed(String),
    #[error("not supported by this dispatcher: {0}")]
    Unsupported(&'static str),
    #[error("no live notification with id {0}")]
    UnknownId(u32),
}

/// Hands accumulated notification parameters to a display system.
///
/// Implementations own all transport concerns (bus connections,
/// subprocesses, platform APIs). The model crate never sees any of that;
/// it only learns the server-assigned id back.
#[async_trait]
pub trait Dispatcher: Send + Sync + 'static {
    /// Display a notification, returning the server-assigned id.
    ///
    /// Platforms without notification ids return 0. A notification carrying
    /// an explicit `id` asks the server to replace that notification.
    async fn dispatch(&self, notification: &Notification) -> Result<u32, DispatchError>;

    /// Retire a previously dispatched notification.
    async fn close(&self, id: u32) -> Result<(), DispatchError>;

    /// Identify the display system behind this dispatcher.
    async fn server_information(&self) -> Result<ServerInformation, DispatchError>;
}
