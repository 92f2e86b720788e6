// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op dispatcher.

use async_trait::async_trait;
use nudge_core::{DispatchError, Dispatcher, Notification, ServerInformation};

/// Dispatcher that silently discards all notifications.
///
/// Used when notifications are disabled or not yet configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDispatcher;

impl NoopDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dispatcher for NoopDispatcher {
    async fn dispatch(&self, _notification: &Notification) -> Result<u32, DispatchError> {
        Ok(0)
    }

    async fn close(&self, _id: u32) -> Result<(), DispatchError> {
        Ok(())
    }

    async fn server_information(&self) -> Result<ServerInformation, DispatchError> {
        Err(DispatchError::Unsupported("server information"))
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
