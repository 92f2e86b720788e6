// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake dispatcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use nudge_core::{DispatchError, Dispatcher, Notification, ServerInformation};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded dispatch
#[derive(Debug, Clone)]
pub struct DispatchRecord {
    pub id: u32,
    pub notification: Notification,
}

struct FakeState {
    records: Vec<DispatchRecord>,
    closed: Vec<u32>,
    next_id: u32,
}

/// Fake dispatcher for testing.
///
/// Assigns sequential ids starting at 1 and honors replacement ids the way
/// a real server would.
#[derive(Clone)]
pub struct FakeDispatcher {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeDispatcher {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                records: Vec::new(),
                closed: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl FakeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded dispatches
    pub fn dispatches(&self) -> Vec<DispatchRecord> {
        self.inner.lock().records.clone()
    }

    /// Get the ids closed so far
    pub fn closed(&self) -> Vec<u32> {
        self.inner.lock().closed.clone()
    }
}

#[async_trait]
impl Dispatcher for FakeDispatcher {
    async fn dispatch(&self, notification: &Notification) -> Result<u32, DispatchError> {
        let mut state = self.inner.lock();
        let id = match notification.id {
            Some(id) => id,
            None => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
        };
        state.records.push(DispatchRecord {
            id,
            notification: notification.clone(),
        });
        Ok(id)
    }

    async fn close(&self, id: u32) -> Result<(), DispatchError> {
        let mut state = self.inner.lock();
        if !state.records.iter().any(|r| r.id == id) {
            return Err(DispatchError::UnknownId(id));
        }
        state.closed.push(id);
        Ok(())
    }

    async fn server_information(&self) -> Result<ServerInformation, DispatchError> {
        Ok(ServerInformation {
            name: "fake".to_string(),
            vendor: "nudge".to_string(),
            version: "0.1".to_string(),
            spec_version: "1.2".to_string(),
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
