// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Dispatchers for the external display system

mod command;
mod desktop;
mod noop;

pub use command::CommandDispatcher;
pub use desktop::DesktopDispatcher;
pub use noop::NoopDispatcher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DispatchRecord, FakeDispatcher};

use nudge_core::{DispatchError, Notification, NotificationHandle};
use std::sync::Arc;

/// Show a notification on the desktop display system.
///
/// Convenience wrapper over [`Notification::show_on`] with a fresh
/// [`DesktopDispatcher`].
pub async fn show(notification: &Notification) -> Result<NotificationHandle, DispatchError> {
    notification
        .show_on(Arc::new(DesktopDispatcher::new()))
        .await
}
