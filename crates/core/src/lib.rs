// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-core: notification model and the dispatcher seam
//!
//! The model side is a chainable [`Notification`] builder plus the small
//! value types it carries ([`Urgency`], [`Timeout`]). The seam side is the
//! [`Dispatcher`] trait: everything that actually talks to a display system
//! lives behind it, in the adapters crate.

pub mod dispatch;
pub mod handle;
pub mod notification;
pub mod server_info;
pub mod timeout;
pub mod urgency;

pub use dispatch::{DispatchError, Dispatcher};
pub use handle::NotificationHandle;
pub use notification::Notification;
pub use server_info::ServerInformation;
pub use timeout::{InvalidTimeout, Timeout};
pub use urgency::{InvalidUrgency, Urgency};
