// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handle to a shown notification.

use crate::{DispatchError, Dispatcher, Notification};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Opaque reference to a notification after it has been shown.
///
/// Dereferences to the underlying [`Notification`], so fields can be
/// adjusted in place and pushed to the display system with
/// [`NotificationHandle::update`].
pub struct NotificationHandle {
    id: u32,
    notification: Notification,
    dispatcher: Arc<dyn Dispatcher>,
}

impl NotificationHandle {
    pub(crate) fn new(
        id: u32,
        notification: Notification,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            id,
            notification,
            dispatcher,
        }
    }

    /// Server-assigned id of the live notification (0 where the platform
    /// has none).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Re-dispatch the (possibly mutated) parameters under the same id,
    /// replacing the on-screen notification.
    pub async fn update(&mut self) -> Result<(), DispatchError> {
        self.notification.id = Some(self.id);
        self.id = self.dispatcher.dispatch(&self.notification).await?;
        Ok(())
    }

    /// Retire the on-screen notification.
    pub async fn close(self) -> Result<(), DispatchError> {
        self.dispatcher.close(self.id).await
    }
}

impl Deref for NotificationHandle {
    type Target = Notification;

    fn deref(&self) -> &Notification {
        &self.notification
    }
}

impl DerefMut for NotificationHandle {
    fn deref_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

impl fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHandle")
            .field("id", &self.id)
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}
