// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop dispatcher bridging to notify-rust.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to
//! send notifications via the Notification Center. The first notification
//! triggers `ensure_application_set()` which runs an AppleScript to look up
//! a bundle identifier. In a daemon context without Automation permissions,
//! that AppleScript blocks forever. We pre-set the bundle identifier at
//! construction time to bypass the lookup entirely.

use async_trait::async_trait;
use nudge_core::{DispatchError, Dispatcher, Notification, ServerInformation, Timeout};

#[cfg(all(unix, not(target_os = "macos")))]
use parking_lot::Mutex;
#[cfg(all(unix, not(target_os = "macos")))]
use std::collections::HashMap;
#[cfg(all(unix, not(target_os = "macos")))]
use std::sync::Arc;

/// Dispatcher backed by the platform notification system.
///
/// `notify_rust::Notification::show()` is synchronous, so every call runs
/// on tokio's bounded blocking thread pool. Where the platform assigns
/// notification ids, the live `notify-rust` handles are retained so
/// [`Dispatcher::close`] can retire them later.
///
/// Retention contract: a handle stays in the map until `close(id)` removes
/// it or a later dispatch replaces the same id. Long-lived consumers that
/// dispatch distinct notifications without ever closing them accumulate one
/// handle per id; use short-lived dispatchers (or close what you show) if
/// that matters. Dropping the dispatcher releases everything.
#[derive(Clone, Default)]
pub struct DesktopDispatcher {
    #[cfg(all(unix, not(target_os = "macos")))]
    live: Arc<Mutex<HashMap<u32, notify_rust::NotificationHandle>>>,
}

impl DesktopDispatcher {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so mac-notification-sys
            // skips its NSAppleScript lookup (which blocks forever in daemon
            // processes that lack Automation permissions).
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self::default()
    }

    fn translate(notification: &Notification) -> notify_rust::Notification {
        let mut out = notify_rust::Notification::new();
        out.appname(&notification.appname)
            .summary(&notification.summary)
            .body(&notification.body)
            .icon(&notification.icon)
            .timeout(match notification.timeout {
                Timeout::Default => notify_rust::Timeout::Default,
                Timeout::Never => notify_rust::Timeout::Never,
                Timeout::Milliseconds(ms) => notify_rust::Timeout::Milliseconds(ms),
            });
        if let Some(subtitle) = &notification.subtitle {
            out.subtitle(subtitle);
        }
        if let Some(sound) = &notification.sound_name {
            out.sound_name(sound);
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Some(urgency) = notification.urgency {
                out.urgency(match urgency {
                    nudge_core::Urgency::Low => notify_rust::Urgency::Low,
                    nudge_core::Urgency::Normal => notify_rust::Urgency::Normal,
                    nudge_core::Urgency::Critical => notify_rust::Urgency::Critical,
                });
            }
            if let Some(path) = &notification.image_path {
                out.hint(notify_rust::Hint::ImagePath(path.clone()));
            }
            if let Some(id) = notification.id {
                out.id(id);
            }
        }
        out
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn show_blocking(&self, shown: Notification) -> Result<u32, DispatchError> {
        let handle = tokio::task::spawn_blocking(move || Self::translate(&shown).show())
            .await
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?;
        let id = handle.id();
        self.live.lock().insert(id, handle);
        Ok(id)
    }

    // No notification ids outside the xdg world; discard the result.
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn show_blocking(&self, shown: Notification) -> Result<u32, DispatchError> {
        tokio::task::spawn_blocking(move || Self::translate(&shown).show().map(|_| ()))
            .await
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?;
        Ok(0)
    }
}

#[async_trait]
impl Dispatcher for DesktopDispatcher {
    async fn dispatch(&self, notification: &Notification) -> Result<u32, DispatchError> {
        tracing::info!(summary = %notification.summary, "sending desktop notification");
        let id = self.show_blocking(notification.clone()).await?;
        tracing::info!(id, "desktop notification sent");
        Ok(id)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn close(&self, id: u32) -> Result<(), DispatchError> {
        let handle = self
            .live
            .lock()
            .remove(&id)
            .ok_or(DispatchError::UnknownId(id))?;
        tokio::task::spawn_blocking(move || handle.close())
            .await
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?;
        tracing::info!(id, "desktop notification closed");
        Ok(())
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn close(&self, _id: u32) -> Result<(), DispatchError> {
        Err(DispatchError::Unsupported("close"))
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn server_information(&self) -> Result<ServerInformation, DispatchError> {
        let info = tokio::task::spawn_blocking(notify_rust::get_server_information)
            .await
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?;
        Ok(ServerInformation {
            name: info.name,
            vendor: info.vendor,
            version: info.version,
            spec_version: info.spec_version,
        })
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn server_information(&self) -> Result<ServerInformation, DispatchError> {
        Err(DispatchError::Unsupported("server information"))
    }
}

#[cfg(all(test, unix, not(target_os = "macos")))]
#[path = "desktop_tests.rs"]
mod tests;
