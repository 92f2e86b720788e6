// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification builder.

use crate::{DispatchError, Dispatcher, NotificationHandle, Timeout, Urgency};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Accumulates display parameters before dispatch.
///
/// Fields are public and double as the accessors; the chainable setters
/// exist so a notification can be assembled in one expression:
///
/// ```
/// use nudge_core::{Notification, Urgency};
///
/// let n = Notification::new()
///     .summary("Build finished")
///     .body("3 warnings")
///     .urgency(Urgency::Normal)
///     .finalize();
/// assert_eq!(n.summary, "Build finished");
/// ```
///
/// Most fields start empty; `appname` is initialized with the name of the
/// current executable, which some desktops use to group notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Application name, used by some desktops to group notifications.
    pub appname: String,
    /// Single line summarizing the content.
    pub summary: String,
    /// Subtitle line. Only rendered on macOS.
    pub subtitle: Option<String>,
    /// Detail text. May span multiple lines; servers that advertise
    /// body-markup render simple HTML in it.
    pub body: String,
    /// Icon name from the icon theme, or an absolute file path.
    pub icon: String,
    /// Named sound to play alongside the notification.
    pub sound_name: Option<String>,
    /// Path to an image shown in the notification body.
    pub image_path: Option<String>,
    /// Priority treatment requested from the display system. Absent means
    /// the server's own default.
    pub urgency: Option<Urgency>,
    /// Lifetime of the notification. Often not respected by servers.
    pub timeout: Timeout,
    /// Server-assigned id of a notification to replace.
    pub id: Option<u32>,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            appname: exe_name().unwrap_or_default(),
            summary: String::new(),
            subtitle: None,
            body: String::new(),
            icon: String::new(),
            sound_name: None,
            image_path: None,
            urgency: None,
            timeout: Timeout::Default,
            id: None,
        }
    }
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the appname field.
    pub fn appname(&mut self, appname: &str) -> &mut Self {
        self.appname = appname.to_string();
        self
    }

    /// Set the summary.
    ///
    /// Often acts as the title of the notification. For more elaborate
    /// content use the body field.
    pub fn summary(&mut self, summary: &str) -> &mut Self {
        self.summary = summary.to_string();
        self
    }

    /// Set the subtitle. Only rendered on macOS.
    pub fn subtitle(&mut self, subtitle: &str) -> &mut Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Set the detail text.
    pub fn body(&mut self, body: &str) -> &mut Self {
        self.body = body.to_string();
        self
    }

    /// Set the icon field to a theme name or absolute path.
    pub fn icon(&mut self, icon: &str) -> &mut Self {
        self.icon = icon.to_string();
        self
    }

    /// Set the icon field from the current executable's name.
    pub fn auto_icon(&mut self) -> &mut Self {
        self.icon = exe_name().unwrap_or_default();
        self
    }

    /// Set the sound to play.
    pub fn sound_name(&mut self, name: &str) -> &mut Self {
        self.sound_name = Some(name.to_string());
        self
    }

    /// Set the path of an image shown in the notification body.
    pub fn image_path(&mut self, path: &str) -> &mut Self {
        self.image_path = Some(path.to_string());
        self
    }

    /// Request a priority treatment.
    pub fn urgency(&mut self, urgency: Urgency) -> &mut Self {
        self.urgency = Some(urgency);
        self
    }

    /// Set the timeout. Accepts [`Timeout`], the conventional `i32`
    /// encoding, or a [`Duration`].
    pub fn timeout<T: Into<Timeout>>(&mut self, timeout: T) -> &mut Self {
        self.timeout = timeout.into();
        self
    }

    /// Expire after the given duration. Alias for [`Notification::timeout`].
    pub fn expires_after(&mut self, duration: Duration) -> &mut Self {
        self.timeout(duration)
    }

    /// Ask the server to replace the notification with this id.
    pub fn id(&mut self, id: u32) -> &mut Self {
        self.id = Some(id);
        self
    }

    /// Clone the accumulated value out of a builder chain.
    pub fn finalize(&self) -> Notification {
        self.clone()
    }

    /// Dispatch the accumulated parameters to a display system.
    ///
    /// Returns a handle representing the now-displayed notification. The
    /// builder itself is untouched and can be shown again.
    pub async fn show_on(
        &self,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<NotificationHandle, DispatchError> {
        let id = dispatcher.dispatch(self).await?;
        Ok(NotificationHandle::new(id, self.clone(), dispatcher))
    }
}

fn exe_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let stem = exe.file_stem()?;
    Some(stem.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
