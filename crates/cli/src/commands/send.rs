// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nudge send` - build a notification from flags and dispatch it.

use crate::backend::Backend;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use nudge_core::{InvalidTimeout, InvalidUrgency, Notification, Timeout, Urgency};

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Single line summarizing the notification
    pub summary: String,

    /// Longer detail text
    pub body: Option<String>,

    /// Application name used by some desktops to group notifications
    #[arg(long = "app-name")]
    pub app_name: Option<String>,

    /// Subtitle line (only rendered on macOS)
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Icon name from the icon theme, or an absolute path
    #[arg(long)]
    pub icon: Option<String>,

    /// Named sound to play
    #[arg(long)]
    pub sound: Option<String>,

    /// Path to an image shown in the notification body
    #[arg(long)]
    pub image: Option<String>,

    /// Urgency level: low, normal, or critical
    #[arg(long, value_parser = parse_urgency)]
    pub urgency: Option<Urgency>,

    /// Expiry: "default", "never", or milliseconds
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Timeout>,

    /// Replace the notification with this server id
    #[arg(long = "replace-id")]
    pub replace_id: Option<u32>,

    /// Dispatch backend
    #[arg(long, value_enum, default_value_t)]
    pub backend: Backend,
}

fn parse_urgency(s: &str) -> Result<Urgency, InvalidUrgency> {
    s.parse()
}

fn parse_timeout(s: &str) -> Result<Timeout, InvalidTimeout> {
    s.parse()
}

fn build_notification(args: &SendArgs) -> Notification {
    let mut n = Notification::new();
    n.summary(&args.summary);
    if let Some(body) = &args.body {
        n.body(body);
    }
    if let Some(app_name) = &args.app_name {
        n.appname(app_name);
    }
    if let Some(subtitle) = &args.subtitle {
        n.subtitle(subtitle);
    }
    if let Some(icon) = &args.icon {
        n.icon(icon);
    }
    if let Some(sound) = &args.sound {
        n.sound_name(sound);
    }
    if let Some(image) = &args.image {
        n.image_path(image);
    }
    if let Some(urgency) = args.urgency {
        n.urgency(urgency);
    }
    if let Some(timeout) = args.timeout {
        n.timeout(timeout);
    }
    if let Some(id) = args.replace_id {
        n.id(id);
    }
    n.finalize()
}

pub async fn run(args: SendArgs, format: OutputFormat) -> Result<()> {
    let dispatcher = args.backend.dispatcher();
    let notification = build_notification(&args);
    let handle = notification.show_on(dispatcher).await?;

    match format {
        OutputFormat::Text => println!("{}", handle.id()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": handle.id() })),
    }
    Ok(())
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
