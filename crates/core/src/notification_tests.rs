// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Notification;
use crate::{Timeout, Urgency};
use std::time::Duration;

#[test]
fn chained_setters_accumulate() {
    let n = Notification::new()
        .summary("The summary")
        .body("The body")
        .urgency(Urgency::Critical)
        .finalize();

    assert_eq!(n.summary, "The summary");
    assert_eq!(n.body, "The body");
    assert_eq!(n.urgency, Some(Urgency::Critical));
    assert_eq!(n.subtitle, None);
    assert_eq!(n.timeout, Timeout::Default);
}

#[test]
fn icon_leaves_other_fields_untouched() {
    let mut n = Notification::new()
        .summary("The summary")
        .body("The body")
        .urgency(Urgency::Critical)
        .finalize();
    n.icon("firefox");

    assert_eq!(n.icon, "firefox");
    assert_eq!(n.summary, "The summary");
    assert_eq!(n.body, "The body");
    assert_eq!(n.subtitle, None);
    assert_eq!(n.timeout, Timeout::Default);
}

#[test]
fn empty_notification_defaults() {
    let n = Notification::new();

    assert_eq!(n.summary, "");
    assert_eq!(n.body, "");
    assert_eq!(n.icon, "");
    assert_eq!(n.subtitle, None);
    assert_eq!(n.sound_name, None);
    assert_eq!(n.image_path, None);
    assert_eq!(n.urgency, None);
    assert_eq!(n.timeout, Timeout::Default);
    assert_eq!(n.id, None);
}

#[test]
fn appname_defaults_to_executable_name() {
    // The test binary always has a name.
    assert!(!Notification::new().appname.is_empty());
}

#[test]
fn auto_icon_uses_executable_name() {
    let n = Notification::new().auto_icon().finalize();
    assert_eq!(n.icon, n.appname);
}

#[test]
fn timeout_accepts_conventional_encodings() {
    assert_eq!(
        Notification::new().timeout(-1).finalize().timeout,
        Timeout::Default
    );
    assert_eq!(
        Notification::new().timeout(0).finalize().timeout,
        Timeout::Never
    );
    assert_eq!(
        Notification::new().timeout(750).finalize().timeout,
        Timeout::Milliseconds(750)
    );
    assert_eq!(
        Notification::new()
            .expires_after(Duration::from_secs(2))
            .finalize()
            .timeout,
        Timeout::Milliseconds(2000)
    );
}

#[test]
fn subtitle_and_optional_fields_record() {
    let n = Notification::new()
        .subtitle("below the title")
        .sound_name("message-new-instant")
        .image_path("/tmp/shot.png")
        .id(42)
        .finalize();

    assert_eq!(n.subtitle.as_deref(), Some("below the title"));
    assert_eq!(n.sound_name.as_deref(), Some("message-new-instant"));
    assert_eq!(n.image_path.as_deref(), Some("/tmp/shot.png"));
    assert_eq!(n.id, Some(42));
}

#[test]
fn finalize_detaches_from_the_builder() {
    let mut builder = Notification::new();
    builder.summary("first");
    let snapshot = builder.finalize();
    builder.summary("second");

    assert_eq!(snapshot.summary, "first");
    assert_eq!(builder.summary, "second");
}
