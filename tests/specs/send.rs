//! `nudge send` specs
//!
//! All sends go through the noop backend so specs never touch a real
//! notification daemon.

use crate::prelude::*;

#[test]
fn send_prints_the_assigned_id() {
    cli()
        .args(&["send", "The summary", "The body", "--backend", "noop"])
        .passes()
        .stdout_eq("0\n");
}

#[test]
fn send_with_icon_still_passes() {
    cli()
        .args(&[
            "send",
            "The summary",
            "--icon",
            "firefox",
            "--backend",
            "noop",
        ])
        .passes()
        .stdout_eq("0\n");
}

#[test]
fn send_json_output_reports_the_id() {
    let out = cli()
        .args(&["send", "hi", "--backend", "noop", "-o", "json"])
        .passes()
        .stdout();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["id"], 0);
}

#[test]
fn send_accepts_urgency_and_timeout_flags() {
    cli()
        .args(&[
            "send",
            "disk almost full",
            "--urgency",
            "critical",
            "--timeout",
            "never",
            "--backend",
            "noop",
        ])
        .passes();
}

#[test]
fn send_rejects_unknown_urgency() {
    cli()
        .args(&["send", "hi", "--urgency", "shouty", "--backend", "noop"])
        .fails()
        .stderr_has("invalid urgency");
}

#[test]
fn send_rejects_unknown_timeout() {
    cli()
        .args(&["send", "hi", "--timeout", "soonish", "--backend", "noop"])
        .fails()
        .stderr_has("invalid timeout");
}

#[test]
fn send_requires_a_summary() {
    cli().args(&["send"]).fails().stderr_has("Usage:");
}
