//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn nudge_no_args_shows_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn nudge_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("send")
        .stdout_has("server-info");
}

#[test]
fn nudge_send_help_shows_flags() {
    cli()
        .args(&["send", "--help"])
        .passes()
        .stdout_has("--urgency")
        .stdout_has("--timeout")
        .stdout_has("--icon")
        .stdout_has("--backend");
}

#[test]
fn nudge_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
