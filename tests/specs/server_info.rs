//! `nudge server-info` specs

use crate::prelude::*;

#[test]
fn server_info_on_noop_reports_unsupported() {
    cli()
        .args(&["server-info", "--backend", "noop"])
        .fails()
        .stderr_has("not supported");
}
