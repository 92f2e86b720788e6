// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display-system identification.

use serde::{Deserialize, Serialize};

/// What the display system reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInformation {
    /// Product name of the server.
    pub name: String,
    /// Vendor name.
    pub vendor: String,
    /// The server's version string.
    pub version: String,
    /// The notification specification version the server complies with.
    pub spec_version: String,
}
