// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification expiry timeouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How long a notification stays on screen.
///
/// `Default` is the library-wide sentinel: the display system picks its own
/// expiry. Servers are free to ignore the value entirely, and many do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeout {
    /// Let the display system decide.
    #[default]
    Default,
    /// Stay on screen until dismissed.
    Never,
    /// Expire after the given number of milliseconds.
    Milliseconds(u32),
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeout::Default => write!(f, "default"),
            Timeout::Never => write!(f, "never"),
            Timeout::Milliseconds(ms) => write!(f, "{}ms", ms),
        }
    }
}

/// Conventional `i32` encoding: `-1` default, `0` never, positive = millis.
///
/// Negative values other than `-1` fall back to `Default` rather than
/// erroring, matching the display system's own lenient parsing.
impl From<i32> for Timeout {
    fn from(ms: i32) -> Timeout {
        match ms {
            0 => Timeout::Never,
            t if t > 0 => Timeout::Milliseconds(t as u32),
            _ => Timeout::Default,
        }
    }
}

impl From<Timeout> for i32 {
    fn from(timeout: Timeout) -> i32 {
        match timeout {
            Timeout::Default => -1,
            Timeout::Never => 0,
            Timeout::Milliseconds(ms) => i32::try_from(ms).unwrap_or(i32::MAX),
        }
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Timeout {
        Timeout::Milliseconds(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
    }
}

/// Error for timeout strings that are neither a keyword nor a millisecond count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timeout: {0:?} (expected \"default\", \"never\", or milliseconds)")]
pub struct InvalidTimeout(pub String);

impl FromStr for Timeout {
    type Err = InvalidTimeout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Timeout::Default),
            "never" => Ok(Timeout::Never),
            _ => match s.parse::<u32>() {
                Ok(0) => Ok(Timeout::Never),
                Ok(ms) => Ok(Timeout::Milliseconds(ms)),
                Err(_) => Err(InvalidTimeout(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
