// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification urgency levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Priority level influencing how the display system treats a notification.
///
/// Critical notifications typically ignore timeouts and stay on screen until
/// dismissed; low ones may be coalesced or hidden entirely. Whether any of
/// that happens is up to the display system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Normal,
    Critical,
}

impl Urgency {
    /// Numeric level used by the conventional hint encoding (0/1/2).
    pub fn level(self) -> u8 {
        match self {
            Urgency::Low => 0,
            Urgency::Normal => 1,
            Urgency::Critical => 2,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

/// Error for urgency values outside the three known levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid urgency: {0:?} (expected \"low\", \"normal\", or \"critical\")")]
pub struct InvalidUrgency(pub String);

impl FromStr for Urgency {
    type Err = InvalidUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "normal" => Ok(Urgency::Normal),
            "critical" => Ok(Urgency::Critical),
            _ => Err(InvalidUrgency(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Urgency {
    type Error = InvalidUrgency;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Urgency::Low),
            1 => Ok(Urgency::Normal),
            2 => Ok(Urgency::Critical),
            _ => Err(InvalidUrgency(level.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "urgency_tests.rs"]
mod tests;
