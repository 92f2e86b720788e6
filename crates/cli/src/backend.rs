// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend selection.

use clap::ValueEnum;
use nudge_adapters::{CommandDispatcher, DesktopDispatcher, NoopDispatcher};
use nudge_core::Dispatcher;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum Backend {
    /// Platform notification system
    #[default]
    Desktop,
    /// Shell out to notify-send
    Command,
    /// Discard notifications
    Noop,
}

impl Backend {
    pub fn dispatcher(self) -> Arc<dyn Dispatcher> {
        match self {
            Backend::Desktop => Arc::new(DesktopDispatcher::new()),
            Backend::Command => Arc::new(CommandDispatcher::new()),
            Backend::Noop => Arc::new(NoopDispatcher::new()),
        }
    }
}
