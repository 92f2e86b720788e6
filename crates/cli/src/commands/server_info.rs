// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nudge server-info` - identify the notification server.

use crate::backend::Backend;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ServerInfoArgs {
    /// Dispatch backend
    #[arg(long, value_enum, default_value_t)]
    pub backend: Backend,
}

pub async fn run(args: ServerInfoArgs, format: OutputFormat) -> Result<()> {
    let info = args.backend.dispatcher().server_information().await?;

    match format {
        OutputFormat::Text => {
            println!("name:         {}", info.name);
            println!("vendor:       {}", info.vendor);
            println!("version:      {}", info.version);
            println!("spec version: {}", info.spec_version);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
    }
    Ok(())
}
