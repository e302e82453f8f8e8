// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

//! Renames itself, prints what happened, and optionally lingers so the new
//! title can be checked with `ps -o pid,comm,args`.

use std::{path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use procname::{Config, Status};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "retitle", version, about = "Rename the running process")]
struct Cli {
    /// New process title
    name: String,
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// Seconds to sleep after renaming
    #[arg(long = "hold", default_value_t = 0)]
    hold: u64,
}

#[derive(Serialize)]
struct Report {
    pid: u32,
    requested: String,
    title: String,
    capacity: usize,
    kernel_name: Option<String>,
    status: Status,
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        return Config::from_file(config_path).with_context(|| {
            format!(
                "Failed to load config from custom path: {}",
                config_path.display()
            )
        });
    }

    Config::load_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    procname::utils::init_logging(cli.verbose).context("Failed to initialize logging")?;

    let config = load_config(&cli)?;

    procname::initialize_with(config).context("Failed to capture argument vector")?;

    let before = procname::get_name()?;
    tracing::info!(">> Renaming {} -> {}", before, cli.name);

    let status = procname::set_name(&cli.name).context("Failed to set process title")?;
    if !status.is_fully_set() {
        tracing::warn!("kernel short name not updated: {:?}", status);
    }

    let report = Report {
        pid: std::process::id(),
        requested: cli.name.clone(),
        title: procname::get_name()?,
        capacity: procname::capacity()?,
        kernel_name: procname::kernel_name().ok(),
        status,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if cli.hold > 0 {
        tracing::info!(">> Holding for {}s", cli.hold);
        thread::sleep(Duration::from_secs(cli.hold));
    }

    Ok(())
}
