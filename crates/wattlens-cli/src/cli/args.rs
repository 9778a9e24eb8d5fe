// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of WattLens.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wattlens")]
#[command(author, version, about = "WattLens usage breakdown viewer")]
#[command(
    long_about = "Inspect the synthetic household usage breakdown from the terminal.\n\
    \nRenders the weekly chart, the hourly chart and the breakdown panel exactly as the\n\
    page would receive them, and replays scripted clicks to exercise the drill-down.\n\
    \nExamples:\n  \
    wattlens show                              # Current week, today\n  \
    wattlens show --today 2024-11-15 --json    # Full view model as JSON\n  \
    wattlens replay --config clicks.toml       # Replay a click script"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the view for a freshly mounted session
    Show(ShowArgs),

    /// Replay the [[events]] of a TOML config and print the panel after each one
    #[command(
        long_about = "Load a WattLens TOML config and apply its [[events]] in order.\n\
        \nThe breakdown panel is printed after every event; the full view is printed at the end.\n\
        Run `wattlens example-config` for a documented starting point.\n\
        \nExamples:\n  \
        wattlens replay --config clicks.toml\n  \
        wattlens replay --config clicks.toml --json"
    )]
    Replay(ReplayArgs),

    /// Print an example configuration file
    ExampleConfig,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Pin "today" (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<String>,

    /// Weeks to page back from the current week
    #[arg(long, default_value_t = 0)]
    pub week_offset: u32,

    /// Show the hourly chart for this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Print the view model as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Path to the TOML configuration with [[events]]
    #[arg(long)]
    pub config: PathBuf,

    /// Print the final view model as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
