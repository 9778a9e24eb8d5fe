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

//! CLI entry point for the WattLens viewer

mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands, ReplayArgs, ShowArgs, TableFormatter};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wattlens_core::{SessionSettings, UsageSession, ViewSettings, WattLensConfig};
use wattlens_types::UsageViewModel;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wattlens=info,wattlens_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => show_command(&args),
        Commands::Replay(args) => replay_command(&args),
        Commands::ExampleConfig => {
            print!("{}", WattLensConfig::example_toml());
            Ok(())
        }
    }
}

fn parse_date(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").with_context(|| {
        format!(
            "Invalid {flag} value: '{value}'\n\n\
            Expected format: YYYY-MM-DD (e.g., 2024-11-15)"
        )
    })
}

fn print_view(view: &UsageViewModel, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(view).context("Failed to serialize view model")?;
        println!("{rendered}");
    } else {
        print!("{}", TableFormatter::format_view(view));
    }
    Ok(())
}

fn show_command(args: &ShowArgs) -> Result<()> {
    let today = args
        .today
        .as_deref()
        .map(|d| parse_date(d, "--today"))
        .transpose()?;

    let mut session = UsageSession::from_settings(
        &SessionSettings { today },
        ViewSettings::default(),
    )?;

    if args.week_offset > 0 {
        let delta = i32::try_from(args.week_offset).context("--week-offset is too large")?;
        session.on_week_offset_change(delta);
    }
    if let Some(date) = &args.date {
        session
            .on_date_picked(date)
            .with_context(|| format!("Invalid --date value: '{date}'"))?;
    }

    print_view(&session.view_model(), args.json)
}

fn replay_command(args: &ReplayArgs) -> Result<()> {
    let config = WattLensConfig::from_file(&args.config).with_context(|| {
        format!("Failed to load config file: {}", args.config.display())
    })?;

    let mut session = UsageSession::from_settings(&config.session, config.view)?;
    info!(
        events = config.events.len(),
        today = %session.today(),
        "Replaying interaction script"
    );

    for (step, event) in config.events.iter().enumerate() {
        session
            .apply_scripted(event)
            .with_context(|| format!("Event #{} ({event:?}) failed", step + 1))?;

        if !args.json {
            println!("#{} {event:?}", step + 1);
            print!("{}", TableFormatter::format_panel(&session.breakdown_panel()));
            println!();
        }
    }

    print_view(&session.view_model(), args.json)
}
