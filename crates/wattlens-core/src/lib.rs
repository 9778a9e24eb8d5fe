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

//! WattLens core: synthetic usage data and the drill-down selection engine.
//!
//! The page shows three coupled views of household energy usage: a weekly
//! stacked bar chart, an hourly line chart for one day, and a breakdown
//! panel comparing the current selection against last month's average.
//! Clicks feed a pure state machine ([`selection`]); after every
//! transition the [`projector`] re-derives all three views from the new
//! state and the memoized [`data_store`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use wattlens_core::UsageSession;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
//! let mut session = UsageSession::new(today);
//!
//! session.click_weekly_bar("Nov 15");
//! let panel = session.breakdown_panel();
//! assert_eq!(panel.grain_label, "Nov 15");
//! assert!(panel.comparison.is_some());
//! ```

pub mod baseline;
pub mod calendar;
pub mod config;
pub mod data_store;
pub mod error;
pub mod projector;
pub mod seeded;
pub mod selection;
pub mod session;

pub use baseline::{daily_baseline, hourly_baseline};
pub use calendar::{WeekWindow, date_label};
pub use config::{ScriptedEvent, SessionSettings, ViewSettings, WattLensConfig};
pub use data_store::{HourlyDataMap, UsageDataStore, WeeklyDataMap};
pub use error::{ViewError, ViewResult};
pub use seeded::seeded_value;
pub use selection::{DaySource, Drill, Phase, SelectedDay, SelectionEvent, SelectionState};
pub use session::UsageSession;
