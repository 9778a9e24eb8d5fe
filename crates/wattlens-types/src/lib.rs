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

//! Shared types for WattLens.
//!
//! Everything in here is plain data: the category set, per-category
//! breakdowns, hour labels and the view-model structs handed to the
//! rendering layer.

pub mod category;
pub mod hour;
pub mod view;

pub use category::{Category, CategoryBreakdown};
pub use hour::{Hour, ParseHourError};
pub use view::{
    BreakdownPanel, CategoryDelta, CategoryShare, CategorySeries, Grain, HourlySeries,
    TrendDirection, UsageViewModel, WeekNavigation, WeeklySeries,
};
