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

//! Fixed "last month average" reference breakdowns.

use wattlens_types::{CategoryBreakdown, Grain};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Average daily usage per category over the previous period (kWh)
pub const DAILY_BASELINE: CategoryBreakdown =
    CategoryBreakdown::from_values([25.0, 18.0, 8.0, 4.0]);

pub fn daily_baseline() -> CategoryBreakdown {
    DAILY_BASELINE
}

/// Daily baseline spread evenly over the hours of a day
pub fn hourly_baseline() -> CategoryBreakdown {
    DAILY_BASELINE.scaled(HOURS_PER_DAY.recip())
}

pub fn baseline_for(grain: Grain) -> CategoryBreakdown {
    match grain {
        Grain::Day => daily_baseline(),
        Grain::Hour => hourly_baseline(),
    }
}
