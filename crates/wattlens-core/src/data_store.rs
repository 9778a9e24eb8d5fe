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

//! Synthetic usage data.
//!
//! Stands in for a metering backend: every figure is derived from
//! [`seeded_value`] so a given day or hour always shows the same numbers.
//! Generated maps are memoized per week offset and per calendar date for
//! the lifetime of the store.

use crate::calendar::{WeekWindow, date_label};
use crate::seeded::seeded_value;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use wattlens_types::{CategoryBreakdown, Hour};

/// Per-category value range: `lower + seeded * range`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBounds {
    pub lower: CategoryBreakdown,
    pub range: CategoryBreakdown,
}

/// Bounds for one day of usage (kWh/day)
pub const DAILY_BOUNDS: CategoryBounds = CategoryBounds {
    lower: CategoryBreakdown::from_values([20.0, 15.0, 10.0, 5.0]),
    range: CategoryBreakdown::from_values([10.0, 8.0, 5.0, 3.0]),
};

/// Bounds for one hour of usage: the daily bounds scaled by 1/20 (kWh/h)
pub const HOURLY_BOUNDS: CategoryBounds = CategoryBounds {
    lower: CategoryBreakdown::from_values([1.0, 0.75, 0.5, 0.25]),
    range: CategoryBreakdown::from_values([0.5, 0.4, 0.25, 0.15]),
};

impl CategoryBounds {
    /// Draw one breakdown; each category is seeded with `seed_prefix ++ name`
    pub fn sample(&self, seed_prefix: &str) -> CategoryBreakdown {
        CategoryBreakdown::from_fn(|category| {
            let key = format!("{seed_prefix}{}", category.name());
            self.lower[category] + seeded_value(&key) * self.range[category]
        })
    }
}

/// Usage of one day of a week window
#[derive(Debug, Clone, PartialEq)]
pub struct DayBreakdown {
    pub date: NaiveDate,
    pub label: String,
    pub breakdown: CategoryBreakdown,
}

/// Daily breakdowns for the seven days of one week window
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyDataMap {
    days: Vec<DayBreakdown>,
}

impl WeeklyDataMap {
    /// Generate the map for `window`. Seeds are `label ++ offset ++ category`.
    pub fn generate(window: &WeekWindow) -> Self {
        let offset = window.offset();
        let days = window
            .days()
            .iter()
            .map(|&date| {
                let label = date_label(date);
                let breakdown = DAILY_BOUNDS.sample(&format!("{label}{offset}"));
                DayBreakdown {
                    date,
                    label,
                    breakdown,
                }
            })
            .collect();

        Self { days }
    }

    /// Days oldest to newest
    pub fn days(&self) -> &[DayBreakdown] {
        &self.days
    }

    pub fn get(&self, date: NaiveDate) -> Option<&CategoryBreakdown> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| &d.breakdown)
    }

    pub fn by_label(&self, label: &str) -> Option<&CategoryBreakdown> {
        self.days
            .iter()
            .find(|d| d.label == label)
            .map(|d| &d.breakdown)
    }
}

/// Hourly breakdowns for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyDataMap {
    hours: Vec<CategoryBreakdown>,
}

impl HourlyDataMap {
    /// Generate the map for `date`. Seeds are `YYYY-MM-DD ++ H:00 ++ category`.
    pub fn generate(date: NaiveDate) -> Self {
        let hours = Hour::all()
            .map(|hour| HOURLY_BOUNDS.sample(&format!("{date}{hour}")))
            .collect();
        Self { hours }
    }

    pub fn get(&self, hour: Hour) -> CategoryBreakdown {
        self.hours[hour.index()]
    }

    /// `(hour, breakdown)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (Hour, &CategoryBreakdown)> + '_ {
        Hour::all().zip(self.hours.iter())
    }

    /// Sum over all 24 hours
    pub fn day_total(&self) -> CategoryBreakdown {
        self.hours.iter().sum()
    }

    /// Total usage per hour
    pub fn hourly_totals(&self) -> Vec<f64> {
        self.hours.iter().map(CategoryBreakdown::total).collect()
    }
}

/// Session-scoped, memoizing source of synthetic usage
#[derive(Debug)]
pub struct UsageDataStore {
    today: NaiveDate,
    weekly: Mutex<HashMap<u32, Arc<WeeklyDataMap>>>,
    hourly: Mutex<HashMap<NaiveDate, Arc<HourlyDataMap>>>,
}

impl UsageDataStore {
    /// Store whose week windows are anchored on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            weekly: Mutex::new(HashMap::new()),
            hourly: Mutex::new(HashMap::new()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_window(&self, week_offset: u32) -> WeekWindow {
        WeekWindow::resolve(self.today, week_offset)
    }

    /// Daily breakdowns for the week `week_offset` weeks back
    pub fn weekly_breakdowns(&self, week_offset: u32) -> Arc<WeeklyDataMap> {
        let mut cache = self.weekly.lock();
        Arc::clone(cache.entry(week_offset).or_insert_with(|| {
            debug!(week_offset, "Generating weekly usage");
            Arc::new(WeeklyDataMap::generate(&self.week_window(week_offset)))
        }))
    }

    /// Hourly breakdowns for `date`
    pub fn hourly_breakdowns(&self, date: NaiveDate) -> Arc<HourlyDataMap> {
        let mut cache = self.hourly.lock();
        Arc::clone(cache.entry(date).or_insert_with(|| {
            debug!(%date, "Generating hourly usage");
            Arc::new(HourlyDataMap::generate(date))
        }))
    }

    pub fn cached_weeks(&self) -> usize {
        self.weekly.lock().len()
    }

    pub fn cached_days(&self) -> usize {
        self.hourly.lock().len()
    }
}
