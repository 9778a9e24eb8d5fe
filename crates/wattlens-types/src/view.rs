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

//! View-model structs consumed by the rendering layer.
//!
//! These are recomputed from scratch after every interaction; nothing here
//! holds state of its own.

use crate::category::{Category, CategoryBreakdown};
use crate::hour::Hour;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time resolution of a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grain {
    Day,
    Hour,
}

/// Direction of a comparison delta. Higher usage is worse, so `Up` is bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Classify a signed percentage; anything within `flat_threshold` of zero is flat
    pub fn from_percent(percent: f64, flat_threshold: f64) -> Self {
        if percent.abs() < flat_threshold {
            TrendDirection::Flat
        } else if percent > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}

/// One stacked dataset of the weekly bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub category: Category,
    pub color: String,
    /// kWh per day, oldest day first
    pub values: Vec<f64>,
    /// Opacity per bar (1.0 = full, lower = dimmed)
    pub bar_opacity: Vec<f64>,
}

/// Weekly stacked bar chart data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeries {
    pub week_offset: u32,
    /// Concrete calendar day behind each bar
    pub dates: Vec<NaiveDate>,
    /// Short day labels ("Nov 15"), oldest first
    pub labels: Vec<String>,
    pub series: Vec<CategorySeries>,
    /// Sum of all categories per bar
    pub totals: Vec<f64>,
    /// Daily baseline total drawn as a reference line over every bar
    pub baseline_total: f64,
    /// Per bar: (total - baseline_total) / baseline_total * 100
    pub baseline_diff_percent: Vec<f64>,
    /// Index of the selected bar, if it is visible in this window
    pub highlight_index: Option<usize>,
}

impl WeeklySeries {
    pub fn series_for(&self, category: Category) -> Option<&CategorySeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Hourly line chart data for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub date: NaiveDate,
    pub labels: Vec<Hour>,
    /// Sum of all categories per hour
    pub totals: Vec<f64>,
    pub point_opacity: Vec<f64>,
    pub point_radius: Vec<f64>,
    pub line_opacity: f64,
    pub highlight_index: Option<usize>,
}

/// Comparison of one category against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: Category,
    pub reference_kwh: f64,
    /// Signed percentage difference from the reference
    pub percent: f64,
    pub direction: TrendDirection,
}

/// Share of one category in the breakdown total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub percent: f64,
}

/// The "current breakdown" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownPanel {
    pub grain: Grain,
    pub grain_label: String,
    pub breakdown: CategoryBreakdown,
    pub total_kwh: f64,
    pub shares: Vec<CategoryShare>,
    pub comparison: Option<CategoryBreakdown>,
    /// Empty when there is no comparison
    pub deltas: Vec<CategoryDelta>,
}

impl BreakdownPanel {
    pub fn delta(&self, category: Category) -> Option<&CategoryDelta> {
        self.deltas.iter().find(|d| d.category == category)
    }

    pub fn share(&self, category: Category) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.percent)
    }
}

/// Week pager state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekNavigation {
    pub offset: u32,
    pub caption: String,
    /// Moving towards the current week is possible
    pub can_go_newer: bool,
}

/// Everything the page renders for one selection state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageViewModel {
    pub navigation: WeekNavigation,
    pub weekly: WeeklySeries,
    pub panel: BreakdownPanel,
    pub hourly: HourlySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction_thresholds() {
        assert_eq!(TrendDirection::from_percent(12.5, 0.05), TrendDirection::Up);
        assert_eq!(TrendDirection::from_percent(-3.0, 0.05), TrendDirection::Down);
        assert_eq!(TrendDirection::from_percent(0.04, 0.05), TrendDirection::Flat);
        assert_eq!(TrendDirection::from_percent(-0.0, 0.05), TrendDirection::Flat);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Up).unwrap();
        assert_eq!(json, "\"up\"");
        let json = serde_json::to_string(&Grain::Hour).unwrap();
        assert_eq!(json, "\"hour\"");
    }
}
