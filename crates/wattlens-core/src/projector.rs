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

//! Derived views.
//!
//! Pure recomputation of everything the page shows from the current
//! [`SelectionState`] and the data store. Called after every transition.

use crate::baseline::{baseline_for, daily_baseline};
use crate::calendar::{date_label, week_caption};
use crate::config::ViewSettings;
use crate::data_store::UsageDataStore;
use crate::selection::{DaySource, Drill, SelectionState};
use chrono::NaiveDate;
use wattlens_types::{
    BreakdownPanel, Category, CategoryBreakdown, CategoryDelta, CategoryShare, CategorySeries,
    Hour, HourlySeries, TrendDirection, UsageViewModel, WeekNavigation, WeeklySeries,
};

const FULL_OPACITY: f64 = 1.0;

/// Line opacity of the hourly chart while an hour is selected
const SELECTED_LINE_OPACITY: f64 = 0.5;

/// Breakdown shown in the panel
pub fn current_breakdown(state: &SelectionState, store: &UsageDataStore) -> CategoryBreakdown {
    match state.drill {
        Drill::Day {
            day,
            source: DaySource::WeeklyBar,
        } => store
            .weekly_breakdowns(day.week_offset)
            .get(day.date)
            .copied()
            .unwrap_or_else(|| store.hourly_breakdowns(day.date).day_total()),
        Drill::Hour { hour, .. } => store.hourly_breakdowns(state.hourly_view_date).get(hour),
        Drill::Unselected { .. }
        | Drill::Day {
            source: DaySource::HourlyTotal,
            ..
        } => store.hourly_breakdowns(state.hourly_view_date).day_total(),
    }
}

/// Baseline the panel is compared against, if any
pub fn current_comparison(state: &SelectionState) -> Option<CategoryBreakdown> {
    match state.drill {
        Drill::Unselected { compared: false } => None,
        Drill::Unselected { compared: true } | Drill::Day { .. } | Drill::Hour { .. } => {
            Some(baseline_for(state.grain()))
        }
    }
}

/// Signed difference of `value` from `reference` in percent.
///
/// Baselines are strictly positive; a zero reference is a programming error.
pub fn percent_diff(value: f64, reference: f64) -> f64 {
    assert!(
        reference > 0.0,
        "comparison reference must be positive, got {reference}"
    );
    (value - reference) / reference * 100.0
}

/// Per-category deltas of `breakdown` against `comparison`
pub fn compute_deltas(
    breakdown: &CategoryBreakdown,
    comparison: &CategoryBreakdown,
    flat_threshold: f64,
) -> Vec<CategoryDelta> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let percent = percent_diff(breakdown[category], comparison[category]);
            CategoryDelta {
                category,
                reference_kwh: comparison[category],
                percent,
                direction: TrendDirection::from_percent(percent, flat_threshold),
            }
        })
        .collect()
}

fn compute_shares(breakdown: &CategoryBreakdown) -> Vec<CategoryShare> {
    let total = breakdown.total();
    breakdown
        .iter()
        .map(|(category, value)| CategoryShare {
            category,
            percent: if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

fn grain_label(state: &SelectionState) -> String {
    match state.drill {
        Drill::Hour { hour, .. } => format!("{} @ {hour}", state.hourly_view_date),
        Drill::Day { day, .. } => date_label(day.date),
        Drill::Unselected { .. } => date_label(state.hourly_view_date),
    }
}

fn opacity(selected: bool, nothing_selected: bool, settings: &ViewSettings) -> f64 {
    if nothing_selected || selected {
        FULL_OPACITY
    } else {
        settings.dimmed_opacity
    }
}

/// The "current breakdown" panel
pub fn breakdown_panel(
    state: &SelectionState,
    store: &UsageDataStore,
    settings: &ViewSettings,
) -> BreakdownPanel {
    let breakdown = current_breakdown(state, store);
    let comparison = current_comparison(state);
    let deltas = comparison
        .map(|reference| compute_deltas(&breakdown, &reference, settings.flat_threshold_percent))
        .unwrap_or_default();

    BreakdownPanel {
        grain: state.grain(),
        grain_label: grain_label(state),
        breakdown,
        total_kwh: breakdown.total(),
        shares: compute_shares(&breakdown),
        comparison,
        deltas,
    }
}

/// Weekly stacked bars for `week_offset`, highlighting `selected` when visible
pub fn weekly_series(
    store: &UsageDataStore,
    week_offset: u32,
    selected: Option<NaiveDate>,
    settings: &ViewSettings,
) -> WeeklySeries {
    let map = store.weekly_breakdowns(week_offset);
    let days = map.days();

    let bar_opacity: Vec<f64> = days
        .iter()
        .map(|d| opacity(selected == Some(d.date), selected.is_none(), settings))
        .collect();

    let series = Category::ALL
        .into_iter()
        .map(|category| CategorySeries {
            category,
            color: category.color_hex().to_owned(),
            values: days.iter().map(|d| d.breakdown[category]).collect(),
            bar_opacity: bar_opacity.clone(),
        })
        .collect();

    let totals: Vec<f64> = days.iter().map(|d| d.breakdown.total()).collect();
    let baseline_total = daily_baseline().total();
    let baseline_diff_percent = totals
        .iter()
        .map(|total| percent_diff(*total, baseline_total))
        .collect();

    WeeklySeries {
        week_offset,
        dates: days.iter().map(|d| d.date).collect(),
        labels: days.iter().map(|d| d.label.clone()).collect(),
        series,
        totals,
        baseline_total,
        baseline_diff_percent,
        highlight_index: selected.and_then(|date| days.iter().position(|d| d.date == date)),
    }
}

/// Hourly line for `date`, highlighting `selected` hour
pub fn hourly_series(
    store: &UsageDataStore,
    date: NaiveDate,
    selected: Option<Hour>,
    settings: &ViewSettings,
) -> HourlySeries {
    let map = store.hourly_breakdowns(date);

    let point_opacity = Hour::all()
        .map(|hour| opacity(selected == Some(hour), selected.is_none(), settings))
        .collect();
    let point_radius = Hour::all()
        .map(|hour| {
            if selected == Some(hour) {
                settings.selected_point_radius
            } else {
                settings.point_radius
            }
        })
        .collect();

    HourlySeries {
        date,
        labels: Hour::all().collect(),
        totals: map.hourly_totals(),
        point_opacity,
        point_radius,
        line_opacity: if selected.is_some() {
            SELECTED_LINE_OPACITY
        } else {
            FULL_OPACITY
        },
        highlight_index: selected.map(Hour::index),
    }
}

pub fn week_navigation(week_offset: u32) -> WeekNavigation {
    WeekNavigation {
        offset: week_offset,
        caption: week_caption(week_offset),
        can_go_newer: week_offset > 0,
    }
}

/// Full view model for `state`
pub fn project(
    state: &SelectionState,
    store: &UsageDataStore,
    settings: &ViewSettings,
) -> UsageViewModel {
    UsageViewModel {
        navigation: week_navigation(state.week_offset),
        weekly: weekly_series(store, state.week_offset, state.selected_date(), settings),
        panel: breakdown_panel(state, store, settings),
        hourly: hourly_series(
            store,
            state.hourly_view_date,
            state.selected_hour(),
            settings,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::hourly_baseline;
    use crate::selection::SelectionEvent;
    use wattlens_types::Grain;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (SelectionState, UsageDataStore, ViewSettings) {
        let today = ymd(2024, 11, 15);
        (
            SelectionState::initial(today),
            UsageDataStore::new(today),
            ViewSettings::default(),
        )
    }

    #[test]
    fn test_percent_diff_sign() {
        assert!((percent_diff(30.0, 25.0) - 20.0).abs() < 1e-9);
        assert!((percent_diff(20.0, 25.0) + 20.0).abs() < 1e-9);
        assert_eq!(percent_diff(25.0, 25.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "comparison reference must be positive")]
    fn test_percent_diff_zero_reference_panics() {
        percent_diff(1.0, 0.0);
    }

    #[test]
    fn test_initial_panel_has_no_comparison() {
        let (state, store, settings) = setup();
        let panel = breakdown_panel(&state, &store, &settings);

        assert_eq!(panel.grain, Grain::Day);
        assert_eq!(panel.grain_label, "Nov 15");
        assert!(panel.comparison.is_none());
        assert!(panel.deltas.is_empty());
        assert_eq!(
            panel.breakdown,
            store.hourly_breakdowns(ymd(2024, 11, 15)).day_total()
        );
    }

    #[test]
    fn test_shares_sum_to_100() {
        let (state, store, settings) = setup();
        let panel = breakdown_panel(&state, &store, &settings);

        let sum: f64 = panel.shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hour_panel_compares_against_hourly_baseline() {
        let (state, store, settings) = setup();
        let state = state.reduce(
            &SelectionEvent::ClickHourlyPoint(Hour::new(14).unwrap()),
            store.today(),
        );
        let panel = breakdown_panel(&state, &store, &settings);

        assert_eq!(panel.grain, Grain::Hour);
        assert_eq!(panel.grain_label, "2024-11-15 @ 14:00");
        assert_eq!(panel.comparison, Some(hourly_baseline()));
        assert_eq!(panel.deltas.len(), 4);

        let ac = panel.delta(Category::Ac).unwrap();
        let expected = (panel.breakdown[Category::Ac] - hourly_baseline()[Category::Ac])
            / hourly_baseline()[Category::Ac]
            * 100.0;
        assert!((ac.percent - expected).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_dimming_follows_selection() {
        let (state, store, settings) = setup();
        let series = weekly_series(&store, 0, state.selected_date(), &settings);

        assert_eq!(series.highlight_index, None);
        assert!(series.series.iter().all(|s| s.bar_opacity.iter().all(|o| *o == 1.0)));

        let selected = weekly_series(&store, 0, Some(ymd(2024, 11, 13)), &settings);
        assert_eq!(selected.highlight_index, Some(4));
        let ac = selected.series_for(Category::Ac).unwrap();
        assert_eq!(ac.bar_opacity[4], 1.0);
        assert_eq!(ac.bar_opacity[0], settings.dimmed_opacity);
        assert_eq!(ac.color, "#0d6efd");
    }

    #[test]
    fn test_hidden_selection_dims_every_bar() {
        let (_, store, settings) = setup();
        let series = weekly_series(&store, 1, Some(ymd(2024, 11, 13)), &settings);

        assert_eq!(series.highlight_index, None);
        assert!(
            series
                .series
                .iter()
                .all(|s| s.bar_opacity.iter().all(|o| *o == settings.dimmed_opacity))
        );
    }

    #[test]
    fn test_weekly_baseline_overlay() {
        let (_, store, settings) = setup();
        let series = weekly_series(&store, 0, None, &settings);

        assert!((series.baseline_total - 55.0).abs() < 1e-9);
        for (total, diff) in series.totals.iter().zip(&series.baseline_diff_percent) {
            assert!((diff - (total - 55.0) / 55.0 * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hourly_hints() {
        let (_, store, settings) = setup();
        let hour = Hour::new(14).unwrap();
        let series = hourly_series(&store, ymd(2024, 11, 15), Some(hour), &settings);

        assert_eq!(series.labels.len(), 24);
        assert_eq!(series.highlight_index, Some(14));
        assert_eq!(series.point_radius[14], settings.selected_point_radius);
        assert_eq!(series.point_radius[13], settings.point_radius);
        assert_eq!(series.point_opacity[14], 1.0);
        assert_eq!(series.point_opacity[0], settings.dimmed_opacity);
        assert_eq!(series.line_opacity, 0.5);

        let plain = hourly_series(&store, ymd(2024, 11, 15), None, &settings);
        assert_eq!(plain.line_opacity, 1.0);
        assert!(plain.point_opacity.iter().all(|o| *o == 1.0));
    }

    #[test]
    fn test_week_navigation() {
        assert!(!week_navigation(0).can_go_newer);
        assert_eq!(week_navigation(0).caption, "Current Week");
        assert!(week_navigation(2).can_go_newer);
        assert_eq!(week_navigation(2).caption, "2 Weeks Ago");
    }
}
