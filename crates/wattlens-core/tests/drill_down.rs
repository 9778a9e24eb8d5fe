#![allow(clippy::float_cmp)]
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

use chrono::{Duration, NaiveDate};

use wattlens_core::{
    Phase, SelectionState, UsageDataStore, UsageSession, daily_baseline, hourly_baseline,
    seeded_value,
};
use wattlens_types::{Category, Grain, Hour, TrendDirection};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn nov_15() -> NaiveDate {
    ymd(2024, 11, 15)
}

fn hour(h: u8) -> Hour {
    Hour::new(h).expect("valid hour")
}

// ---------------------------------------------------------------------------
// Determinism and completeness
// ---------------------------------------------------------------------------

#[test]
fn test_seeded_value_is_pure() {
    for key in ["Nov 150AC", "2024-11-1514:00Laundry", "Dec 2812Other"] {
        assert_eq!(seeded_value(key).to_bits(), seeded_value(key).to_bits());
    }
}

#[test]
fn test_separate_sessions_see_identical_data() {
    let a = UsageSession::new(nov_15());
    let b = UsageSession::new(nov_15());

    assert_eq!(a.view_model(), b.view_model());
    assert_eq!(
        *a.store().hourly_breakdowns(ymd(2023, 6, 1)),
        *b.store().hourly_breakdowns(ymd(2023, 6, 1))
    );
}

#[test]
fn test_every_generated_breakdown_is_complete_and_positive() {
    let store = UsageDataStore::new(nov_15());

    for offset in 0..4 {
        for day in store.weekly_breakdowns(offset).days() {
            assert_eq!(day.breakdown.iter().count(), Category::COUNT);
            assert!(day.breakdown.min_value() > 0.0, "{} has a zero category", day.label);
        }
    }
    for (h, breakdown) in store.hourly_breakdowns(nov_15()).iter() {
        assert_eq!(breakdown.iter().count(), Category::COUNT);
        assert!(breakdown.min_value() > 0.0, "{h} has a zero category");
    }
}

// ---------------------------------------------------------------------------
// State machine properties
// ---------------------------------------------------------------------------

#[test]
fn test_weekly_bar_toggle_is_idempotent() {
    let mut session = UsageSession::new(nov_15());
    let before = *session.state();
    let panel_before = session.breakdown_panel();

    session.click_weekly_bar("Nov 12");
    assert_eq!(session.state().phase(), Phase::DaySelected);
    assert_eq!(session.state().hourly_view_date, ymd(2024, 11, 12));

    session.click_weekly_bar("Nov 12");
    assert_eq!(*session.state(), before);
    assert_eq!(session.breakdown_panel(), panel_before);
}

#[test]
fn test_unselected_panel_is_sum_of_hours() {
    let mut session = UsageSession::new(nov_15());
    session.pick_date(ymd(2024, 3, 9));
    assert_eq!(session.state().phase(), Phase::Unselected);

    let hourly = session.store().hourly_breakdowns(ymd(2024, 3, 9));
    let current = session.current_breakdown();
    for category in Category::ALL {
        let expected: f64 = hourly.iter().map(|(_, b)| b[category]).sum();
        assert!(
            (current[category] - expected).abs() < 1e-9,
            "{category}: {} != {expected}",
            current[category]
        );
    }
    assert!(session.current_comparison().is_none());
}

// ---------------------------------------------------------------------------
// Drill-down scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_drill_down_week_day_hour_and_back() {
    let mut session = UsageSession::new(nov_15());
    assert_eq!(session.state().hourly_view_date, nov_15());

    // Select the day from the weekly chart
    session.click_weekly_bar("Nov 15");
    assert_eq!(session.state().phase(), Phase::DaySelected);
    assert_eq!(session.current_comparison(), Some(daily_baseline()));
    let weekly_entry = *session
        .store()
        .weekly_breakdowns(0)
        .by_label("Nov 15")
        .expect("Nov 15 is in the current week");
    assert_eq!(session.current_breakdown(), weekly_entry);
    assert_eq!(session.view_model().weekly.highlight_index, Some(6));

    // Drill into 14:00
    session.click_hourly_point(hour(14));
    assert_eq!(session.state().phase(), Phase::HourSelected);
    assert_eq!(
        session.current_breakdown(),
        session.store().hourly_breakdowns(nov_15()).get(hour(14))
    );
    assert_eq!(session.current_comparison(), Some(hourly_baseline()));
    let panel = session.breakdown_panel();
    assert_eq!(panel.grain, Grain::Hour);
    assert_eq!(panel.grain_label, "2024-11-15 @ 14:00");

    // Deselect the hour: back to the day, now as the sum of its hours
    session.click_hourly_point(hour(14));
    assert_eq!(session.state().phase(), Phase::DaySelected);
    assert_eq!(session.state().selected_date(), Some(nov_15()));
    assert_eq!(
        session.current_breakdown(),
        session.store().hourly_breakdowns(nov_15()).day_total()
    );
    assert_eq!(session.current_comparison(), Some(daily_baseline()));
}

#[test]
fn test_paging_back_shifts_labels_by_a_week() {
    let mut session = UsageSession::new(nov_15());
    let current = session.view_model().weekly;

    session.change_week_offset(1);
    let previous = session.view_model().weekly;

    assert_eq!(previous.week_offset, 1);
    for (now, then) in current.dates.iter().zip(&previous.dates) {
        assert_eq!(*now - *then, Duration::days(7));
    }
    assert_eq!(previous.labels[6], "Nov 8");

    let store = session.store();
    let week_0: Vec<_> = store.weekly_breakdowns(0).days().iter().map(|d| d.breakdown).collect();
    let week_1: Vec<_> = store.weekly_breakdowns(1).days().iter().map(|d| d.breakdown).collect();
    assert_ne!(week_0, week_1);

    let fresh = UsageDataStore::new(nov_15());
    assert_eq!(*fresh.weekly_breakdowns(1), *store.weekly_breakdowns(1));
}

#[test]
fn test_selection_survives_paging_without_a_visible_bar() {
    let mut session = UsageSession::new(nov_15());
    session.click_weekly_bar("Nov 13");
    let panel = session.breakdown_panel();

    session.change_week_offset(1);
    let view = session.view_model();
    assert_eq!(session.state().selected_date(), Some(ymd(2024, 11, 13)));
    assert_eq!(view.weekly.highlight_index, None);
    assert_eq!(view.panel, panel, "the panel keeps showing the selected day");
    assert!(view.navigation.can_go_newer);

    session.change_week_offset(-1);
    assert_eq!(session.view_model().weekly.highlight_index, Some(4));
}

#[test]
fn test_hour_selected_without_day_returns_to_compared_overview() {
    let mut session = UsageSession::new(nov_15());

    session.on_hourly_point_click(20).expect("valid index");
    assert_eq!(session.state().selected_date(), None);
    assert_eq!(session.breakdown_panel().grain_label, "2024-11-15 @ 20:00");

    session.on_hourly_point_click(20).expect("valid index");
    assert_eq!(session.state().phase(), Phase::Unselected);
    let panel = session.breakdown_panel();
    assert_eq!(panel.comparison, Some(daily_baseline()));
    assert_eq!(panel.deltas.len(), Category::COUNT);
}

#[test]
fn test_deltas_use_higher_is_worse_polarity() {
    let mut session = UsageSession::new(nov_15());
    session.click_weekly_bar("Nov 10");
    let panel = session.breakdown_panel();
    let reference = daily_baseline();

    for delta in &panel.deltas {
        let value = panel.breakdown[delta.category];
        let expected = if value > reference[delta.category] {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        if delta.percent.abs() >= session.settings().flat_threshold_percent {
            assert_eq!(delta.direction, expected, "{}", delta.category);
        }
    }

    // Weekly laundry (10..15 kWh) always exceeds its 8 kWh baseline
    let laundry = panel.delta(Category::Laundry).expect("laundry delta");
    assert_eq!(laundry.direction, TrendDirection::Up);
    assert!(laundry.percent > 0.0);
}

#[test]
fn test_reducer_matches_session() {
    let today = nov_15();
    let mut session = UsageSession::new(today);
    let mut state = SelectionState::initial(today);

    session.click_weekly_bar("Nov 11");
    state = state.reduce(
        &wattlens_core::SelectionEvent::ClickWeeklyBar("Nov 11".to_owned()),
        today,
    );
    assert_eq!(*session.state(), state);
}
