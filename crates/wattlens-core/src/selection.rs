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

//! Drill-down selection state machine.
//!
//! The selection is the single source of truth for what the page shows.
//! It only changes through [`SelectionState::reduce`], a pure function of
//! the previous state and one interaction event; everything visible is
//! re-derived from it by the projector.
//!
//! ```text
//!  Unselected --bar d--> Day(d) --point h--> Hour(d, h)
//!      ^                   |  ^                 |
//!      +-----bar d---------+  +----point h------+
//! ```

use crate::calendar::WeekWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wattlens_types::{Grain, Hour};

/// A day picked from the weekly chart, tied to the window it was picked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDay {
    pub date: NaiveDate,
    pub week_offset: u32,
}

/// Where the panel takes a selected day's figures from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySource {
    /// The weekly map entry of the clicked bar
    WeeklyBar,
    /// The sum of the day's hourly breakdowns (after an hour was deselected)
    HourlyTotal,
}

/// Current drill-down level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Drill {
    /// Nothing selected; the panel shows the full day of `hourly_view_date`.
    /// `compared` is set when the daily baseline stays on after an hour was deselected.
    Unselected { compared: bool },
    Day { day: SelectedDay, source: DaySource },
    /// `day` is kept for display only and may be absent
    Hour { day: Option<SelectedDay>, hour: Hour },
}

/// Coarse phase of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unselected,
    DaySelected,
    HourSelected,
}

/// Inbound interaction events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Bar with this day label was clicked in the active week window
    ClickWeeklyBar(String),
    /// Point of this hour was clicked in the hourly chart
    ClickHourlyPoint(Hour),
    /// Explicit date picker input
    PickDate(NaiveDate),
    /// Week pager moved by `delta` weeks (positive = further back)
    ChangeWeekOffset(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub week_offset: u32,
    pub hourly_view_date: NaiveDate,
    pub drill: Drill,
}

impl SelectionState {
    /// State at mount: current week, nothing selected, hourly view on today
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            week_offset: 0,
            hourly_view_date: today,
            drill: Drill::Unselected { compared: false },
        }
    }

    pub fn phase(&self) -> Phase {
        match self.drill {
            Drill::Unselected { .. } => Phase::Unselected,
            Drill::Day { .. } => Phase::DaySelected,
            Drill::Hour { .. } => Phase::HourSelected,
        }
    }

    /// Grain of the breakdown panel
    pub fn grain(&self) -> Grain {
        match self.drill {
            Drill::Hour { .. } => Grain::Hour,
            Drill::Unselected { .. } | Drill::Day { .. } => Grain::Day,
        }
    }

    pub fn selected_day(&self) -> Option<SelectedDay> {
        match self.drill {
            Drill::Unselected { .. } => None,
            Drill::Day { day, .. } => Some(day),
            Drill::Hour { day, .. } => day,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_day().map(|d| d.date)
    }

    pub fn selected_hour(&self) -> Option<Hour> {
        match self.drill {
            Drill::Hour { hour, .. } => Some(hour),
            Drill::Unselected { .. } | Drill::Day { .. } => None,
        }
    }

    /// Apply one event. Total over the whole state space: events that do not
    /// match anything rendered leave the state unchanged.
    #[must_use]
    pub fn reduce(&self, event: &SelectionEvent, today: NaiveDate) -> SelectionState {
        let next = match event {
            SelectionEvent::ClickWeeklyBar(label) => self.click_weekly_bar(label, today),
            SelectionEvent::ClickHourlyPoint(hour) => self.click_hourly_point(*hour),
            SelectionEvent::PickDate(date) => self.pick_date(*date),
            SelectionEvent::ChangeWeekOffset(delta) => self.change_week_offset(*delta),
        };

        debug!(
            ?event,
            week_offset = next.week_offset,
            hourly_view_date = %next.hourly_view_date,
            phase = ?next.phase(),
            "Selection updated"
        );
        next
    }

    fn click_weekly_bar(&self, label: &str, today: NaiveDate) -> SelectionState {
        let window = WeekWindow::resolve(today, self.week_offset);
        let Some(date) = window.date_for_label(label) else {
            warn!(label, week_offset = self.week_offset, "Clicked bar not in active week");
            return *self;
        };

        if self.selected_date() == Some(date) {
            return SelectionState {
                week_offset: self.week_offset,
                hourly_view_date: today,
                drill: Drill::Unselected { compared: false },
            };
        }

        SelectionState {
            week_offset: self.week_offset,
            hourly_view_date: date,
            drill: Drill::Day {
                day: SelectedDay {
                    date,
                    week_offset: self.week_offset,
                },
                source: DaySource::WeeklyBar,
            },
        }
    }

    fn click_hourly_point(&self, hour: Hour) -> SelectionState {
        let drill = match self.drill {
            Drill::Hour {
                day,
                hour: selected,
            } if selected == hour => match day {
                Some(day) => Drill::Day {
                    day,
                    source: DaySource::HourlyTotal,
                },
                None => Drill::Unselected { compared: true },
            },
            Drill::Unselected { .. } | Drill::Day { .. } | Drill::Hour { .. } => Drill::Hour {
                day: self.selected_day(),
                hour,
            },
        };

        SelectionState { drill, ..*self }
    }

    fn pick_date(&self, date: NaiveDate) -> SelectionState {
        SelectionState {
            week_offset: self.week_offset,
            hourly_view_date: date,
            drill: Drill::Unselected { compared: false },
        }
    }

    /// Moves the window only; a selection outside the new window is kept but
    /// has no visible bar until the user pages back to it.
    fn change_week_offset(&self, delta: i32) -> SelectionState {
        let offset = (i64::from(self.week_offset) + i64::from(delta)).max(0);
        SelectionState {
            week_offset: u32::try_from(offset).unwrap_or(u32::MAX),
            ..*self
        }
    }
}
