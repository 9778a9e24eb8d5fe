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

//! One mounted usage-breakdown view.
//!
//! Owns the selection state and the memoized data store for as long as the
//! view is mounted, and exposes the index-based events and series getters
//! the rendering layer talks to.

use crate::calendar::{DAYS_PER_WEEK, date_label};
use crate::config::{ScriptedEvent, SessionSettings, ViewSettings};
use crate::data_store::UsageDataStore;
use crate::error::{ViewError, ViewResult};
use crate::projector;
use crate::selection::{SelectionEvent, SelectionState};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use wattlens_types::{
    BreakdownPanel, CategoryBreakdown, Hour, HourlySeries, UsageViewModel, WeeklySeries,
};

#[derive(Debug)]
pub struct UsageSession {
    state: SelectionState,
    store: UsageDataStore,
    settings: ViewSettings,
}

impl UsageSession {
    /// Mount a view with default rendering hints
    pub fn new(today: NaiveDate) -> Self {
        Self::with_settings(today, ViewSettings::default())
    }

    pub fn with_settings(today: NaiveDate, settings: ViewSettings) -> Self {
        info!(%today, "Mounting usage breakdown view");
        Self {
            state: SelectionState::initial(today),
            store: UsageDataStore::new(today),
            settings,
        }
    }

    /// Mount from configuration; "today" falls back to the local date
    pub fn from_settings(session: &SessionSettings, settings: ViewSettings) -> ViewResult<Self> {
        settings.validate()?;
        let today = session.today.unwrap_or_else(|| Local::now().date_naive());
        Ok(Self::with_settings(today, settings))
    }

    pub fn today(&self) -> NaiveDate {
        self.store.today()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn store(&self) -> &UsageDataStore {
        &self.store
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Run one event through the state machine
    pub fn dispatch(&mut self, event: &SelectionEvent) {
        self.state = self.state.reduce(event, self.today());
    }

    pub fn click_weekly_bar(&mut self, label: &str) {
        self.dispatch(&SelectionEvent::ClickWeeklyBar(label.to_owned()));
    }

    pub fn click_hourly_point(&mut self, hour: Hour) {
        self.dispatch(&SelectionEvent::ClickHourlyPoint(hour));
    }

    pub fn pick_date(&mut self, date: NaiveDate) {
        self.dispatch(&SelectionEvent::PickDate(date));
    }

    pub fn change_week_offset(&mut self, delta: i32) {
        self.dispatch(&SelectionEvent::ChangeWeekOffset(delta));
    }

    /// Click on the weekly bar at `index` of the active week
    pub fn on_weekly_bar_click(&mut self, index: usize) -> ViewResult<()> {
        let Some(date) = self.store.week_window(self.state.week_offset).date_at(index) else {
            warn!(index, "Weekly bar click outside the rendered week, ignoring");
            return Err(ViewError::BarIndexOutOfRange {
                index,
                len: DAYS_PER_WEEK,
            });
        };
        self.click_weekly_bar(&date_label(date));
        Ok(())
    }

    /// Click on the hourly point at `index`
    pub fn on_hourly_point_click(&mut self, index: usize) -> ViewResult<()> {
        let Some(hour) = Hour::from_index(index) else {
            warn!(index, "Hourly point click outside the rendered day, ignoring");
            return Err(ViewError::PointIndexOutOfRange {
                index,
                len: Hour::PER_DAY,
            });
        };
        self.click_hourly_point(hour);
        Ok(())
    }

    /// Date picker input in `YYYY-MM-DD` form
    pub fn on_date_picked(&mut self, value: &str) -> ViewResult<()> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| ViewError::InvalidDate(value.to_owned()))?;
        self.pick_date(date);
        Ok(())
    }

    pub fn on_week_offset_change(&mut self, delta: i32) {
        self.change_week_offset(delta);
    }

    /// Apply one event of a replay script
    pub fn apply_scripted(&mut self, event: &ScriptedEvent) -> ViewResult<()> {
        match event {
            ScriptedEvent::WeeklyBar { label } => self.click_weekly_bar(label),
            ScriptedEvent::WeeklyBarIndex { index } => self.on_weekly_bar_click(*index)?,
            ScriptedEvent::HourlyPoint { hour } => self.click_hourly_point(*hour),
            ScriptedEvent::HourlyPointIndex { index } => self.on_hourly_point_click(*index)?,
            ScriptedEvent::PickDate { date } => self.on_date_picked(date)?,
            ScriptedEvent::WeekOffset { delta } => self.on_week_offset_change(*delta),
        }
        Ok(())
    }

    pub fn current_breakdown(&self) -> CategoryBreakdown {
        projector::current_breakdown(&self.state, &self.store)
    }

    pub fn current_comparison(&self) -> Option<CategoryBreakdown> {
        projector::current_comparison(&self.state)
    }

    /// Weekly bars for any week offset, highlighted by the current selection
    pub fn weekly_series(&self, week_offset: u32) -> WeeklySeries {
        projector::weekly_series(
            &self.store,
            week_offset,
            self.state.selected_date(),
            &self.settings,
        )
    }

    /// Hourly line for any date; the selected hour only highlights on the viewed date
    pub fn hourly_series(&self, date: NaiveDate) -> HourlySeries {
        let selected = self
            .state
            .selected_hour()
            .filter(|_| date == self.state.hourly_view_date);
        projector::hourly_series(&self.store, date, selected, &self.settings)
    }

    pub fn breakdown_panel(&self) -> BreakdownPanel {
        projector::breakdown_panel(&self.state, &self.store, &self.settings)
    }

    pub fn view_model(&self) -> UsageViewModel {
        projector::project(&self.state, &self.store, &self.settings)
    }
}
