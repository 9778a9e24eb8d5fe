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

//! Week windows and short day labels.

use chrono::{Days, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Short label shown under a weekly bar, e.g. "Nov 5"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Caption of the week pager for `offset` weeks back
pub fn week_caption(offset: u32) -> String {
    match offset {
        0 => "Current Week".to_owned(),
        1 => "1 Week Ago".to_owned(),
        n => format!("{n} Weeks Ago"),
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// Seven consecutive days ending `offset` weeks before today.
///
/// Labels are only unique inside one window, so lookups that outlive the
/// window go through the concrete dates instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    offset: u32,
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    /// Window for `offset`, anchored on `today - offset * 7` days
    pub fn resolve(today: NaiveDate, offset: u32) -> Self {
        let anchor = days_before(today, u64::from(offset) * 7);
        let mut days = [anchor; DAYS_PER_WEEK];
        for (back, slot) in days.iter_mut().rev().enumerate() {
            *slot = days_before(anchor, back as u64);
        }
        Self { offset, days }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Days oldest to newest
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn labels(&self) -> Vec<String> {
        self.days.iter().copied().map(date_label).collect()
    }

    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }

    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    /// Resolve a rendered label back to the calendar day it stands for
    pub fn date_for_label(&self, label: &str) -> Option<NaiveDate> {
        let label = label.trim();
        self.days.iter().copied().find(|d| date_label(*d) == label)
    }
}
