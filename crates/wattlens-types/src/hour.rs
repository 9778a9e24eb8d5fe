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

//! Hour-of-day labels ("0:00" .. "23:00").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One hour of a day, rendered as `"H:00"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Hour(u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid hour label '{0}' (expected H:00 with H in 0..=23)")]
pub struct ParseHourError(pub String);

impl Hour {
    pub const PER_DAY: usize = 24;

    /// `None` when `hour` is not in 0..=23
    pub fn new(hour: u8) -> Option<Self> {
        (usize::from(hour) < Self::PER_DAY).then_some(Self(hour))
    }

    /// Hour at position `index` of a day's hour labels
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    /// All 24 hours of a day in order
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..24).map(Hour)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl FromStr for Hour {
    type Err = ParseHourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_suffix(":00")
            .and_then(|h| h.parse::<u8>().ok())
            .and_then(Hour::new)
            .ok_or_else(|| ParseHourError(trimmed.to_owned()))
    }
}

impl From<Hour> for String {
    fn from(hour: Hour) -> Self {
        hour.to_string()
    }
}

impl TryFrom<String> for Hour {
    type Error = ParseHourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
