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

//! TOML configuration: session clock, rendering hints and scripted events.

use crate::error::{ViewError, ViewResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wattlens_types::Hour;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WattLensConfig {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub view: ViewSettings,

    /// Interaction script replayed by the CLI
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

/// Session parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Pin "today" (YYYY-MM-DD); defaults to the local date at mount
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Style hints handed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Opacity of bars and points that are not selected
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,

    /// Radius of hourly points
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,

    /// Radius of the selected hourly point
    #[serde(default = "default_selected_point_radius")]
    pub selected_point_radius: f64,

    /// Deltas with |percent| below this are reported as flat
    #[serde(default = "default_flat_threshold")]
    pub flat_threshold_percent: f64,
}

fn default_dimmed_opacity() -> f64 {
    0.3
}

fn default_point_radius() -> f64 {
    3.0
}

fn default_selected_point_radius() -> f64 {
    6.0
}

fn default_flat_threshold() -> f64 {
    0.05
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            dimmed_opacity: default_dimmed_opacity(),
            point_radius: default_point_radius(),
            selected_point_radius: default_selected_point_radius(),
            flat_threshold_percent: default_flat_threshold(),
        }
    }
}

impl ViewSettings {
    pub fn validate(&self) -> ViewResult<()> {
        if !(self.dimmed_opacity > 0.0 && self.dimmed_opacity <= 1.0) {
            return Err(ViewError::Config(format!(
                "dimmed_opacity must be in (0, 1], got {}",
                self.dimmed_opacity
            )));
        }
        for (name, radius) in [
            ("point_radius", self.point_radius),
            ("selected_point_radius", self.selected_point_radius),
        ] {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(ViewError::Config(format!(
                    "{name} must be a finite non-negative number, got {radius}"
                )));
            }
        }
        if !(self.flat_threshold_percent.is_finite() && self.flat_threshold_percent >= 0.0) {
            return Err(ViewError::Config(format!(
                "flat_threshold_percent must be a finite non-negative number, got {}",
                self.flat_threshold_percent
            )));
        }
        Ok(())
    }
}

/// One interaction in a replay script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptedEvent {
    /// Click the weekly bar with this label ("Nov 15")
    WeeklyBar { label: String },
    /// Click the weekly bar at this position
    WeeklyBarIndex { index: usize },
    /// Click the hourly point for this hour ("14:00")
    HourlyPoint { hour: Hour },
    /// Click the hourly point at this position
    HourlyPointIndex { index: usize },
    /// Enter a date in the date picker (YYYY-MM-DD)
    PickDate { date: String },
    /// Page the weekly chart by `delta` weeks (positive = older)
    WeekOffset { delta: i32 },
}

impl WattLensConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ViewResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> ViewResult<Self> {
        let config: WattLensConfig = toml::from_str(content)?;
        config.view.validate()?;
        Ok(config)
    }

    /// Documented example configuration
    pub fn example_toml() -> String {
        r#"# WattLens - example configuration

[session]
# Pin "today" so the weekly window and generated figures are reproducible.
# Omit to use the local date.
today = "2024-11-15"

[view]
dimmed_opacity = 0.3          # opacity of bars/points that are not selected
point_radius = 3.0
selected_point_radius = 6.0
flat_threshold_percent = 0.05 # |delta| below this is shown as flat

# Interaction script for `wattlens replay`, applied in order.

# Drill into a day of the current week
[[events]]
type = "weekly_bar"
label = "Nov 15"

# ...then into an hour of that day
[[events]]
type = "hourly_point"
hour = "14:00"

# Deselect the hour again (back to the day)
[[events]]
type = "hourly_point_index"
index = 14

# Page one week back
[[events]]
type = "week_offset"
delta = 1

# Jump the hourly chart to another date
[[events]]
type = "pick_date"
date = "2024-10-01"
"#
        .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WattLensConfig::from_toml("").unwrap();

        assert_eq!(config.session.today, None);
        assert_eq!(config.view, ViewSettings::default());
        assert!(config.events.is_empty());
    }

    #[test]
    fn test_example_config_parses() {
        let config = WattLensConfig::from_toml(&WattLensConfig::example_toml()).unwrap();

        assert_eq!(config.session.today, NaiveDate::from_ymd_opt(2024, 11, 15));
        assert_eq!(config.events.len(), 5);
        assert_eq!(
            config.events[0],
            ScriptedEvent::WeeklyBar {
                label: "Nov 15".to_owned()
            }
        );
        assert_eq!(
            config.events[1],
            ScriptedEvent::HourlyPoint {
                hour: Hour::new(14).unwrap()
            }
        );
        assert_eq!(config.events[3], ScriptedEvent::WeekOffset { delta: 1 });
    }

    #[test]
    fn test_invalid_opacity_rejected() {
        let err = WattLensConfig::from_toml("[view]\ndimmed_opacity = 1.5\n").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = WattLensConfig::from_toml("[view]\npoint_radius = -1.0\n").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)), "unexpected error: {err}");

        let err =
            WattLensConfig::from_toml("[view]\nselected_point_radius = -6.0\n").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err =
            WattLensConfig::from_toml("[view]\nflat_threshold_percent = -0.1\n").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_nan_settings_rejected() {
        for field in [
            "dimmed_opacity",
            "point_radius",
            "selected_point_radius",
            "flat_threshold_percent",
        ] {
            let toml = format!("[view]\n{field} = nan\n");
            let err = WattLensConfig::from_toml(&toml).unwrap_err();
            assert!(matches!(err, ViewError::Config(_)), "{field}: unexpected error: {err}");
        }

        let err = WattLensConfig::from_toml("[view]\npoint_radius = inf\n").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_bad_hour_label_rejected() {
        let toml = "[[events]]\ntype = \"hourly_point\"\nhour = \"25:00\"\n";
        let err = WattLensConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ViewError::ConfigParse(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[session]\ntoday = \"2025-01-03\"\n").unwrap();

        let config = WattLensConfig::from_file(file.path()).unwrap();
        assert_eq!(config.session.today, NaiveDate::from_ymd_opt(2025, 1, 3));

        let missing = WattLensConfig::from_file("/nonexistent/wattlens.toml");
        assert!(matches!(missing, Err(ViewError::Io(_))));
    }
}
