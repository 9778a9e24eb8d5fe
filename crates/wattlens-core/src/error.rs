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

use thiserror::Error;

/// Errors raised at the edges of the view: inbound UI events and configuration
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Weekly bar index {index} out of range (chart has {len} bars)")]
    BarIndexOutOfRange { index: usize, len: usize },

    #[error("Hourly point index {index} out of range (chart has {len} points)")]
    PointIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type ViewResult<T> = Result<T, ViewError>;
