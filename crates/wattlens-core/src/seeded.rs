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

//! Reproducible pseudo-random values keyed by strings.
//!
//! The synthetic data store derives every usage figure from a string key,
//! so the same date, hour and category always produce the same number.

/// Map `key` to a value in `[0, 1)`.
///
/// The key is folded into a 32-bit rolling hash (`h = h * 31 + unit` over
/// its UTF-16 units), and the fractional part of `sin(h) * 10000` is taken
/// as the value. Pure: no state, no I/O.
pub fn seeded_value(key: &str) -> f64 {
    let hash = key
        .encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));

    let x = f64::from(hash).sin() * 10000.0;
    let fraction = x - x.floor();
    // x just below an integer can round the fraction up to exactly 1.0
    if fraction < 1.0 { fraction } else { 0.0 }
}
