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

//! Table output for the view model.

use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_FULL};
use wattlens_types::{
    BreakdownPanel, Category, HourlySeries, TrendDirection, UsageViewModel, WeeklySeries,
};

/// Formatter for pretty terminal tables
#[derive(Debug)]
pub struct TableFormatter;

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

fn emphasize(cell: Cell, selected: bool) -> Cell {
    if selected {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

impl TableFormatter {
    /// Weekly stacked bars, one row per day
    pub fn format_weekly(weekly: &WeeklySeries, caption: &str) -> String {
        let mut titles = vec!["Day"];
        titles.extend(Category::ALL.iter().map(|c| c.name()));
        titles.extend(["Total", "vs Avg"]);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&titles));

        for (i, label) in weekly.labels.iter().enumerate() {
            let selected = weekly.highlight_index == Some(i);
            let mut row = vec![emphasize(Cell::new(label), selected)];
            for series in &weekly.series {
                row.push(Cell::new(format!("{:.2}", series.values[i])));
            }
            row.push(Cell::new(format!("{:.2}", weekly.totals[i])));
            row.push(Cell::new(format!("{:+.1}%", weekly.baseline_diff_percent[i])));
            table.add_row(row);
        }

        format!(
            "Weekly usage ({caption})\n{table}\nLast month average: {:.0} kWh/day\n",
            weekly.baseline_total
        )
    }

    /// Hourly totals, one row per hour
    pub fn format_hourly(hourly: &HourlySeries) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&["Hour", "Total (kWh)"]));

        for (i, (hour, total)) in hourly.labels.iter().zip(&hourly.totals).enumerate() {
            let selected = hourly.highlight_index == Some(i);
            table.add_row(vec![
                emphasize(Cell::new(hour), selected),
                emphasize(Cell::new(format!("{total:.2}")), selected),
            ]);
        }

        format!("Hourly usage ({})\n{table}\n", hourly.date)
    }

    /// Breakdown panel with share and comparison columns
    pub fn format_panel(panel: &BreakdownPanel) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&["Category", "kWh", "Share", "Avg", "Change"]));

        for (category, value) in panel.breakdown.iter() {
            let share = panel.share(category).unwrap_or(0.0);
            let (avg_cell, change_cell) = match panel.delta(category) {
                Some(delta) => {
                    let change = Cell::new(format!("{:+.1}%", delta.percent));
                    let change = match delta.direction {
                        TrendDirection::Up => change.fg(Color::Red),
                        TrendDirection::Down => change.fg(Color::Green),
                        TrendDirection::Flat => change,
                    };
                    (Cell::new(format!("{:.2}", delta.reference_kwh)), change)
                }
                None => (Cell::new("-"), Cell::new("-")),
            };

            table.add_row(vec![
                Cell::new(category),
                Cell::new(format!("{value:.2}")),
                Cell::new(format!("{share:.1}%")),
                avg_cell,
                change_cell,
            ]);
        }

        format!(
            "Breakdown for {} ({:.2} kWh)\n{table}\n",
            panel.grain_label, panel.total_kwh
        )
    }

    /// Every part of the page, top to bottom
    pub fn format_view(view: &UsageViewModel) -> String {
        let mut output = String::new();
        output.push_str(&Self::format_weekly(&view.weekly, &view.navigation.caption));
        output.push('\n');
        output.push_str(&Self::format_panel(&view.panel));
        output.push('\n');
        output.push_str(&Self::format_hourly(&view.hourly));
        output
    }
}
