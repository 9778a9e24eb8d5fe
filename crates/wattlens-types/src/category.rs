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

//! Usage categories and per-category breakdowns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index};

/// Appliance group a share of the household usage is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AC")]
    Ac,
    Kitchen,
    Laundry,
    Other,
}

impl Category {
    /// Number of categories in the fixed set
    pub const COUNT: usize = 4;

    /// All categories in display order
    pub const ALL: [Category; Self::COUNT] = [
        Category::Ac,
        Category::Kitchen,
        Category::Laundry,
        Category::Other,
    ];

    /// Display name, also used as part of the generator seed
    pub fn name(self) -> &'static str {
        match self {
            Category::Ac => "AC",
            Category::Kitchen => "Kitchen",
            Category::Laundry => "Laundry",
            Category::Other => "Other",
        }
    }

    /// Chart colour for this category
    pub fn color_hex(self) -> &'static str {
        match self {
            Category::Ac => "#0d6efd",
            Category::Kitchen => "#ffc107",
            Category::Laundry => "#198754",
            Category::Other => "#6c757d",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Usage in kWh for every category of the fixed set.
///
/// Backed by an array indexed by [`Category`], so a breakdown can never
/// miss a category or carry an extra one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BreakdownRepr", into = "BreakdownRepr")]
pub struct CategoryBreakdown {
    values: [f64; Category::COUNT],
}

impl CategoryBreakdown {
    pub const ZERO: CategoryBreakdown = CategoryBreakdown {
        values: [0.0; Category::COUNT],
    };

    /// Build a breakdown with values in [`Category::ALL`] order
    pub const fn from_values(values: [f64; Category::COUNT]) -> Self {
        Self { values }
    }

    /// Build a breakdown by evaluating `f` once per category
    pub fn from_fn(mut f: impl FnMut(Category) -> f64) -> Self {
        let mut values = [0.0; Category::COUNT];
        for category in Category::ALL {
            values[category.slot()] = f(category);
        }
        Self { values }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.slot()]
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Smallest category value
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Component-wise multiplication by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_fn(|category| self.get(category) * factor)
    }

    /// `(category, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Index<Category> for CategoryBreakdown {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.values[category.slot()]
    }
}

impl Add for CategoryBreakdown {
    type Output = CategoryBreakdown;

    fn add(mut self, rhs: CategoryBreakdown) -> CategoryBreakdown {
        self += rhs;
        self
    }
}

impl AddAssign for CategoryBreakdown {
    fn add_assign(&mut self, rhs: CategoryBreakdown) {
        for (value, other) in self.values.iter_mut().zip(rhs.values) {
            *value += other;
        }
    }
}

impl Sum for CategoryBreakdown {
    fn sum<I: Iterator<Item = CategoryBreakdown>>(iter: I) -> Self {
        iter.fold(CategoryBreakdown::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a CategoryBreakdown> for CategoryBreakdown {
    fn sum<I: Iterator<Item = &'a CategoryBreakdown>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Wire shape: a JSON/TOML object with exactly one key per category
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BreakdownRepr {
    #[serde(rename = "AC")]
    ac: f64,
    #[serde(rename = "Kitchen")]
    kitchen: f64,
    #[serde(rename = "Laundry")]
    laundry: f64,
    #[serde(rename = "Other")]
    other: f64,
}

impl From<BreakdownRepr> for CategoryBreakdown {
    fn from(repr: BreakdownRepr) -> Self {
        Self::from_values([repr.ac, repr.kitchen, repr.laundry, repr.other])
    }
}

impl From<CategoryBreakdown> for BreakdownRepr {
    fn from(breakdown: CategoryBreakdown) -> Self {
        Self {
            ac: breakdown.get(Category::Ac),
            kitchen: breakdown.get(Category::Kitchen),
            laundry: breakdown.get(Category::Laundry),
            other: breakdown.get(Category::Other),
        }
    }
}
