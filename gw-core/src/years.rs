//! Selectable years for the dashboard pickers.

use crate::error::{GwError, Result};
use chrono::{Datelike, Local};
use std::ops::RangeInclusive;

/// First year with journal data.
pub const FIRST_YEAR: i32 = 2021;

/// Year shown when the dashboard opens.
pub const DEFAULT_PRIMARY_YEAR: i32 = 2024;

/// Inclusive range of selectable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    first: i32,
    last: i32,
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// [`FIRST_YEAR`] through the current calendar year.
    pub fn through_current_year() -> Self {
        Self::new(FIRST_YEAR, Local::now().year())
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }

    /// Years offered by the compare picker: every year except the primary one.
    pub fn compare_choices(&self, primary: i32) -> Vec<i32> {
        self.years().filter(|y| *y != primary).collect()
    }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.first, self.last)
    }

    /// Reject years the pickers would never offer.
    pub fn check(&self, year: i32) -> Result<i32> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(GwError::YearOutOfRange {
                year,
                first: self.first,
                last: self.last,
            })
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::through_current_year()
    }
}
