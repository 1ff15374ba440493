use super::time_slot::TimeSlot;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// The values a user can pick from: derived from the full reservation
/// table, not from any filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableDomain {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl SelectableDomain {
    pub fn from_bounds(first_date: NaiveDate, last_date: NaiveDate) -> Self {
        Self {
            first_date,
            last_date,
        }
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_date.year()..=self.last_date.year()
    }

    pub fn months(&self) -> RangeInclusive<u32> {
        1..=12
    }

    pub fn slots(&self) -> [TimeSlot; 6] {
        TimeSlot::ALL
    }

    /// Current year when selectable, else the first available year.
    pub fn default_year(&self, today: NaiveDate) -> i32 {
        if self.years().contains(&today.year()) {
            today.year()
        } else {
            self.first_date.year()
        }
    }

    pub fn default_month(&self, today: NaiveDate) -> u32 {
        today.month()
    }
}
