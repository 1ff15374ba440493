use super::time_slot::TimeSlot;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// User-selected filter over reservations.
///
/// An empty `slots` selection means "no time-of-day constraint", not
/// "nothing matches".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationFilter {
    pub year: i32,
    pub month: u32,
    pub slots: Vec<TimeSlot>,
}

impl ReservationFilter {
    pub fn new(year: i32, month: u32, slots: Vec<TimeSlot>) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(month));
        }

        let mut unique: Vec<TimeSlot> = Vec::with_capacity(slots.len());
        for s in slots {
            if !unique.contains(&s) {
                unique.push(s);
            }
        }

        Ok(Self {
            year,
            month,
            slots: unique,
        })
    }

    /// Filter for a month with every time slot selected (dashboard default).
    pub fn all_slots(year: i32, month: u32) -> AppResult<Self> {
        Self::new(year, month, TimeSlot::ALL.to_vec())
    }

    pub fn has_time_constraint(&self) -> bool {
        !self.slots.is_empty()
    }

    /// `YYYY-MM` label of the filtered period.
    pub fn period_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
