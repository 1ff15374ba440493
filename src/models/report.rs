use super::distribution::Distribution;
use super::filter::ReservationFilter;
use chrono::NaiveDate;
use serde::Serialize;

/// Most common value of a categorical attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEntry {
    pub value: String,
    pub count: usize,
    /// count / total, in `0.0..=1.0`
    pub share: f64,
}

/// The two most common genders. Absent when fewer than two distinct values
/// are present in the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderRatio {
    pub first: String,
    pub first_count: usize,
    pub second: String,
    pub second_count: usize,
}

impl GenderRatio {
    pub fn counts(&self) -> String {
        format!("{}/{}", self.first_count, self.second_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSummary {
    /// Unrounded arithmetic mean.
    pub mean: f64,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub top_profession: Option<TopEntry>,
    pub gender_ratio: Option<GenderRatio>,
    pub age: Option<AgeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: ReservationFilter,
    pub as_of: NaiveDate,
    pub total_users: usize,
    pub headline: Headline,
    pub professions: Distribution,
    pub genders: Distribution,
    pub ages: Distribution,
    /// Users left out of age statistics because their birthday is missing,
    /// malformed or after `as_of`.
    pub skipped_birthdays: usize,
}

impl Report {
    pub fn distributions(&self) -> [&Distribution; 3] {
        [&self.professions, &self.genders, &self.ages]
    }
}

/// Result of one query → aggregate pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// No reservation matched the filter.
    NoData(ReservationFilter),
    Ready(Box<Report>),
}
