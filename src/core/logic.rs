use crate::core::calculator::{ages, categories};
use crate::models::distribution::{Distribution, DistributionKind};
use crate::models::filter::ReservationFilter;
use crate::models::report::{GenderRatio, Headline, Report, TopEntry};
use crate::models::user::UserRecord;
use crate::utils::date::age_on;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Aggregate an already filtered, deduplicated set of users.
    ///
    /// Callers route the empty case to "no data" first; with no users the
    /// headline metrics are simply all `None`.
    pub fn summarize(filter: &ReservationFilter, users: &[UserRecord], as_of: NaiveDate) -> Report {
        let total_users = users.len();

        let professions = categories::count_by(
            DistributionKind::Profession,
            users.iter().map(|u| u.profession.as_str()),
        );
        let genders = categories::count_by(
            DistributionKind::Gender,
            users.iter().map(|u| u.gender.as_str()),
        );

        let ages = Self::valid_ages(users, as_of);
        let skipped_birthdays = total_users - ages.len();

        let headline = Headline {
            top_profession: Self::top_entry(&professions, total_users),
            gender_ratio: Self::gender_ratio(&genders),
            age: ages::summarize_ages(&ages),
        };

        Report {
            filter: filter.clone(),
            as_of,
            total_users,
            headline,
            professions,
            genders,
            ages: ages::age_distribution(&ages),
            skipped_birthdays,
        }
    }

    /// Ages of users whose birthday is known and not after `as_of`.
    pub fn valid_ages(users: &[UserRecord], as_of: NaiveDate) -> Vec<i32> {
        users
            .iter()
            .filter_map(|u| u.birthday)
            .filter(|b| *b <= as_of)
            .map(|b| age_on(b, as_of))
            .collect()
    }

    fn top_entry(dist: &Distribution, total: usize) -> Option<TopEntry> {
        let first = dist.first()?;
        if total == 0 {
            return None;
        }
        Some(TopEntry {
            value: first.label.clone(),
            count: first.count,
            share: first.count as f64 / total as f64,
        })
    }

    /// Needs at least two distinct genders.
    fn gender_ratio(dist: &Distribution) -> Option<GenderRatio> {
        match dist.entries.as_slice() {
            [first, second, ..] => Some(GenderRatio {
                first: first.label.clone(),
                first_count: first.count,
                second: second.label.clone(),
                second_count: second.count,
            }),
            _ => None,
        }
    }
}
