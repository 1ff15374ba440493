//! One query → aggregate pass over the reservation database.

use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_matching_users, reservation_date_bounds};
use crate::errors::AppResult;
use crate::models::domain::SelectableDomain;
use crate::models::filter::ReservationFilter;
use crate::models::report::ReportOutcome;
use chrono::NaiveDate;

pub fn build_report(
    pool: &mut DbPool,
    filter: &ReservationFilter,
    as_of: NaiveDate,
) -> AppResult<ReportOutcome> {
    let users = load_matching_users(pool, filter)?;

    if users.is_empty() {
        return Ok(ReportOutcome::NoData(filter.clone()));
    }

    let report = Core::summarize(filter, &users, as_of);
    Ok(ReportOutcome::Ready(Box::new(report)))
}

/// Year/month/slot choices offered to the user; `None` with no reservations.
pub fn selectable_domain(pool: &mut DbPool) -> AppResult<Option<SelectableDomain>> {
    Ok(reservation_date_bounds(pool)?.map(|(first, last)| SelectableDomain::from_bounds(first, last)))
}
