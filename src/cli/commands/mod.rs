pub mod config;
pub mod export;
pub mod init;
pub mod range;
pub mod report;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::report::selectable_domain;
use crate::db::pool::DbPool;
use crate::db::schema::has_reporting_tables;
use crate::errors::{AppError, AppResult};
use crate::models::filter::ReservationFilter;
use crate::models::time_slot::TimeSlot;
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// Open the configured database read-only and make sure it can be reported on.
pub(crate) fn open_reporting_db(cfg: &Config) -> AppResult<DbPool> {
    let path = cfg.database_path();
    let pool = DbPool::open_read_only(&path.to_string_lossy())?;

    if !has_reporting_tables(&pool.conn)? {
        return Err(AppError::Other(format!(
            "{} has no user_master/reservation_records tables",
            path.display()
        )));
    }
    Ok(pool)
}

/// Turn CLI filter flags into a filter plus the reference date for ages.
///
/// Missing year/month fall back to the dashboard defaults: current year if
/// reservations exist for it (else the first year with reservations) and
/// the current month.
pub(crate) fn resolve_filter(
    pool: &mut DbPool,
    args: &FilterArgs,
) -> AppResult<(ReservationFilter, NaiveDate)> {
    let today = date::today();

    let as_of = match &args.as_of {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => today,
    };

    let year = match args.year {
        Some(y) => y,
        None => selectable_domain(pool)?
            .map(|d| d.default_year(today))
            .unwrap_or_else(|| today.year()),
    };
    let month = args.month.unwrap_or_else(|| today.month());

    let slots = if args.any_time {
        Vec::new()
    } else if args.slots.is_empty() {
        TimeSlot::ALL.to_vec()
    } else {
        parse_slots(&args.slots)?
    };

    Ok((ReservationFilter::new(year, month, slots)?, as_of))
}

pub(crate) fn parse_slots(ids: &[String]) -> AppResult<Vec<TimeSlot>> {
    ids.iter()
        .map(|id| TimeSlot::from_id(id).ok_or_else(|| AppError::UnknownTimeSlot(id.clone())))
        .collect()
}
