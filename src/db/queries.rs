use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::filter::ReservationFilter;
use crate::models::user::UserRecord;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::types::{Type, Value, ValueRef};
use rusqlite::{Result, Row, params_from_iter};

/// First and last `reservation_date` over the whole reservation table.
/// `None` when there are no reservations at all.
pub fn reservation_date_bounds(pool: &mut DbPool) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(reservation_date), MAX(reservation_date) FROM reservation_records",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match (first, last) {
        (Some(f), Some(l)) => Ok(Some((stored_date(f)?, stored_date(l)?))),
        _ => Ok(None),
    }
}

/// A date column that does not hold `YYYY-MM-DD` is a malformed row.
fn stored_date(s: String) -> Result<NaiveDate> {
    date::parse_date(&s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidDate(s)),
        )
    })
}

/// Build the WHERE-EXISTS predicate and its positional parameters.
///
/// Year and month are always applied. Each selected slot adds
/// `start <= start_time < end`; slots are OR-ed together. With no slot
/// selected the time constraint is left out entirely.
pub fn build_user_query(filter: &ReservationFilter) -> (String, Vec<Value>) {
    let mut sql = String::from(
        "SELECT u.user_id, u.birthday, u.gender, u.profession
         FROM user_master u
         WHERE EXISTS (
             SELECT 1 FROM reservation_records r
             WHERE r.user_id = u.user_id
               AND CAST(strftime('%Y', r.reservation_date) AS INTEGER) = ?1
               AND CAST(strftime('%m', r.reservation_date) AS INTEGER) = ?2",
    );
    let mut params = vec![
        Value::Integer(i64::from(filter.year)),
        Value::Integer(i64::from(filter.month)),
    ];

    if filter.has_time_constraint() {
        let mut clauses = Vec::with_capacity(filter.slots.len());
        for slot in &filter.slots {
            let (start, end) = slot.bounds();
            let s = params.len() + 1;
            clauses.push(format!(
                "(time(r.start_time) >= time(?{s}) AND time(r.start_time) < time(?{}))",
                s + 1
            ));
            params.push(Value::Text(start.to_string()));
            params.push(Value::Text(end.to_string()));
        }
        sql.push_str("\n               AND (");
        sql.push_str(&clauses.join(" OR "));
        sql.push(')');
    }

    sql.push_str("\n         )\n         ORDER BY u.user_id ASC");
    (sql, params)
}

/// Distinct users with at least one reservation matching `filter`,
/// ordered by `user_id`.
pub fn load_matching_users(
    pool: &mut DbPool,
    filter: &ReservationFilter,
) -> AppResult<Vec<UserRecord>> {
    let (sql, params) = build_user_query(filter);
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map(params_from_iter(params.iter()), map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_user_row(row: &Row) -> Result<UserRecord> {
    // A bad birthday must not sink the whole report: keep the row, drop the date.
    let birthday = match row.get_ref("birthday")? {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok().and_then(date::parse_date),
        _ => None,
    };

    Ok(UserRecord {
        id: row.get("user_id")?,
        birthday,
        gender: text_or_empty(row, "gender")?,
        profession: text_or_empty(row, "profession")?,
    })
}

fn text_or_empty(row: &Row, column: &str) -> Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}
