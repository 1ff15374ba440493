use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`. A trailing time part (`YYYY-MM-DD HH:MM:SS`) is
/// tolerated because some exports store DATE columns as timestamps.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        s.get(..10)
            .filter(|_| s.len() > 10)
            .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
    })
}

/// Full years elapsed between `birthday` and `on`.
/// The birthday itself counts: someone born on 2000-06-01 is 24 on 2024-06-01.
pub fn age_on(birthday: NaiveDate, on: NaiveDate) -> i32 {
    let before_birthday = (on.month(), on.day()) < (birthday.month(), birthday.day());
    on.year() - birthday.year() - i32::from(before_birthday)
}
