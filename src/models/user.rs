use chrono::NaiveDate;
use serde::Serialize;

/// The subset of `user_master` read by the reporting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i64,                     // ⇔ user_master.user_id
    pub birthday: Option<NaiveDate>, // ⇔ user_master.birthday (TEXT "YYYY-MM-DD"), None if missing/invalid
    pub gender: String,              // ⇔ user_master.gender, NULL read as ""
    pub profession: String,          // ⇔ user_master.profession, NULL read as ""
}
