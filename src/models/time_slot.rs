use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::Serialize;

/// Fixed time-of-day buckets used to filter reservations by `start_time`.
/// Each bucket is the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    EarlyMorning, // 08:00-10:00
    Morning,      // 10:00-12:00
    Noon,         // 12:00-13:00
    Afternoon,    // 13:00-16:00
    Evening,      // 16:00-18:00
    Night,        // 18:00-20:00
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Noon,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Stable identifier used on the command line and in exports.
    pub fn id(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "early-morning",
            TimeSlot::Morning => "morning",
            TimeSlot::Noon => "noon",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Night => "night",
        }
    }

    /// Convert CLI id → enum (case-insensitive)
    pub fn from_id(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|slot| slot.id() == s)
    }

    /// Bounds as `(start, end)` in `HH:MM`, end excluded.
    pub fn bounds(&self) -> (&'static str, &'static str) {
        match self {
            TimeSlot::EarlyMorning => ("08:00", "10:00"),
            TimeSlot::Morning => ("10:00", "12:00"),
            TimeSlot::Noon => ("12:00", "13:00"),
            TimeSlot::Afternoon => ("13:00", "16:00"),
            TimeSlot::Evening => ("16:00", "18:00"),
            TimeSlot::Night => ("18:00", "20:00"),
        }
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        let (start, end) = self.bounds();
        match (parse_time(start), parse_time(end)) {
            (Some(s), Some(e)) => s <= t && t < e,
            _ => false,
        }
    }
}
