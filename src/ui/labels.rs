//! Display strings. The core only deals in slot ids and distribution kinds;
//! what the user reads depends on the configured language.

use crate::config::Language;
use crate::models::distribution::DistributionKind;
use crate::models::time_slot::TimeSlot;

pub fn slot_label(slot: TimeSlot, lang: Language) -> &'static str {
    match (lang, slot) {
        (Language::En, TimeSlot::EarlyMorning) => "Early morning (8:00-10:00)",
        (Language::En, TimeSlot::Morning) => "Morning (10:00-12:00)",
        (Language::En, TimeSlot::Noon) => "Noon (12:00-13:00)",
        (Language::En, TimeSlot::Afternoon) => "Afternoon (13:00-16:00)",
        (Language::En, TimeSlot::Evening) => "Evening (16:00-18:00)",
        (Language::En, TimeSlot::Night) => "Night (18:00-20:00)",
        (Language::Ja, TimeSlot::EarlyMorning) => "早朝（8:00-10:00）",
        (Language::Ja, TimeSlot::Morning) => "朝(10:00-12:00)",
        (Language::Ja, TimeSlot::Noon) => "正午(12:00-13:00)",
        (Language::Ja, TimeSlot::Afternoon) => "午後(13:00-16:00)",
        (Language::Ja, TimeSlot::Evening) => "夕方(16:00-18:00)",
        (Language::Ja, TimeSlot::Night) => "夜(18:00-20:00)",
    }
}

pub fn distribution_title(kind: DistributionKind, lang: Language) -> &'static str {
    match (lang, kind) {
        (Language::En, DistributionKind::Profession) => "Profession distribution",
        (Language::En, DistributionKind::Gender) => "Gender distribution",
        (Language::En, DistributionKind::Age) => "Age distribution",
        (Language::Ja, DistributionKind::Profession) => "職業分布",
        (Language::Ja, DistributionKind::Gender) => "性別分布",
        (Language::Ja, DistributionKind::Age) => "年齢分布",
    }
}

/// Strings used by the text report.
pub struct ReportLabels {
    pub total: &'static str,
    pub top_profession: &'static str,
    pub gender_ratio: &'static str,
    pub mean_age: &'static str,
    pub persons: &'static str,
    pub years_old: &'static str,
    pub no_data: &'static str,
    pub time_slots: &'static str,
    pub any_time: &'static str,
}

pub fn report_labels(lang: Language) -> ReportLabels {
    match lang {
        Language::En => ReportLabels {
            total: "Total patients",
            top_profession: "Most common profession",
            gender_ratio: "Gender ratio",
            mean_age: "Mean age",
            persons: "patients",
            years_old: "years",
            no_data: "No data for the selected filters.",
            time_slots: "Time slots",
            any_time: "any",
        },
        Language::Ja => ReportLabels {
            total: "総患者数",
            top_profession: "最も多い職業",
            gender_ratio: "性別比率",
            mean_age: "平均年齢",
            persons: "人",
            years_old: "歳",
            no_data: "選択された条件のデータがありません。",
            time_slots: "時間帯",
            any_time: "指定なし",
        },
    }
}
