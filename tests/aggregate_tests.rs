use chrono::NaiveDate;
use patient_trends::core::calculator::ages::{
    age_distribution, band_label, band_start, summarize_ages,
};
use patient_trends::core::calculator::categories::count_by;
use patient_trends::core::logic::Core;
use patient_trends::models::distribution::DistributionKind;
use patient_trends::models::filter::ReservationFilter;
use patient_trends::models::user::UserRecord;
use patient_trends::utils::date::age_on;
use patient_trends::utils::formatting::one_decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn user(id: i64, birthday: Option<NaiveDate>, gender: &str, profession: &str) -> UserRecord {
    UserRecord {
        id,
        birthday,
        gender: gender.to_string(),
        profession: profession.to_string(),
    }
}

fn june_2024() -> ReservationFilter {
    ReservationFilter::all_slots(2024, 6).unwrap()
}

fn example() -> Vec<UserRecord> {
    vec![
        user(1, Some(d(1990, 3, 15)), "F", "Teacher"),
        user(2, Some(d(1985, 11, 2)), "M", "Teacher"),
        user(3, Some(d(2000, 6, 1)), "F", "Engineer"),
    ]
}

fn pairs(v: &[(&str, usize)]) -> Vec<(String, usize)> {
    v.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

#[test]
fn test_reference_example() {
    let report = Core::summarize(&june_2024(), &example(), d(2024, 6, 1));

    assert_eq!(report.total_users, 3);
    assert_eq!(report.professions.pairs(), pairs(&[("Teacher", 2), ("Engineer", 1)]));
    assert_eq!(report.genders.pairs(), pairs(&[("F", 2), ("M", 1)]));
    assert_eq!(Core::valid_ages(&example(), d(2024, 6, 1)), vec![34, 38, 24]);

    let age = report.headline.age.clone().unwrap();
    assert_eq!(age.mean, 32.0);
    assert_eq!((age.min, age.max), (24, 38));

    assert_eq!(
        report.ages.pairs(),
        pairs(&[
            ("0-4", 0),
            ("5-9", 0),
            ("10-14", 0),
            ("15-19", 0),
            ("20-24", 1),
            ("25-29", 0),
            ("30-34", 1),
            ("35-39", 1),
        ])
    );
    assert_eq!(report.skipped_birthdays, 0);
}

#[test]
fn test_headline_metrics() {
    let report = Core::summarize(&june_2024(), &example(), d(2024, 6, 1));

    let top = report.headline.top_profession.unwrap();
    assert_eq!(top.value, "Teacher");
    assert_eq!(top.count, 2);
    assert!((top.share - 2.0 / 3.0).abs() < 1e-9);

    let ratio = report.headline.gender_ratio.unwrap();
    assert_eq!((ratio.first.as_str(), ratio.second.as_str()), ("F", "M"));
    assert_eq!(ratio.counts(), "2/1");
}

#[test]
fn test_distributions_sum_to_total() {
    let users = vec![
        user(1, Some(d(1971, 1, 1)), "F", "Nurse"),
        user(2, Some(d(1999, 12, 31)), "M", "Clerk"),
        user(3, Some(d(2019, 5, 5)), "F", "Clerk"),
        user(4, Some(d(1950, 7, 7)), "X", "Nurse"),
        user(5, Some(d(1988, 2, 2)), "M", "Chef"),
    ];
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));

    assert_eq!(report.professions.total(), report.total_users);
    assert_eq!(report.genders.total(), report.total_users);
    assert_eq!(report.ages.total(), report.total_users);
}

#[test]
fn test_ties_keep_first_seen_order() {
    let users = vec![
        user(1, None, "M", "Nurse"),
        user(2, None, "F", "Clerk"),
        user(3, None, "F", "Clerk"),
        user(4, None, "M", "Nurse"),
        user(5, None, "X", "Chef"),
    ];
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));

    assert_eq!(
        report.professions.pairs(),
        pairs(&[("Nurse", 2), ("Clerk", 2), ("Chef", 1)])
    );
    assert_eq!(report.genders.pairs(), pairs(&[("M", 2), ("F", 2), ("X", 1)]));
    assert_eq!(report.headline.top_profession.unwrap().value, "Nurse");
}

#[test]
fn test_grouping_is_exact_and_case_sensitive() {
    let dist = count_by(
        DistributionKind::Profession,
        ["teacher", "Teacher", "Teacher ", "Teacher"],
    );
    assert_eq!(
        dist.pairs(),
        pairs(&[("Teacher", 2), ("teacher", 1), ("Teacher ", 1)])
    );
}

#[test]
fn test_single_gender_has_no_ratio() {
    let users = vec![
        user(1, Some(d(1990, 1, 1)), "F", "Teacher"),
        user(2, Some(d(1991, 1, 1)), "F", "Engineer"),
    ];
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));

    assert!(report.headline.gender_ratio.is_none());
    assert_eq!(report.genders.pairs(), pairs(&[("F", 2)]));
}

#[test]
fn test_bad_birthdays_are_skipped_for_ages_only() {
    let users = vec![
        user(1, Some(d(1990, 3, 15)), "F", "Teacher"),
        user(2, None, "M", "Teacher"),
        user(3, Some(d(2030, 1, 1)), "F", "Engineer"),
    ];
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));

    assert_eq!(report.total_users, 3);
    assert_eq!(report.professions.total(), 3);
    assert_eq!(report.skipped_birthdays, 2);
    assert_eq!(report.ages.total(), 1);

    let age = report.headline.age.unwrap();
    assert_eq!((age.mean, age.min, age.max), (34.0, 34, 34));
}

#[test]
fn test_no_valid_birthday_means_no_age_summary() {
    let users = vec![user(1, None, "F", "Teacher")];
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));

    assert!(report.headline.age.is_none());
    assert!(report.ages.entries.is_empty());
    assert_eq!(report.skipped_birthdays, 1);
}

#[test]
fn test_summarize_is_idempotent() {
    let users = example();
    let a = Core::summarize(&june_2024(), &users, d(2024, 6, 1));
    let b = Core::summarize(&june_2024(), &users, d(2024, 6, 1));
    assert_eq!(a, b);
}

#[test]
fn test_mean_age_is_rounded_to_one_decimal() {
    let users = vec![
        user(1, Some(d(2000, 1, 1)), "F", "A"),
        user(2, Some(d(2000, 1, 1)), "F", "A"),
        user(3, Some(d(1999, 1, 1)), "F", "A"),
    ];
    // ages 24, 24, 25 → 24.333…
    let report = Core::summarize(&june_2024(), &users, d(2024, 6, 1));
    assert_eq!(one_decimal(report.headline.age.unwrap().mean), "24.3");
}

#[test]
fn test_mean_age_halves_round_to_even() {
    // 129 / 4 = 32.25 exactly
    let age = summarize_ages(&[32, 32, 32, 33]).unwrap();
    assert_eq!(age.mean, 32.25);
    assert_eq!(one_decimal(age.mean), "32.2");

    // 97 / 4 = 24.25 exactly
    assert_eq!(one_decimal(summarize_ages(&[24, 24, 24, 25]).unwrap().mean), "24.2");
    // 35 / 4 = 8.75 exactly, odd digit rounds up
    assert_eq!(one_decimal(summarize_ages(&[8, 9, 9, 9]).unwrap().mean), "8.8");
}

#[test]
fn test_age_on_counts_the_birthday_itself() {
    assert_eq!(age_on(d(2000, 6, 1), d(2024, 6, 1)), 24);
    assert_eq!(age_on(d(2000, 6, 2), d(2024, 6, 1)), 23);
    assert_eq!(age_on(d(2000, 5, 31), d(2024, 6, 1)), 24);
    assert_eq!(age_on(d(2024, 6, 1), d(2024, 6, 1)), 0);
}

#[test]
fn test_age_bands_are_half_open() {
    assert_eq!(band_start(0), 0);
    assert_eq!(band_start(4), 0);
    assert_eq!(band_start(5), 5);
    assert_eq!(band_start(40), 40);
    assert_eq!(band_label(40), "40-44");

    // an age on a band boundary gets its own band, nothing trails after it
    let dist = age_distribution(&[3, 40]);
    let labels: Vec<String> = dist.entries.iter().map(|e| e.label.clone()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0-4"));
    assert_eq!(labels.last().map(String::as_str), Some("40-44"));
    assert_eq!(dist.entries.len(), 9);
    assert_eq!(dist.total(), 2);
}

#[test]
fn test_every_age_lands_in_exactly_one_band() {
    let ages: Vec<i32> = (0..=97).collect();
    let dist = age_distribution(&ages);

    assert_eq!(dist.total(), ages.len());
    assert_eq!(dist.entries.len(), 20);
    let (last, full) = dist.entries.split_last().unwrap();
    assert!(full.iter().all(|e| e.count == 5));
    assert_eq!((last.label.as_str(), last.count), ("95-99", 3));
}
