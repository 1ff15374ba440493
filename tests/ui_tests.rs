use patient_trends::config::{Config, Language};
use patient_trends::errors::AppError;
use patient_trends::models::distribution::{Distribution, DistributionEntry, DistributionKind};
use patient_trends::models::time_slot::TimeSlot;
use patient_trends::ui::chart::{bar_length, render_bar_chart};
use patient_trends::ui::labels::{distribution_title, report_labels, slot_label};
use patient_trends::utils::formatting::{display_width, pad_right, percent};
use patient_trends::utils::table::{Column, Table};

fn dist(entries: &[(&str, usize)]) -> Distribution {
    Distribution::new(
        DistributionKind::Profession,
        entries
            .iter()
            .map(|(l, c)| DistributionEntry {
                label: l.to_string(),
                count: *c,
            })
            .collect(),
    )
}

#[test]
fn test_bar_length_scales_to_width() {
    assert_eq!(bar_length(10, 10, 40), 40);
    assert_eq!(bar_length(5, 10, 40), 20);
    assert_eq!(bar_length(1, 1000, 40), 1);
    assert_eq!(bar_length(0, 10, 40), 0);
}

#[test]
fn test_chart_has_one_line_per_entry_with_counts() {
    let chart = render_bar_chart("Jobs", &dist(&[("Teacher", 2), ("", 1), ("教師", 0)]), 10);
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Jobs"));
    assert!(lines[1].contains("Teacher") && lines[1].trim_end().ends_with('2'));
    assert!(lines[2].contains("(blank)") && lines[2].trim_end().ends_with('1'));
    assert!(lines[3].contains("教師") && lines[3].trim_end().ends_with('0'));
}

#[test]
fn test_padding_uses_terminal_columns() {
    assert_eq!(display_width("教師"), 4);
    assert_eq!(pad_right("教師", 6), "教師  ");
    assert_eq!(percent(2.0 / 3.0), "66.7%");
}

#[test]
fn test_table_widens_columns() {
    let mut table = Table::new(vec![Column::new("id"), Column::new("label")]);
    table.add_row(vec!["early-morning".into(), "早朝".into()]);
    let out = table.render();

    let header = out.lines().next().unwrap();
    assert!(header.starts_with("id            "));
    assert!(out.contains("early-morning 早朝"));
}

#[test]
fn test_labels_follow_language() {
    assert_eq!(slot_label(TimeSlot::Noon, Language::Ja), "正午(12:00-13:00)");
    assert_eq!(slot_label(TimeSlot::Noon, Language::En), "Noon (12:00-13:00)");
    assert_eq!(distribution_title(DistributionKind::Age, Language::Ja), "年齢分布");
    assert_eq!(report_labels(Language::Ja).total, "総患者数");
    assert_eq!(report_labels(Language::Ja).time_slots, "時間帯");
    assert_eq!(report_labels(Language::En).any_time, "any");
}

#[test]
fn test_slot_ids_round_trip() {
    for slot in TimeSlot::ALL {
        assert_eq!(TimeSlot::from_id(slot.id()), Some(slot));
    }
    assert_eq!(TimeSlot::from_id("Early-Morning"), Some(TimeSlot::EarlyMorning));
    assert_eq!(TimeSlot::from_id("lunch"), None);
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let cfg = Config::from_yaml("language: ja\n").unwrap();
    assert_eq!(cfg.language, Language::Ja);
    assert_eq!(cfg.bar_width, 40);
    assert!(cfg.database.ends_with("rfp.db"));
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        Config::from_yaml("bar_width: 0\n"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_yaml("language: fr\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_config_expands_home() {
    let cfg = Config::from_yaml("database: ~/clinic/rfp.db\n").unwrap();
    let path = cfg.database_path();
    assert!(path.ends_with("clinic/rfp.db"));
    assert!(!path.to_string_lossy().starts_with('~'));
}
