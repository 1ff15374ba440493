use crate::cli::commands::{open_reporting_db, resolve_filter};
use crate::cli::parser::{Commands, ReportFormat};
use crate::config::{Config, Language};
use crate::core::report::build_report;
use crate::errors::{AppError, AppResult};
use crate::models::report::{Report, ReportOutcome};
use crate::ui::chart::render_bar_chart;
use crate::ui::labels::{distribution_title, report_labels, slot_label};
use crate::ui::messages::{header, metric, warning};
use crate::utils::formatting::{label_or_placeholder, one_decimal, percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { filter, format } = cmd {
        let mut pool = open_reporting_db(cfg)?;
        let (filter, as_of) = resolve_filter(&mut pool, filter)?;

        let outcome = build_report(&mut pool, &filter, as_of)?;

        match (format, outcome) {
            (ReportFormat::Text, ReportOutcome::Ready(report)) => print_report(&report, cfg),
            (ReportFormat::Text, ReportOutcome::NoData(f)) => {
                let labels = report_labels(cfg.language);
                warning(format!("{} [{}]", labels.no_data, f.period_label()));
            }
            (ReportFormat::Json, ReportOutcome::Ready(report)) => print_json(&*report)?,
            (ReportFormat::Json, ReportOutcome::NoData(f)) => print_json(&serde_json::json!({
                "status": "no_data",
                "filter": f,
            }))?,
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let s = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
    println!("{s}");
    Ok(())
}

fn print_report(report: &Report, cfg: &Config) {
    let labels = report_labels(cfg.language);
    let head = &report.headline;

    header(report.filter.period_label());
    println!("{}", slots_line(report, cfg.language));
    println!("{}: {} {}\n", labels.total, report.total_users, labels.persons);

    if let Some(top) = &head.top_profession {
        metric(
            labels.top_profession,
            label_or_placeholder(&top.value),
            format!("{} {}, {}", top.count, labels.persons, percent(top.share)),
        );
    }

    match (&head.gender_ratio, report.genders.first()) {
        (Some(ratio), _) => metric(
            labels.gender_ratio,
            format!(
                "{}/{}",
                label_or_placeholder(&ratio.first),
                label_or_placeholder(&ratio.second)
            ),
            ratio.counts(),
        ),
        // a single gender: show it alone instead of a ratio
        (None, Some(only)) => metric(
            labels.gender_ratio,
            label_or_placeholder(&only.label),
            format!("{} {}", only.count, labels.persons),
        ),
        (None, None) => {}
    }

    match &head.age {
        Some(age) => metric(
            labels.mean_age,
            format!("{} {}", one_decimal(age.mean), labels.years_old),
            format!("{}-{} {}", age.min, age.max, labels.years_old),
        ),
        None => metric(labels.mean_age, "n/a", "no valid birthday"),
    }

    if report.skipped_birthdays > 0 {
        warning(format!(
            "{} patient(s) without a valid birthday left out of age statistics",
            report.skipped_birthdays
        ));
    }

    for dist in report.distributions() {
        println!();
        print!(
            "{}",
            render_bar_chart(distribution_title(dist.kind, cfg.language), dist, cfg.bar_width)
        );
    }
}

fn slots_line(report: &Report, lang: Language) -> String {
    let labels = report_labels(lang);
    if report.filter.slots.is_empty() {
        return format!("{}: {}", labels.time_slots, labels.any_time);
    }
    let names: Vec<&str> = report
        .filter
        .slots
        .iter()
        .map(|s| slot_label(*s, lang))
        .collect();
    format!("{}: {}", labels.time_slots, names.join(", "))
}
