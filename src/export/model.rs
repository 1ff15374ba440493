// src/export/model.rs

use crate::models::report::Report;
use serde::Serialize;

/// Flat row for CSV: one line per distribution entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DistributionRow {
    pub period: String,
    pub distribution: String,
    pub label: String,
    pub count: usize,
}

/// Flatten the three distributions of a report, in report order.
pub fn report_to_rows(report: &Report) -> Vec<DistributionRow> {
    let period = report.filter.period_label();
    report
        .distributions()
        .into_iter()
        .flat_map(|dist| {
            let period = period.clone();
            dist.entries.iter().map(move |e| DistributionRow {
                period: period.clone(),
                distribution: dist.kind.as_str().to_string(),
                label: e.label.clone(),
                count: e.count,
            })
        })
        .collect()
}
