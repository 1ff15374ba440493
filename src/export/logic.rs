// src/export/logic.rs

use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::filter::ReservationFilter;
use crate::models::report::ReportOutcome;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Run the report for `filter` and write it to `file`.
    ///
    /// With no matching reservations nothing is written and a warning is
    /// shown instead.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filter: &ReservationFilter,
        as_of: NaiveDate,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let report = match build_report(pool, filter, as_of)? {
            ReportOutcome::Ready(report) => report,
            ReportOutcome::NoData(f) => {
                warning(format!(
                    "No data for {}: nothing exported.",
                    f.period_label()
                ));
                return Ok(());
            }
        };

        match format {
            ExportFormat::Csv => export_csv(&report, path)?,
            ExportFormat::Json => export_json(&report, path)?,
        }

        Ok(())
    }
}
