// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::query_aggregated;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::models::filter::TaskFilter;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the detailed (aggregated) records.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the rows matching `filter` to `file`. Returns the row count;
    /// nothing is written when no row matches.
    pub fn export(
        db_path: &str,
        filter: &TaskFilter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if filter.is_empty() {
            log::info!("exporting every stored record");
        }

        let rows: Vec<RecordExport> = {
            let pool = DbPool::open(db_path)?;
            query_aggregated(&pool.conn, filter)?
                .iter()
                .map(RecordExport::from)
                .collect()
        };

        if rows.is_empty() {
            warning("No records found for the selected filters.");
            return Ok(0);
        }

        log::debug!("exporting {} row(s) as {}", rows.len(), format.as_str());
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
