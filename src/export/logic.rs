// src/export/logic.rs

use crate::core::{RecordStore, filter};
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{default_report_path, ensure_writable};
use crate::export::{ExportFormat, notify_export_success, to_csv, to_json};
use crate::models::category::CategoryFilter;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// High level export: filter, render, write.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered view of `store`.
    ///
    /// Returns the written path, or `None` when the view is empty and
    /// nothing was written.
    pub fn export<S: KeyValueStore>(
        store: &RecordStore<S>,
        format: ExportFormat,
        file: Option<&str>,
        category: &CategoryFilter,
        search: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = match file {
            Some(f) => {
                let p = expand_tilde(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "output file path must be absolute: {f}"
                    )));
                }
                p
            }
            None => default_report_path(format)?,
        };

        let view = filter(store.all(), category, search);

        if view.is_empty() {
            warning("Nothing to export: no records match the selected filters.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting {} record(s) to {}: {}",
            view.len(),
            format.label(),
            path.display()
        ));

        let body = match format {
            ExportFormat::Csv => to_csv(view.iter().copied())?,
            ExportFormat::Json => to_json(view.iter().copied())?,
        };

        fs::write(&path, body)?;

        notify_export_success(format.label(), view.len(), &path);
        Ok(Some(path))
    }
}
