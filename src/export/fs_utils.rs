// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use crate::utils::date::today;
use std::path::{Path, PathBuf};

/// Checks whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists and no `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// `maintenance-report-YYYYMMDD.<ext>` in the current directory.
pub(crate) fn default_report_path(format: ExportFormat) -> AppResult<PathBuf> {
    let name = format!(
        "maintenance-report-{}.{}",
        today().format("%Y%m%d"),
        format.as_str()
    );
    Ok(std::env::current_dir()?.join(name))
}
