use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::document::ScheduleDocument;
use crate::export::{flatten_rows, notify_export_success};
use crate::ui::messages::info;

/// Export the full document model as pretty-printed JSON.
pub(crate) fn export_json(doc: &ScheduleDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export flat per-event rows as CSV (header row via serde).
pub(crate) fn export_csv(doc: &ScheduleDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in flatten_rows(doc) {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
