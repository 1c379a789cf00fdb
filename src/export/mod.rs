pub mod document;
mod fs_utils;
mod json_csv;
mod pdf;
pub mod text;
mod xlsx;

pub use document::{
    DaySection, DocumentHeader, EventRow, FlatRow, PrintOptions, ProjectContext,
    ScheduleDocument, VendorRow, build_document, flatten_rows,
};
pub(crate) use fs_utils::ensure_writable;

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::errors::AppResult;
use crate::ui::messages::success;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Write an assembled document to `path` in the requested format.
///
/// `force` skips the overwrite confirmation for existing files.
pub fn write_document(
    doc: &ScheduleDocument,
    path: &Path,
    format: &ExportFormat,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Text => {
            fs::write(path, text::render_document(doc, false))?;
            notify_export_success("Text", path);
            Ok(())
        }
        ExportFormat::Csv => json_csv::export_csv(doc, path),
        ExportFormat::Json => json_csv::export_json(doc, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(doc, path),
        ExportFormat::Pdf => pdf::export_pdf(doc, path),
    }
}
