use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use unicode_width::UnicodeWidthStr;

use crate::errors::{AppError, AppResult};
use crate::export::document::ScheduleDocument;
use crate::export::{flatten_rows, notify_export_success};
use crate::ui::messages::info;

const HEADERS: [&str; 8] = [
    "Tag",
    "Zeit",
    "Dauer",
    "Konflikt",
    "Programmpunkt",
    "Ort",
    "Verantwortlich",
    "Notizen",
];

/// Export XLSX with a styled header row, banded rows, and auto column
/// widths.
pub(crate) fn export_xlsx(doc: &ScheduleDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold();
    worksheet
        .write_with_format(0, 0, doc.header.title.as_str(), &title_format)
        .map_err(to_export_error)?;
    worksheet
        .write(1, 0, doc.header.couple.as_str())
        .map_err(to_export_error)?;

    let rows = flatten_rows(doc);
    let table_start: u32 = 3;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x7A5C61))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(table_start, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(table_start + 1, 0).ok();

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF6EFF0);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, flat) in rows.iter().enumerate() {
        let row = table_start + 1 + row_index as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let values = [
            flat.day.as_str(),
            flat.time.as_str(),
            flat.duration.as_str(),
            if flat.conflict { "ja" } else { "" },
            flat.title.as_str(),
            flat.location.as_str(),
            flat.owner.as_str(),
            flat.notes.as_str(),
        ];

        let cell_format = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Left);

        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_with_format(row, col as u16, *value, &cell_format)
                .map_err(to_export_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(*value));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
