//! Plain-text rendering of a schedule document, used both for the
//! interactive `list` view (colored) and the text export (plain).

use ansi_term::Colour;

use crate::export::document::{ScheduleDocument, VendorRow};
use crate::utils::table::Table;

const NOTES_WRAP_WIDTH: usize = 42;

fn conflict_badge(color: bool) -> String {
    if color {
        Colour::Red.bold().paint("⚠").to_string()
    } else {
        "⚠".to_string()
    }
}

pub fn render_document(doc: &ScheduleDocument, color: bool) -> String {
    let mut out = String::new();

    // Header block
    let title = if color {
        Colour::Blue.bold().paint(doc.header.title.as_str()).to_string()
    } else {
        doc.header.title.clone()
    };
    out.push_str(&title);
    out.push('\n');
    out.push_str(&doc.header.couple);
    out.push('\n');
    if let Some(date) = &doc.header.date {
        out.push_str(date);
        out.push('\n');
    }
    if let Some(location) = &doc.header.location {
        out.push_str(location);
        out.push('\n');
    }

    // Any section carrying detail columns widens every table of the
    // document, so headers stay consistent across days.
    let detail = doc
        .sections
        .iter()
        .any(|s| s.rows.iter().any(|r| r.owner.is_some() || r.notes.is_some()));

    for section in &doc.sections {
        out.push('\n');
        let heading = format!("=== {} ===", section.heading);
        if color {
            out.push_str(&Colour::Blue.bold().paint(heading).to_string());
        } else {
            out.push_str(&heading);
        }
        out.push('\n');

        if section.rows.is_empty() {
            out.push_str("(keine Programmpunkte)\n");
            continue;
        }

        let mut headers = vec!["Zeit", "Dauer", "", "Programmpunkt", "Ort"];
        if detail {
            headers.push("Verantwortlich");
            headers.push("Notizen");
        }
        let mut table = Table::new(headers);

        for row in &section.rows {
            let mut cells = vec![
                row.time.clone(),
                row.duration.clone().unwrap_or_default(),
                if row.conflict {
                    conflict_badge(color)
                } else {
                    String::new()
                },
                row.title.clone(),
                row.location.clone().unwrap_or_default(),
            ];
            if detail {
                cells.push(row.owner.clone().unwrap_or_default());
                cells.push(
                    row.notes
                        .as_deref()
                        .map(|n| textwrap::fill(n, NOTES_WRAP_WIDTH))
                        .unwrap_or_default(),
                );
            }
            table.add_row(cells);
        }

        out.push_str(&table.render());
    }

    if let Some(vendors) = &doc.vendors {
        out.push('\n');
        let heading = "=== Dienstleister-Kontakte ===";
        if color {
            out.push_str(&Colour::Blue.bold().paint(heading).to_string());
        } else {
            out.push_str(heading);
        }
        out.push('\n');
        out.push_str(&render_vendor_table(vendors));
    }

    out.push('\n');
    out.push_str(&doc.footer);
    out.push('\n');

    out
}

fn render_vendor_table(vendors: &[VendorRow]) -> String {
    if vendors.is_empty() {
        return "(keine bestätigten Dienstleister)\n".to_string();
    }

    let mut table = Table::new(vec!["Name", "Kategorie", "Kontakt", "E-Mail", "Telefon"]);
    for v in vendors {
        table.add_row(vec![
            v.name.clone(),
            v.category.clone(),
            v.contact_name.clone().unwrap_or_default(),
            v.email.clone().unwrap_or_default(),
            v.phone.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}
