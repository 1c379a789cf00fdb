//! Print/export projector: turns assembled day views plus project
//! context into a flat, renderer-agnostic document model.
//!
//! Pure read-only transformation. Conflict flags are taken from the day
//! views as-is; detection ran exactly once when the views were
//! assembled, and nothing here re-runs it or touches the store.

use chrono::{Locale, NaiveDate};
use serde::Serialize;

use crate::core::assembler::DayView;
use crate::models::Vendor;
use crate::utils::date::format_day_date;
use crate::utils::time::{format_duration, format_time_range};

/// Options supplied by the print/export entry point.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Restrict the document to these day ids; `None` prints all days.
    pub day_ids: Option<Vec<i64>>,
    /// Include owner and notes columns.
    pub detail: bool,
    /// Append the confirmed-vendor contact table.
    pub contacts: bool,
    /// When off, callers assemble day views without conflict detection
    /// and no badge ever shows. The projector itself only copies flags.
    pub conflicts: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            day_ids: None,
            detail: false,
            contacts: false,
            conflicts: true,
        }
    }
}

/// Auxiliary data owned by the surrounding product, handed in verbatim.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub couple: String,
    pub wedding_date: Option<NaiveDate>,
    pub location: Option<String>,
    /// Vendors whose booking is confirmed; the caller filters, the
    /// document renders the list as given.
    pub vendors: Vec<Vendor>,
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentHeader {
    pub title: String,
    pub couple: String,
    pub date: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    pub time: String,
    pub duration: Option<String>,
    pub conflict: bool,
    pub title: String,
    pub location: Option<String>,
    /// Only populated when the detail option is on.
    pub owner: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySection {
    pub day_id: i64,
    pub heading: String,
    pub rows: Vec<EventRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorRow {
    pub name: String,
    pub category: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDocument {
    pub header: DocumentHeader,
    pub sections: Vec<DaySection>,
    pub vendors: Option<Vec<VendorRow>>,
    pub footer: String,
}

pub fn build_document(
    views: &[DayView],
    ctx: &ProjectContext,
    opts: &PrintOptions,
) -> ScheduleDocument {
    let sections: Vec<DaySection> = views
        .iter()
        .filter(|v| match &opts.day_ids {
            Some(ids) => ids.contains(&v.day_id),
            None => true,
        })
        .map(|v| day_section(v, ctx.locale, opts.detail))
        .collect();

    let vendors = opts.contacts.then(|| {
        ctx.vendors
            .iter()
            .map(|v| VendorRow {
                name: v.name.clone(),
                category: v.category.clone(),
                contact_name: v.contact_name.clone(),
                email: v.email.clone(),
                phone: v.phone.clone(),
            })
            .collect()
    });

    ScheduleDocument {
        header: DocumentHeader {
            title: "Tagesablauf".to_string(),
            couple: ctx.couple.clone(),
            date: ctx.wedding_date.map(|d| format_day_date(d, ctx.locale)),
            location: ctx.location.clone(),
        },
        sections,
        vendors,
        footer: format!("{} · erstellt mit runsheet", ctx.couple),
    }
}

fn day_section(view: &DayView, locale: Locale, detail: bool) -> DaySection {
    let heading = match view.date {
        Some(d) => format!("{} – {}", view.name, format_day_date(d, locale)),
        None => view.name.clone(),
    };

    let rows = view
        .events
        .iter()
        .map(|ev| EventRow {
            time: format_time_range(&ev.event.start_time, ev.event.end_time.as_deref()),
            duration: ev.duration_minutes.map(format_duration),
            conflict: ev.conflict,
            title: ev.event.title.clone(),
            location: ev.event.location.clone(),
            owner: detail.then(|| ev.event.owner.clone()).flatten(),
            notes: detail.then(|| ev.event.description.clone()).flatten(),
        })
        .collect();

    DaySection {
        day_id: view.day_id,
        heading,
        rows,
    }
}

/// Flat per-event rows for the tabular exporters (CSV/XLSX), one record
/// per event with its day heading repeated.
#[derive(Debug, Clone, Serialize)]
pub struct FlatRow {
    pub day: String,
    pub time: String,
    pub duration: String,
    pub conflict: bool,
    pub title: String,
    pub location: String,
    pub owner: String,
    pub notes: String,
}

pub fn flatten_rows(doc: &ScheduleDocument) -> Vec<FlatRow> {
    let mut out = Vec::new();

    for section in &doc.sections {
        for row in &section.rows {
            out.push(FlatRow {
                day: section.heading.clone(),
                time: row.time.clone(),
                duration: row.duration.clone().unwrap_or_default(),
                conflict: row.conflict,
                title: row.title.clone(),
                location: row.location.clone().unwrap_or_default(),
                owner: row.owner.clone().unwrap_or_default(),
                notes: row.notes.clone().unwrap_or_default(),
            });
        }
    }

    out
}
