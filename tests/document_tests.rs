use chrono::{Locale, NaiveDate};

use runsheet::core::assembler::{DayView, assemble_day};
use runsheet::export::{PrintOptions, ProjectContext, build_document, flatten_rows, text};
use runsheet::models::{NewEvent, Vendor};
use runsheet::store::ScheduleStore;
use runsheet::utils::date::{format_day_date, resolve_locale};

fn sample_views() -> (Vec<DayView>, Vec<i64>) {
    let store = ScheduleStore::new();
    let main = store
        .add_day("Hochzeitstag", NaiveDate::from_ymd_opt(2026, 7, 12))
        .unwrap();
    let brunch = store.add_day("Brunch", None).unwrap();

    store
        .add_event(
            main.id,
            NewEvent {
                title: "Trauung".to_string(),
                start_time: "14:00".to_string(),
                end_time: Some("14:45".to_string()),
                location: Some("Kirche".to_string()),
                description: Some("Ringe nicht vergessen".to_string()),
                owner: Some("Trauzeuge".to_string()),
                visibility: None,
            },
        )
        .unwrap();
    store
        .add_event(main.id, NewEvent::new("Gratulation", "14:30").end("15:00"))
        .unwrap();
    store
        .add_event(brunch.id, NewEvent::new("Kaffee", "10:00"))
        .unwrap();

    let days = store.list_days();
    let views = days.iter().map(|d| assemble_day(d, true)).collect();
    (views, vec![main.id, brunch.id])
}

fn sample_context() -> ProjectContext {
    ProjectContext {
        couple: "Anna & Ben".to_string(),
        wedding_date: NaiveDate::from_ymd_opt(2026, 7, 12),
        location: Some("Gut Sonnenhof".to_string()),
        vendors: vec![Vendor {
            name: "Blumen Krause".to_string(),
            category: "Florist".to_string(),
            contact_name: Some("F. Krause".to_string()),
            email: Some("info@blumen-krause.de".to_string()),
            phone: None,
            status: "booked".to_string(),
        }],
        locale: Locale::de_DE,
    }
}

#[test]
fn test_header_sections_and_footer() {
    let (views, _) = sample_views();
    let doc = build_document(&views, &sample_context(), &PrintOptions::default());

    assert_eq!(doc.header.couple, "Anna & Ben");
    assert_eq!(doc.header.location.as_deref(), Some("Gut Sonnenhof"));
    let date = doc.header.date.as_deref().unwrap();
    assert!(date.contains("Juli 2026"), "unexpected date line: {date}");

    assert_eq!(doc.sections.len(), 2);
    assert!(doc.sections[0].heading.starts_with("Hochzeitstag"));
    assert!(doc.sections[0].heading.contains("Juli 2026"));
    // Date-less day keeps a bare heading.
    assert_eq!(doc.sections[1].heading, "Brunch");

    assert!(doc.footer.contains("Anna & Ben"));
}

#[test]
fn test_rows_carry_time_duration_and_conflicts() {
    let (views, _) = sample_views();
    let doc = build_document(&views, &sample_context(), &PrintOptions::default());

    let rows = &doc.sections[0].rows;
    assert_eq!(rows[0].time, "14:00 – 14:45");
    assert_eq!(rows[0].duration.as_deref(), Some("45m"));
    assert!(rows[0].conflict && rows[1].conflict);

    // Marker event: bare time, no duration.
    let brunch_rows = &doc.sections[1].rows;
    assert_eq!(brunch_rows[0].time, "10:00");
    assert_eq!(brunch_rows[0].duration, None);
    assert!(!brunch_rows[0].conflict);
}

#[test]
fn test_detail_option_gates_owner_and_notes() {
    let (views, _) = sample_views();
    let ctx = sample_context();

    let plain = build_document(&views, &ctx, &PrintOptions::default());
    assert!(plain.sections[0].rows.iter().all(|r| r.owner.is_none() && r.notes.is_none()));

    let detailed = build_document(
        &views,
        &ctx,
        &PrintOptions {
            detail: true,
            ..Default::default()
        },
    );
    let row = &detailed.sections[0].rows[0];
    assert_eq!(row.owner.as_deref(), Some("Trauzeuge"));
    assert_eq!(row.notes.as_deref(), Some("Ringe nicht vergessen"));
}

#[test]
fn test_contacts_option_gates_vendor_table() {
    let (views, _) = sample_views();
    let ctx = sample_context();

    let without = build_document(&views, &ctx, &PrintOptions::default());
    assert!(without.vendors.is_none());

    let with = build_document(
        &views,
        &ctx,
        &PrintOptions {
            contacts: true,
            ..Default::default()
        },
    );
    let vendors = with.vendors.unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].name, "Blumen Krause");
}

#[test]
fn test_day_filter_limits_sections() {
    let (views, ids) = sample_views();
    let doc = build_document(
        &views,
        &sample_context(),
        &PrintOptions {
            day_ids: Some(vec![ids[1]]),
            ..Default::default()
        },
    );

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].heading, "Brunch");
}

#[test]
fn test_flatten_repeats_day_heading_per_row() {
    let (views, _) = sample_views();
    let doc = build_document(&views, &sample_context(), &PrintOptions::default());

    let rows = flatten_rows(&doc);
    assert_eq!(rows.len(), 3);
    assert!(rows[0].day.starts_with("Hochzeitstag"));
    assert!(rows[1].day.starts_with("Hochzeitstag"));
    assert_eq!(rows[2].day, "Brunch");
    assert!(rows[0].conflict);
}

#[test]
fn test_text_rendering() {
    let (views, _) = sample_views();
    let doc = build_document(
        &views,
        &sample_context(),
        &PrintOptions {
            contacts: true,
            ..Default::default()
        },
    );

    let out = text::render_document(&doc, false);

    assert!(out.contains("Tagesablauf"));
    assert!(out.contains("Anna & Ben"));
    assert!(out.contains("=== Brunch ==="));
    assert!(out.contains("14:00 – 14:45"));
    assert!(out.contains("Trauung"));
    // Conflict badge shows for the overlapping pair.
    assert!(out.contains("⚠"));
    // Vendor table present with its heading.
    assert!(out.contains("Dienstleister-Kontakte"));
    assert!(out.contains("Blumen Krause"));
    // Plain rendering carries no ANSI escapes.
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_locale_resolution_and_date_formatting() {
    assert!(matches!(resolve_locale("de_DE"), Locale::de_DE));
    assert!(matches!(resolve_locale("nonsense"), Locale::en_US));

    let date = NaiveDate::from_ymd_opt(2026, 7, 12).unwrap();
    let de = format_day_date(date, Locale::de_DE);
    assert!(de.contains("Juli"), "german month name in {de}");
    let en = format_day_date(date, Locale::en_US);
    assert!(en.contains("July"), "english month name in {en}");
}
