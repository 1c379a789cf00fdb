mod common;
use common::{init_data_with_day, rsh, setup_data_file, temp_out};

use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_json_document() {
    let data_path = setup_data_file("exp_json");
    let out = temp_out("exp_json", "json");
    init_data_with_day(&data_path);

    rsh()
        .args([
            "--file", &data_path, "export", &out, "--format", "json", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json export");
    assert!(content.contains("\"Tagesablauf\""));
    assert!(content.contains("Trauung"));
    assert!(content.contains("14:00 – 14:45"));
    // No contacts requested: the vendor table is absent, not empty.
    assert!(content.contains("\"vendors\": null"));
}

#[test]
fn test_export_csv_rows() {
    let data_path = setup_data_file("exp_csv");
    let out = temp_out("exp_csv", "csv");
    init_data_with_day(&data_path);

    rsh()
        .args([
            "--file", &data_path, "export", &out, "--format", "csv", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv export");
    let mut lines = content.lines();
    let header = lines.next().expect("csv header");
    assert!(header.contains("day") && header.contains("time") && header.contains("title"));
    // One record per event.
    assert_eq!(lines.count(), 2);
    assert!(content.contains("Sektempfang"));
}

#[test]
fn test_export_text_plain() {
    let data_path = setup_data_file("exp_text");
    let out = temp_out("exp_text", "txt");
    init_data_with_day(&data_path);

    rsh()
        .args([
            "--file", &data_path, "export", &out, "--format", "text", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read text export");
    assert!(content.contains("Tagesablauf"));
    assert!(content.contains("Trauung"));
    assert!(!content.contains('\x1b'), "text export must be ANSI-free");
}

#[test]
fn test_export_pdf_and_xlsx_write_files() {
    let data_path = setup_data_file("exp_bin");
    init_data_with_day(&data_path);

    let pdf = temp_out("exp_bin", "pdf");
    rsh()
        .args([
            "--file", &data_path, "export", &pdf, "--format", "pdf", "--force",
        ])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("read pdf export");
    assert!(bytes.starts_with(b"%PDF"), "pdf magic bytes");

    let xlsx = temp_out("exp_bin", "xlsx");
    rsh()
        .args([
            "--file", &data_path, "export", &xlsx, "--format", "xlsx", "--force",
        ])
        .assert()
        .success();
    let meta = fs::metadata(&xlsx).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_day_filter_and_contacts() {
    let data_path = setup_data_file("exp_filter");
    let out = temp_out("exp_filter", "json");
    init_data_with_day(&data_path);

    rsh()
        .args(["--file", &data_path, "day", "add", "Brunch"])
        .assert()
        .success();
    rsh()
        .args([
            "--file",
            &data_path,
            "vendor",
            "add",
            "Blumen Krause",
            "Florist",
        ])
        .assert()
        .success();
    // Requested but not booked: must not reach the contact table.
    rsh()
        .args([
            "--file",
            &data_path,
            "vendor",
            "add",
            "DJ Echo",
            "Musik",
            "--status",
            "requested",
        ])
        .assert()
        .success();

    rsh()
        .args([
            "--file", &data_path, "export", &out, "--format", "json", "--days", "2", "--contacts",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json export");
    assert!(content.contains("Brunch"));
    assert!(!content.contains("Hochzeitstag"));
    assert!(content.contains("Blumen Krause"));
    assert!(!content.contains("DJ Echo"));
}

#[test]
fn test_export_requires_absolute_path() {
    let data_path = setup_data_file("exp_rel");
    init_data_with_day(&data_path);

    rsh()
        .args([
            "--file",
            &data_path,
            "export",
            "relative.json",
            "--format",
            "json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_backup_copies_the_data_file() {
    let data_path = setup_data_file("exp_backup");
    let dest = temp_out("exp_backup", "json");
    init_data_with_day(&data_path);

    rsh()
        .args(["--file", &data_path, "backup", &dest, "--force"])
        .assert()
        .success();

    let original = fs::read_to_string(&data_path).expect("read data file");
    let copy = fs::read_to_string(&dest).expect("read backup");
    assert_eq!(original, copy);
}
