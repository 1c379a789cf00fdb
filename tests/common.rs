#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsh() -> Command {
    cargo_bin_cmd!("runsheet")
}

/// Create a unique test data file path inside the system temp dir and
/// remove any leftover from a previous run.
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_runsheet.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path and ensure it's removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data file and add one day with a couple of events.
pub fn init_data_with_day(data_path: &str) {
    rsh()
        .args(["--file", data_path, "--test", "init"])
        .assert()
        .success();

    rsh()
        .args([
            "--file",
            data_path,
            "day",
            "add",
            "Hochzeitstag",
            "--date",
            "2026-07-12",
        ])
        .assert()
        .success();

    rsh()
        .args([
            "--file",
            data_path,
            "event",
            "add",
            "1",
            "Trauung",
            "14:00",
            "--end",
            "14:45",
            "--location",
            "Kirche",
        ])
        .assert()
        .success();

    rsh()
        .args([
            "--file",
            data_path,
            "event",
            "add",
            "1",
            "Sektempfang",
            "15:00",
            "--end",
            "16:30",
        ])
        .assert()
        .success();
}
