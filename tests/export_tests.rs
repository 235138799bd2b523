use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_with_students, mess, setup_data_dir};

fn mark_days(dir: &str) {
    for (id, meal, ts) in [
        ("1", "b", "2024-01-31T08:00:00"),
        ("2", "l", "2024-02-01T12:30:00"),
        ("1", "l", "2024-02-15T12:00:00"),
    ] {
        mess()
            .args(["--data-dir", dir, "mark", id, "--meal", meal, "--at", ts])
            .assert()
            .success();
    }
}

#[test]
fn test_export_csv_range() {
    let dir = setup_data_dir("export_csv_range");
    init_with_students(&dir);
    mark_days(&dir);

    let out = Path::new(&dir).join("feb.csv");
    let out = out.to_string_lossy().to_string();

    mess()
        .args([
            "--data-dir",
            &dir,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2024-02",
        ])
        .assert()
        .success()
        .stdout(contains("2 record(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "ID,Name,Meal,Date,Time");
    assert_eq!(lines[1], "2,Bob,Lunch,2024-02-01,12:30:00");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_json_all() {
    let dir = setup_data_dir("export_json_all");
    init_with_students(&dir);
    mark_days(&dir);

    let out = Path::new(&dir).join("all.json");
    let out = out.to_string_lossy().to_string();

    mess()
        .args([
            "--data-dir",
            &dir,
            "export",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    assert!(content.contains("\"Meal\": \"Breakfast\""));
    assert!(content.contains("2024-01-31"));
}

#[test]
fn test_export_requires_absolute_path() {
    let dir = setup_data_dir("export_relative");
    init_with_students(&dir);
    mark_days(&dir);

    mess()
        .args(["--data-dir", &dir, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_copies_data_files() {
    let dir = setup_data_dir("backup_plain");
    init_with_students(&dir);
    mark_days(&dir);

    let dest = setup_data_dir("backup_plain_dest");

    mess()
        .args(["--data-dir", &dir, "backup", "--dir", &dest])
        .assert()
        .success();

    let copied = fs::read_to_string(Path::new(&dest).join("students.csv")).unwrap();
    assert_eq!(copied, "ID,Name\n1,Alice\n2,Bob\n");
    assert!(Path::new(&dest).join("mess_attendance.csv").exists());
}

#[test]
fn test_backup_compressed_creates_single_archive() {
    let dir = setup_data_dir("backup_compress");
    init_with_students(&dir);

    let dest = setup_data_dir("backup_compress_dest");

    mess()
        .args(["--data-dir", &dir, "backup", "--dir", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("messlog_backup_"));

    let entries: Vec<_> = fs::read_dir(&dest).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
