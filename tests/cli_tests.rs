use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_data_dir, init_with_students, mess, setup_data_dir};

#[test]
fn test_init_creates_headered_files() {
    let dir = setup_data_dir("cli_init");

    mess()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("created"));

    let students = Path::new(&dir).join("students.csv");
    let attendance = Path::new(&dir).join("mess_attendance.csv");
    assert_eq!(fs::read_to_string(students).unwrap(), "ID,Name\n");
    assert_eq!(
        fs::read_to_string(attendance).unwrap(),
        "ID,Name,Meal,Date,Time\n"
    );

    // A second init keeps the files.
    mess()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("existing"));
}

#[test]
fn test_add_assigns_sequential_ids() {
    let dir = setup_data_dir("cli_add");
    init_data_dir(&dir);

    mess()
        .args(["--data-dir", &dir, "add", "Alice"])
        .assert()
        .success()
        .stdout(contains("added with ID: 1"));

    mess()
        .args(["--data-dir", &dir, "add", "  Bob  "])
        .assert()
        .success()
        .stdout(contains("'Bob' added with ID: 2"));
}

#[test]
fn test_add_rejects_blank_and_duplicate_names() {
    let dir = setup_data_dir("cli_add_rejects");
    init_with_students(&dir);

    mess()
        .args(["--data-dir", &dir, "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Name cannot be empty"));

    mess()
        .args(["--data-dir", &dir, "add", "Alice"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    mess()
        .args(["--data-dir", &dir, "list", "--students"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Bob")));
}

#[test]
fn test_search_reports_counters() {
    let dir = setup_data_dir("cli_search");
    init_with_students(&dir);

    mess()
        .args([
            "--data-dir",
            &dir,
            "mark",
            "2",
            "--meal",
            "lunch",
            "--at",
            "2024-01-01T12:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("Attendance marked for Bob (Lunch)"));

    mess()
        .args(["--data-dir", &dir, "search", "2"])
        .assert()
        .success()
        .stdout(contains("Student Found: Bob"))
        .stdout(contains("Total Attendances: 1 | Breakfast: 0 | Lunch: 1"));
}

#[test]
fn test_search_rejects_bad_ids() {
    let dir = setup_data_dir("cli_search_bad");
    init_with_students(&dir);

    mess()
        .args(["--data-dir", &dir, "search", "abc"])
        .assert()
        .failure()
        .stderr(contains("ID must be a number"));

    mess()
        .args(["--data-dir", &dir, "search", "99"])
        .assert()
        .failure()
        .stderr(contains("No student found with ID 99"));
}

#[test]
fn test_mark_rejects_unknown_meal() {
    let dir = setup_data_dir("cli_mark_meal");
    init_with_students(&dir);

    mess()
        .args(["--data-dir", &dir, "mark", "1", "--meal", "dinner"])
        .assert()
        .failure()
        .stderr(contains("Invalid meal"));

    let attendance = Path::new(&dir).join("mess_attendance.csv");
    assert_eq!(
        fs::read_to_string(attendance).unwrap(),
        "ID,Name,Meal,Date,Time\n"
    );
}

#[test]
fn test_today_summary_and_cascade_delete() {
    let dir = setup_data_dir("cli_today");
    init_with_students(&dir);

    for (meal, ts) in [
        ("breakfast", "2024-01-01T08:00:00"),
        ("lunch", "2024-01-01T12:00:00"),
    ] {
        mess()
            .args(["--data-dir", &dir, "mark", "1", "--meal", meal, "--at", ts])
            .assert()
            .success();
    }

    mess()
        .args(["--data-dir", &dir, "today", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not());

    mess()
        .args(["--data-dir", &dir, "today", "--date", "2024-01-01", "--json"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"Alice\""))
        .stdout(contains("\"total\": 2"))
        .stdout(contains("\"breakfast\": 1"))
        .stdout(contains("\"lunch\": 1"));

    mess()
        .args(["--data-dir", &dir, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("'Alice' and all related attendance records (2)"));

    mess()
        .args(["--data-dir", &dir, "today", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No attendance records for 2024-01-01"));

    mess()
        .args(["--data-dir", &dir, "search", "1"])
        .assert()
        .failure();
}

#[test]
fn test_delete_unknown_id_fails() {
    let dir = setup_data_dir("cli_del_unknown");
    init_with_students(&dir);

    mess()
        .args(["--data-dir", &dir, "del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No student found with ID 5"));
}

#[test]
fn test_corrupt_roster_is_reset_with_warning() {
    let dir = setup_data_dir("cli_reset");
    init_with_students(&dir);

    let students = Path::new(&dir).join("students.csv");
    fs::write(&students, "Name,ID\nAlice,1\n").unwrap();

    mess()
        .args(["--data-dir", &dir, "add", "Carol"])
        .assert()
        .success()
        .stderr(contains("Student file was reset"))
        .stdout(contains("added with ID: 1"));

    mess()
        .args(["--data-dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("reset"))
        .stdout(contains("Student 'Carol' added"));
}

#[test]
fn test_json_summary_stays_parsable_after_reset() {
    let dir = setup_data_dir("cli_json_after_reset");
    init_with_students(&dir);

    let attendance = Path::new(&dir).join("mess_attendance.csv");
    fs::write(&attendance, "ID;Name\n").unwrap();

    let output = mess()
        .args(["--data-dir", &dir, "today", "--date", "2024-01-01", "--json"])
        .output()
        .expect("run today --json");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Attendance file was reset"));
}

#[test]
fn test_corrupt_audit_log_is_reset_with_warning() {
    let dir = setup_data_dir("cli_log_reset");
    init_with_students(&dir);

    let log = Path::new(&dir).join("messlog_log.csv");
    fs::write(&log, "when,what\nyesterday,something\n").unwrap();

    mess()
        .args(["--data-dir", &dir, "add", "Carol"])
        .assert()
        .success()
        .stderr(contains("Audit log file was reset"));

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.starts_with("date,operation,target,message\n"));
    assert!(content.contains("Student 'Carol' added"));
    assert!(!content.contains("yesterday"));
}
