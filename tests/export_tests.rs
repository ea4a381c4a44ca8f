use predicates::str::contains;
use std::fs;

mod common;
use common::{init_store_with_data, rolo, setup_test_store, temp_out};

#[test]
fn test_export_csv_writes_every_contact() {
    let store_path = setup_test_store("export_csv");
    init_store_with_data(&store_path);

    let out = temp_out("export_csv", "csv");

    rolo()
        .args(["--store", &store_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("first_name"));
    assert!(content.contains("Amy"));
    assert!(content.contains("bob"));
    assert!(content.contains("Zoe"));
    assert!(content.contains("Bistro Verde"));
}

#[test]
fn test_export_json_writes_flat_rows() {
    let store_path = setup_test_store("export_json");
    init_store_with_data(&store_path);

    let out = temp_out("export_json", "json");

    rolo()
        .args(["--store", &store_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);

    // Sorted by first name, case-aware.
    assert_eq!(rows[0]["first_name"], "Amy");
    assert_eq!(rows[1]["first_name"], "bob");
    assert_eq!(rows[2]["first_name"], "Zoe");
    assert_eq!(rows[0]["location"], "Bistro Verde");
}

#[test]
fn test_export_shift_column_uses_the_compact_encoding() {
    let store_path = setup_test_store("export_shifts");

    rolo()
        .args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    rolo()
        .args([
            "--store",
            &store_path,
            "add",
            "Nina",
            "--shift",
            "mon:am",
            "--shift",
            "mon:pm",
            "--shift",
            "tue:eve",
        ])
        .assert()
        .success();

    let out = temp_out("export_shifts", "csv");

    rolo()
        .args(["--store", &store_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("mon:AM+PM;tue:Eve"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let store_path = setup_test_store("export_relative");
    init_store_with_data(&store_path);

    rolo()
        .args(["--store", &store_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let store_path = setup_test_store("export_force");
    init_store_with_data(&store_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale content").expect("seed existing file");

    rolo()
        .args([
            "--store",
            &store_path,
            "export",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(!content.contains("stale content"));
    assert!(content.contains("Amy"));
}

#[test]
fn test_export_empty_collection_warns_and_writes_nothing() {
    let store_path = setup_test_store("export_empty");

    rolo()
        .args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    rolo()
        .args(["--store", &store_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No contacts to export."));

    assert!(!std::path::Path::new(&out).exists());
}
