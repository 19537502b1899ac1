mod common;
use common::{AIRCON, PUMP, WIRING, init_db_with_data, open_db_store, rml, setup_test_db, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rml("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let name = "cli_add_list";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains(PUMP))
        .stdout(contains("Somchai"))
        .stdout(contains("150.50"))
        .stdout(contains("2025-09-01 10:15"))
        .stdout(contains("Total: 200.50 THB"));

    let store = open_db_store(&db_path);
    assert_eq!(store.all().len(), 2);
    assert_eq!(store.all()[0].item, PUMP);
    assert_eq!(store.all()[1].technician, "Niran");
}

#[test]
fn test_add_rejects_invalid_input() {
    let name = "cli_add_invalid";
    let db_path = setup_test_db(name);

    rml(name)
        .args(["--db", &db_path, "add", PUMP, "-5", "Somchai"])
        .assert()
        .failure()
        .stderr(contains("price"));

    rml(name)
        .args(["--db", &db_path, "add", PUMP, "abc", "Somchai"])
        .assert()
        .failure()
        .stderr(contains("Invalid price"));

    rml(name)
        .args(["--db", &db_path, "add", "Boiler", "10", "Somchai"])
        .assert()
        .failure()
        .stderr(contains("unknown category"));

    rml(name)
        .args(["--db", &db_path, "add", PUMP, "10", " "])
        .assert()
        .failure()
        .stderr(contains("technician"));

    assert!(open_db_store(&db_path).all().is_empty());
}

#[test]
fn test_list_filters() {
    let name = "cli_list_filters";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "list", "--category", WIRING])
        .assert()
        .success()
        .stdout(contains("Niran"))
        .stdout(contains("Somchai").not())
        .stdout(contains("Total: 50.00 THB"));

    rml(name)
        .args(["--db", &db_path, "list", "--search", "SEAL"])
        .assert()
        .success()
        .stdout(contains("Somchai"))
        .stdout(contains("Niran").not());

    rml(name)
        .args(["--db", &db_path, "list", "--category", AIRCON])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_summary_command() {
    let name = "cli_summary";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "summary", "--category", "all"])
        .assert()
        .success()
        .stdout(contains(PUMP))
        .stdout(contains(WIRING))
        .stdout(contains("Total: 200.50 THB (2 record(s))"));
}

#[test]
fn test_edit_keeps_identity() {
    let name = "cli_edit";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    let before = open_db_store(&db_path).all()[0].clone();
    let id = before.id.to_string();

    rml(name)
        .args([
            "--db", &db_path, "edit", &id, "--price", "175", "--notes", "seal + bearing",
            "--clear-service", "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    let after = open_db_store(&db_path).all()[0].clone();
    assert_eq!(after.id, before.id);
    assert_eq!(after.recorded_at, before.recorded_at);
    assert_eq!(after.item, before.item);
    assert_eq!(after.price, 175.0);
    assert_eq!(after.notes, "seal + bearing");
    assert!(after.service_at.is_none());
}

#[test]
fn test_edit_unknown_id_fails() {
    let name = "cli_edit_unknown";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "edit", "42", "--price", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Record not found: 42"));

    assert_eq!(open_db_store(&db_path).all().len(), 2);
}

#[test]
fn test_edit_declined_changes_nothing() {
    let name = "cli_edit_declined";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    let id = open_db_store(&db_path).all()[0].id.to_string();

    rml(name)
        .args(["--db", &db_path, "edit", &id, "--price", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(open_db_store(&db_path).all()[0].price, 150.5);
}

#[test]
fn test_del_with_confirmation() {
    let name = "cli_del";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    let id = open_db_store(&db_path).all()[0].id.to_string();

    rml(name)
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(open_db_store(&db_path).all().len(), 2);

    rml(name)
        .args(["--db", &db_path, "del", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));
    assert_eq!(open_db_store(&db_path).all().len(), 1);

    // second delete is a no-op, not an error
    rml(name)
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));
    assert_eq!(open_db_store(&db_path).all().len(), 1);
}

#[test]
fn test_export_csv_filtered() {
    let name = "cli_export_csv";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);
    let out = temp_out(name, "csv");

    rml(name)
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--category", WIRING,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("\"Recorded At\",\"Service At\",\"Item\",\"Price\""));
    assert!(content.contains(",50.00,\"Niran\",\"He said \"\"fix it\"\", please\""));
    assert!(!content.contains("Somchai"));
}

#[test]
fn test_export_json_all() {
    let name = "cli_export_json";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);
    let out = temp_out(name, "json");

    rml(name)
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Somchai"));
    assert!(content.contains("Niran"));
    assert!(content.contains("\"serviceAt\": \"2025-09-01T10:15:00\""));
}

#[test]
fn test_export_nothing_to_export() {
    let name = "cli_export_empty";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);
    let out = temp_out(name, "csv");

    rml(name)
        .args(["--db", &db_path, "export", "--file", &out, "--search", "nobody"])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let name = "cli_export_relative";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_records_operations() {
    let name = "cli_log";
    let db_path = setup_test_db(name);
    init_db_with_data(name, &db_path);

    rml(name)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Somchai"));
}

#[test]
fn test_categories_command() {
    rml("cli_categories")
        .args(["categories"])
        .assert()
        .success()
        .stdout(contains(PUMP))
        .stdout(contains(AIRCON));
}
