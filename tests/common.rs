#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rmaintlog::core::RecordStore;
use rmaintlog::db::kv::{MemoryKv, SqliteKv};
use rmaintlog::models::category::CategorySet;
use rmaintlog::models::record::RecordFields;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PUMP: &str = "ปั๊มน้ำ";
pub const WIRING: &str = "ระบบไฟ";
pub const AIRCON: &str = "แอร์Daikin";

/// The binary, with HOME pointed at a scratch directory so the user's own
/// config file never leaks into a test.
pub fn rml(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rmaintlog_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rmaintlog");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmaintlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn memory_store() -> RecordStore<MemoryKv> {
    RecordStore::load(MemoryKv::new(), CategorySet::new(["Pump", "Wiring", "AC unit"]))
}

pub fn fields(item: &str, price: f64, technician: &str, notes: &str) -> RecordFields {
    RecordFields::new(item, price, technician, notes)
}

/// Open the CLI database through the library to inspect what was stored.
pub fn open_db_store(db_path: &str) -> RecordStore<SqliteKv> {
    let kv = SqliteKv::open(db_path).expect("open db");
    RecordStore::load(kv, CategorySet::open())
}

pub fn service_day(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(name: &str, db_path: &str) {
    rml(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rml(name)
        .args([
            "--db",
            db_path,
            "add",
            PUMP,
            "150.5",
            "Somchai",
            "--notes",
            "replaced seal",
            "--service-date",
            "2025-09-01",
            "--service-time",
            "10:15",
        ])
        .assert()
        .success();

    rml(name)
        .args([
            "--db",
            db_path,
            "add",
            WIRING,
            "50",
            "Niran",
            "--notes",
            "He said \"fix it\", please",
        ])
        .assert()
        .success();
}
