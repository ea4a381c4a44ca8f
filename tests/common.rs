#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rolo() -> Command {
    cargo_bin_cmd!("rolo")
}

/// Create a unique test storage path inside the system temp dir and remove
/// any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rolo.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize storage and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    // init storage (creates tables)
    rolo()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    rolo()
        .args([
            "--store",
            store_path,
            "add",
            "Amy",
            "--restaurant",
            "Bistro Verde",
            "--phone",
            "555-0123",
        ])
        .assert()
        .success();

    rolo()
        .args([
            "--store",
            store_path,
            "add",
            "bob",
            "--restaurant",
            "Cafe Luna",
        ])
        .assert()
        .success();

    rolo()
        .args(["--store", store_path, "add", "Zoe"])
        .assert()
        .success();
}

/// Seed the legacy slot directly through the library storage API,
/// the way the pre-v2 shape would have left it on disk.
pub fn seed_legacy_slot(store_path: &str, json: &str) {
    let pool = rolo::store::pool::StorePool::new(store_path).expect("open store");
    rolo::store::initialize::init_store(&pool.conn).expect("init store");
    rolo::store::slots::write_slot(&pool.conn, rolo::store::slots::LEGACY_SLOT, json)
        .expect("seed legacy slot");
}
