#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch dir so no real config is read.
pub fn rpd() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rposdesk_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rposdesk");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rposdesk.sqlite", name));
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

/// Initialize the DB through the CLI
pub fn init_db(db_path: &str) {
    rpd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small catalogue: #1 Espresso 1.50, #2 Croissant 2.25
pub fn init_db_with_products(db_path: &str) {
    init_db(db_path);

    for (name, price) in [("Espresso", "1.50"), ("Croissant", "2.25")] {
        rpd()
            .args([
                "--db", db_path, "product", "add", "--name", name, "--price", price,
            ])
            .assert()
            .success();
    }
}
