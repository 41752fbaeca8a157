mod common;

use common::{init_db, init_db_with_products, rpd, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_db() {
    let db_path = setup_test_db("init_creates_db");

    rpd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_calc_chained_addition() {
    rpd()
        .args(["calc", "5", "+", "3", "+", "2", "="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_calc_multi_digit_tokens_and_percent() {
    rpd()
        .args(["calc", "12.5", "x", "4", "="])
        .assert()
        .success()
        .stdout("50\n");

    rpd()
        .args(["calc", "50", "%"])
        .assert()
        .success()
        .stdout("0.5\n");
}

#[test]
fn test_calc_division_by_zero_shows_zero() {
    rpd()
        .args(["calc", "1", "/", "0", "="])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_calc_trace_prints_every_key() {
    rpd()
        .args(["calc", "--trace", "7", "+/-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-7"));
}

#[test]
fn test_calc_rejects_unknown_key() {
    rpd()
        .args(["calc", "5", "sqrt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sqrt"));
}

#[test]
fn test_product_add_and_list() {
    let db_path = setup_test_db("product_add_list");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Espresso"))
        .stdout(predicate::str::contains("Croissant"))
        .stdout(predicate::str::contains("2.25"));
}

#[test]
fn test_product_rejects_bad_price_and_duplicates() {
    let db_path = setup_test_db("product_bad_price");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "product", "add", "--name", "Tea", "--price", "-1"])
        .assert()
        .failure();

    rpd()
        .args([
            "--db", &db_path, "product", "add", "--name", "Espresso", "--price", "1.80",
        ])
        .assert()
        .failure();
}

#[test]
fn test_product_del() {
    let db_path = setup_test_db("product_del");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "product", "del", "--id", "1"])
        .assert()
        .success();

    rpd()
        .args(["--db", &db_path, "product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Espresso").not());

    rpd()
        .args(["--db", &db_path, "product", "del", "--id", "1"])
        .assert()
        .failure();
}

#[test]
fn test_sale_records_total() {
    let db_path = setup_test_db("sale_total");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "sale", "1", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Increased quantity of Espresso to 2"))
        .stdout(predicate::str::contains("5.25"))
        .stdout(predicate::str::contains("Sale #1 recorded"));

    rpd()
        .args(["--db", &db_path, "sales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Takings: 5.25"));
}

#[test]
fn test_sale_edits_and_dry_run() {
    let db_path = setup_test_db("sale_dry_run");
    init_db_with_products(&db_path);

    rpd()
        .args([
            "--db", &db_path, "sale", "1", "1", "1", "2", "--dec", "1", "--remove", "2",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Items: 2"))
        .stdout(predicate::str::contains("3.00"))
        .stdout(predicate::str::contains("Dry run"));

    rpd()
        .args(["--db", &db_path, "sales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales recorded."));
}

#[test]
fn test_sale_unknown_product_fails() {
    let db_path = setup_test_db("sale_unknown");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "sale", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}

#[test]
fn test_sale_empty_cart_fails() {
    let db_path = setup_test_db("sale_empty");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "sale", "1", "--remove", "1"])
        .assert()
        .failure();
}

#[test]
fn test_clock_and_break_flow() {
    let db_path = setup_test_db("clock_flow");
    init_db(&db_path);

    rpd()
        .args(["--db", &db_path, "clock", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not clocked in."));

    // no shift yet: the break is refused without an error
    rpd()
        .args(["--db", &db_path, "break", "start"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Not clocked in"));

    rpd()
        .args(["--db", &db_path, "clock", "in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked in at"));

    rpd()
        .args(["--db", &db_path, "clock", "in"])
        .assert()
        .failure();

    rpd()
        .args(["--db", &db_path, "break", "start", "--type", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));

    rpd()
        .args(["--db", &db_path, "clock", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On shift"))
        .stdout(predicate::str::contains("Lunch"));

    rpd()
        .args(["--db", &db_path, "break", "end"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ended after"));

    rpd()
        .args(["--db", &db_path, "break", "end"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No break is running."));

    rpd()
        .args(["--db", &db_path, "clock", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked out at"));

    rpd()
        .args(["--db", &db_path, "clock", "out"])
        .assert()
        .failure();

    rpd()
        .args(["--db", &db_path, "shifts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKED"));
}

#[test]
fn test_break_rejects_unknown_type() {
    let db_path = setup_test_db("break_bad_type");
    init_db(&db_path);

    rpd()
        .args(["--db", &db_path, "clock", "in"])
        .assert()
        .success();

    rpd()
        .args(["--db", &db_path, "break", "start", "--type", "nap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nap"));
}

#[test]
fn test_watch_prints_ticks() {
    let db_path = setup_test_db("watch_ticks");
    init_db(&db_path);

    rpd()
        .args(["--db", &db_path, "watch", "--ticks", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not clocked in."));

    rpd()
        .args(["--db", &db_path, "clock", "in"])
        .assert()
        .success();

    let out = rpd()
        .args(["--db", &db_path, "watch", "--ticks", "2", "--interval-ms", "20"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.lines().filter(|l| l.starts_with("shift ")).count(), 2);
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_sales");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "sale", "1", "2", "2"])
        .assert()
        .success();

    let csv_path = temp_out("export_sales", "csv");
    rpd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_path])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("csv written");
    assert!(csv.lines().next().unwrap_or_default().contains("sale_id"));
    assert!(csv.contains("Croissant"));
    assert_eq!(csv.lines().count(), 3);

    let json_path = temp_out("export_sales", "json");
    rpd()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_path])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json written"))
            .expect("valid json");
    assert_eq!(json.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let db_path = setup_test_db("export_no_force");
    init_db(&db_path);

    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rpd()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rpd()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_products(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rpd()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success();
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_zip", "bak");
    let zip_path = Path::new(&zipped).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rpd()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".zip"));
    assert!(zip_path.exists());
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("log_info");
    init_db_with_products(&db_path);

    rpd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("product_add"));

    rpd()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Products"));

    rpd()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn test_quiet_mutes_success_messages() {
    let db_path = setup_test_db("quiet");
    init_db(&db_path);

    rpd()
        .args(["--db", &db_path, "-q", "product", "add", "--name", "Tea", "--price", "1,20"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    rpd()
        .args(["--db", &db_path, "product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.20"));
}
