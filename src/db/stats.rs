use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::short_timestamp;
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Products", "products"),
        ("Sales", "sales"),
        ("Shifts", "shifts"),
        ("Log rows", "log"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) SALES RANGE + TAKINGS
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM sales ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM sales ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |v: &Option<String>| {
        v.as_deref()
            .map(short_timestamp)
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Sales range:{}", CYAN, RESET);
    println!("    from: {}", fmt(&first));
    println!("    to:   {}", fmt(&last));

    let takings: f64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(total_amount), 0) FROM sales",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Takings:{} {:.2}", CYAN, RESET, takings);

    println!();
    Ok(())
}
