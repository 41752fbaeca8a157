use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists in the main schema.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

const LOG_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
"#;

const KV_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS kv (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
"#;

const PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        name          TEXT NOT NULL UNIQUE,
        selling_price REAL NOT NULL CHECK(selling_price >= 0),
        created_at    TEXT NOT NULL
    );
"#;

const SALES_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS sales (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at   TEXT NOT NULL,
        total_amount REAL NOT NULL,
        total_items  INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS sale_items (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        sale_id    INTEGER NOT NULL REFERENCES sales(id) ON DELETE CASCADE,
        product_id INTEGER NOT NULL,
        name       TEXT NOT NULL,
        unit_price REAL NOT NULL,
        quantity   INTEGER NOT NULL CHECK(quantity >= 1)
    );

    CREATE INDEX IF NOT EXISTS idx_sale_items_sale ON sale_items(sale_id);
"#;

const SHIFTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS shifts (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        clock_in       TEXT NOT NULL,
        clock_out      TEXT NOT NULL,
        worked_seconds INTEGER NOT NULL,
        break_seconds  INTEGER NOT NULL DEFAULT 0
    );
"#;

/// Databases created before break tracking have no `break_seconds` column.
fn migrate_add_break_seconds(conn: &Connection, report: bool) -> Result<()> {
    if has_column(conn, "shifts", "break_seconds")? {
        return Ok(());
    }

    conn.execute_batch(
        "ALTER TABLE shifts ADD COLUMN break_seconds INTEGER NOT NULL DEFAULT 0;",
    )?;

    if report {
        success("Migration applied → added 'break_seconds' to shifts table");
    }
    Ok(())
}

fn apply(conn: &Connection, report: bool) -> Result<()> {
    let steps: [(&str, &str); 5] = [
        ("log", LOG_TABLE),
        ("kv", KV_TABLE),
        ("products", PRODUCTS_TABLE),
        ("sales", SALES_TABLES),
        ("shifts", SHIFTS_TABLE),
    ];

    for (name, ddl) in steps {
        let existed = table_exists(conn, name)?;
        conn.execute_batch(ddl)?;
        if !existed && report {
            success(format!("Created {} table.", name));
        }
    }

    migrate_add_break_seconds(conn, report)?;

    Ok(())
}

/// Public entry point: run all pending migrations, reporting what changed.
///
/// Invoked by `init` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    apply(conn, true)?;
    Ok(())
}

/// Same as [`run_pending_migrations`] without console output; every command
/// goes through this when opening the database.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    apply(conn, false)?;
    Ok(())
}
