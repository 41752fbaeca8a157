use crate::errors::{AppError, AppResult};
use crate::models::line_item::LineItem;
use crate::models::product::BusinessProduct;
use crate::models::sale::{Sale, SaleLine};
use crate::models::shift::ShiftRecord;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Products
// ---------------------------

pub fn map_product(row: &Row) -> Result<BusinessProduct> {
    Ok(BusinessProduct {
        id: row.get("id")?,
        name: row.get("name")?,
        selling_price: row.get("selling_price")?,
    })
}

/// Insert a product and return its id. Names are unique.
pub fn insert_product(conn: &Connection, name: &str, selling_price: f64) -> AppResult<i64> {
    let exists: Option<i64> = conn
        .query_row("SELECT id FROM products WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;

    if exists.is_some() {
        return Err(AppError::DuplicateProduct(name.to_string()));
    }

    conn.execute(
        "INSERT INTO products (name, selling_price, created_at) VALUES (?1, ?2, ?3)",
        params![name, selling_price, Local::now().to_rfc3339()],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn load_products(conn: &Connection) -> AppResult<Vec<BusinessProduct>> {
    let mut stmt =
        conn.prepare("SELECT id, name, selling_price FROM products ORDER BY id ASC")?;
    let products = stmt
        .query_map([], map_product)?
        .collect::<Result<Vec<_>>>()?;
    Ok(products)
}

pub fn load_product(conn: &Connection, id: i64) -> AppResult<Option<BusinessProduct>> {
    let product = conn
        .query_row(
            "SELECT id, name, selling_price FROM products WHERE id = ?1",
            [id],
            map_product,
        )
        .optional()?;
    Ok(product)
}

/// Returns `true` when a row was deleted.
pub fn delete_product(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM products WHERE id = ?1", [id])?;
    Ok(n > 0)
}

// ---------------------------
// Sales
// ---------------------------

/// Persist a checked-out cart. Call inside a transaction.
pub fn insert_sale(
    conn: &Connection,
    items: &[LineItem],
    total_amount: f64,
    total_items: u32,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sales (created_at, total_amount, total_items) VALUES (?1, ?2, ?3)",
        params![Local::now().to_rfc3339(), total_amount, total_items],
    )?;
    let sale_id = conn.last_insert_rowid();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO sale_items (sale_id, product_id, name, unit_price, quantity)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    for item in items {
        stmt.execute(params![
            sale_id,
            item.product.id,
            item.product.name,
            item.product.selling_price,
            item.quantity
        ])?;
    }

    Ok(sale_id)
}

fn load_sale_lines(conn: &Connection, sale_id: i64) -> AppResult<Vec<SaleLine>> {
    let mut stmt = conn.prepare_cached(
        "SELECT product_id, name, unit_price, quantity
         FROM sale_items WHERE sale_id = ?1 ORDER BY id ASC",
    )?;

    let lines = stmt
        .query_map([sale_id], |row| {
            Ok(SaleLine {
                product_id: row.get(0)?,
                name: row.get(1)?,
                unit_price: row.get(2)?,
                quantity: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(lines)
}

/// All sales with their lines, oldest first.
pub fn load_sales(conn: &Connection) -> AppResult<Vec<Sale>> {
    let headers: Vec<(i64, String, f64, u32)> = {
        let mut stmt = conn.prepare(
            "SELECT id, created_at, total_amount, total_items FROM sales ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<_>>>()?;
        rows
    };

    headers
        .into_iter()
        .map(|(id, created_at, total_amount, total_items)| {
            Ok(Sale {
                id,
                created_at,
                total_amount,
                total_items,
                lines: load_sale_lines(conn, id)?,
            })
        })
        .collect()
}

// ---------------------------
// Shifts
// ---------------------------

pub fn insert_shift(
    conn: &Connection,
    clock_in: &str,
    clock_out: &str,
    worked_seconds: i64,
    break_seconds: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO shifts (clock_in, clock_out, worked_seconds, break_seconds)
         VALUES (?1, ?2, ?3, ?4)",
        params![clock_in, clock_out, worked_seconds, break_seconds],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_shifts(conn: &Connection) -> AppResult<Vec<ShiftRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, clock_in, clock_out, worked_seconds, break_seconds
         FROM shifts ORDER BY id ASC",
    )?;

    let shifts = stmt
        .query_map([], |row| {
            Ok(ShiftRecord {
                id: row.get(0)?,
                clock_in: row.get(1)?,
                clock_out: row.get(2)?,
                worked_seconds: row.get(3)?,
                break_seconds: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(shifts)
}
