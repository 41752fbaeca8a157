use super::model::SaleLineExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write sale lines as CSV, with a header row.
pub fn write_csv(path: &Path, rows: &[SaleLineExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    if rows.is_empty() {
        wtr.write_record([
            "sale_id",
            "created_at",
            "product_id",
            "name",
            "unit_price",
            "quantity",
            "subtotal",
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write sale lines as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[SaleLineExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
