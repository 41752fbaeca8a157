use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::load_sales;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, SaleLineExport, write_csv, write_json};
use crate::ui::messages::{success, warning};
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every recorded sale line. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let sales = load_sales(&pool.conn)?;
        let rows = SaleLineExport::from_sales(&sales);

        if rows.is_empty() {
            warning("No sales recorded: exporting an empty file.");
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} row(s) as {}", rows.len(), format.as_str()),
        );
        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        Ok(rows.len())
    }
}
