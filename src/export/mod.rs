pub(crate) mod fs_utils;
mod model;
mod writers;

pub use model::SaleLineExport;
pub use writers::{write_csv, write_json};

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
