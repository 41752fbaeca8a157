//! Unified application error type.
//! Command handlers, db helpers and config code return AppError so the
//! CLI has one place to report failures. The calculator, shift timer and
//! cart engines never produce errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid calculator key: {0}")]
    InvalidKey(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid break type: {0} (use 'lunch' or 'short')")]
    InvalidBreakType(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Product already exists: {0}")]
    DuplicateProduct(String),

    #[error("Cart is empty, nothing to check out")]
    EmptyCart,

    #[error("Not clocked in")]
    NotClockedIn,

    #[error("Already clocked in since {0}")]
    AlreadyClockedIn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
