pub mod backup;
pub mod brk;
pub mod calc;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod product;
pub mod sale;
pub mod watch;
