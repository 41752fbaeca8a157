//! Engines (calculator, shift timer, cart), their time/scheduling seams and
//! the per-command logic built on top of them.

pub mod calculator;
pub mod cart;
pub mod clock;
pub mod scheduler;
pub mod shift;

pub mod backup;
pub mod calc;
pub mod clocking;
pub mod config;
pub mod export;
pub mod log;
pub mod product;
pub mod sale;
