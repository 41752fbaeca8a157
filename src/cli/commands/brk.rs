use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::clocking::ClockLogic;
use crate::core::shift::ShiftTimer;
use crate::db::kv::SqliteStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::break_type::BreakType;
use std::sync::Arc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = Arc::new(SqliteStore::open(&cfg.database)?);
        let mut timer = ShiftTimer::new(store, SystemClock);

        match action {
            BreakAction::Start { kind } => {
                let kind = match kind {
                    Some(k) => {
                        BreakType::bt_from_str(k).ok_or_else(|| AppError::InvalidBreakType(k.clone()))?
                    }
                    None => cfg.default_break,
                };
                ClockLogic::start_break(&pool.conn, &mut timer, kind)?;
            }
            BreakAction::End => {
                ClockLogic::end_break(&pool.conn, &mut timer)?;
            }
        }
    }
    Ok(())
}
