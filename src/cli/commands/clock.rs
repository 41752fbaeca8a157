use crate::cli::parser::{ClockAction, Commands};
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::clocking::ClockLogic;
use crate::core::shift::ShiftTimer;
use crate::db::kv::SqliteStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::sync::Arc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Clock { action } => {
            let pool = DbPool::new(&cfg.database)?;
            let store = Arc::new(SqliteStore::open(&cfg.database)?);

            match action {
                ClockAction::In => {
                    ClockLogic::clock_in(&pool.conn, store.as_ref(), &SystemClock)?;
                }
                ClockAction::Out => {
                    let mut timer = ShiftTimer::new(store, SystemClock);
                    ClockLogic::clock_out(&pool.conn, &mut timer)?;
                }
                ClockAction::Status => {
                    let timer = ShiftTimer::new(store, SystemClock);
                    ClockLogic::status(&timer);
                }
            }
        }
        Commands::Shifts => {
            let pool = DbPool::new(&cfg.database)?;
            ClockLogic::list_shifts(&pool.conn, cfg)?;
        }
        _ => {}
    }
    Ok(())
}
