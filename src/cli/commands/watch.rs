use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::clocking::ClockLogic;
use crate::core::scheduler::ThreadScheduler;
use crate::db::kv::SqliteStore;
use crate::errors::AppResult;
use std::sync::Arc;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks, interval_ms } = cmd {
        let store = Arc::new(SqliteStore::open(&cfg.database)?);
        let interval = interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| cfg.tick_interval());

        ClockLogic::watch(store, SystemClock, &ThreadScheduler, interval, *ticks)?;
    }
    Ok(())
}
