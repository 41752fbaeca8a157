use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sale::{CartEdits, SaleLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Sale {
            ids,
            dec,
            remove,
            dry_run,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let edits = CartEdits {
                decrease: dec.clone(),
                remove: remove.clone(),
            };
            SaleLogic::checkout(&mut pool, cfg, ids, &edits, *dry_run)?;
        }
        Commands::Sales => {
            let mut pool = DbPool::new(&cfg.database)?;
            SaleLogic::list(&mut pool, cfg)?;
        }
        _ => {}
    }
    Ok(())
}
