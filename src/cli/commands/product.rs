use crate::cli::parser::{Commands, ProductAction};
use crate::config::Config;
use crate::core::product::ProductLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Product { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ProductAction::Add { name, price } => {
                ProductLogic::add(&mut pool, cfg, name, price)?;
            }
            ProductAction::List => ProductLogic::list(&mut pool, cfg)?,
            ProductAction::Del { id } => ProductLogic::del(&mut pool, *id)?,
        }
    }
    Ok(())
}
