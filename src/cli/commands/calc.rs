use crate::cli::parser::Commands;
use crate::core::calc::CalcLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calc { keys, trace } = cmd {
        let display = CalcLogic::run(keys, *trace)?;
        println!("{}", display);
    }
    Ok(())
}
