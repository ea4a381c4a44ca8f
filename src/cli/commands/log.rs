use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = StorePool::new(&cfg.storage)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
