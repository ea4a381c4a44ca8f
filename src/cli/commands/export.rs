use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::pool::StorePool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = StorePool::new(&cfg.storage)?;
        ExportLogic::export(&mut pool, format, file, *force)?;
    }
    Ok(())
}
