use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        let skip_prompt = *yes || !cfg.confirm_delete;
        if !skip_prompt
            && !confirm(&format!(
                "Delete contact '{}'? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = StorePool::new(&cfg.storage)?;
        let removed = DeleteLogic::apply(&mut pool, id)?;

        success(format!("{} has been deleted.", removed.first_name));
    }

    Ok(())
}
