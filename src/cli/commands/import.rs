use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { accept, decline } = cmd {
        let mut pool = StorePool::new(&cfg.storage)?;

        if *accept || *decline {
            return ImportLogic::resolve(&mut pool, *accept);
        }

        //
        // Preview only
        //
        let pending = ImportLogic::preview(&mut pool)?;
        if pending.is_empty() {
            info("No legacy contacts to import.");
            return Ok(());
        }

        println!("Found {} contacts from an earlier version:", pending.len());
        for contact in &pending {
            let label = contact.effective_location_label();
            if label.is_empty() {
                println!("  - {}", contact.first_name);
            } else {
                println!("  - {} ({})", contact.first_name, label);
            }
        }
        println!("\nRun `rolo import --accept` to add them, or `rolo import --decline` to discard.");
    }

    Ok(())
}
