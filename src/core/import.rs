//! User-facing flow around the one-time legacy import.

use crate::errors::AppResult;
use crate::models::contact::Contact;
use crate::store::legacy;
use crate::store::log::rlog;
use crate::store::pool::StorePool;
use crate::ui::messages::{info, success};

pub struct ImportLogic;

impl ImportLogic {
    /// Decode and return what a legacy import would bring in, without
    /// committing anything.
    pub fn preview(pool: &mut StorePool) -> AppResult<Vec<Contact>> {
        legacy::pending_legacy_import(pool)
    }

    /// Commit the user's decision.
    pub fn resolve(pool: &mut StorePool, accept: bool) -> AppResult<()> {
        let pending = legacy::pending_legacy_import(pool)?;
        if pending.is_empty() {
            info("No legacy contacts to import.");
            return Ok(());
        }

        let imported = legacy::resolve_legacy_import(pool, accept)?;

        if accept {
            rlog(
                &pool.conn,
                "import",
                "legacy",
                &format!("Imported {} legacy contacts", imported),
            )?;
            success(format!("Imported {} contacts.", imported));
        } else {
            rlog(&pool.conn, "import", "legacy", "Declined legacy import")?;
            info("Legacy contacts discarded.");
        }

        Ok(())
    }
}
