//! One-time import of the pre-v2 contact collection.

use crate::errors::AppResult;
use crate::models::contact::Contact;
use crate::models::legacy::LegacyContact;
use crate::store::pool::StorePool;
use crate::store::slots::{self, LEGACY_SLOT, MIGRATION_SLOT};

/// Resolution state of the one-time import.
///
/// Persisted as a plain string in the migration slot; a missing slot or an
/// unrecognized value reads as Unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    Unresolved,
    Accepted,
    Declined,
}

impl MigrationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationState::Unresolved => "unresolved",
            MigrationState::Accepted => "accepted",
            MigrationState::Declined => "declined",
        }
    }

    pub fn from_slot(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => MigrationState::Accepted,
            Some("declined") => MigrationState::Declined,
            _ => MigrationState::Unresolved,
        }
    }
}

pub fn migration_state(pool: &mut StorePool) -> AppResult<MigrationState> {
    let raw = slots::read_slot(&pool.conn, MIGRATION_SLOT)?;
    Ok(MigrationState::from_slot(raw.as_deref()))
}

/// Decode the legacy slot for user confirmation, without committing.
///
/// Empty when the import is already resolved, when the legacy slot is
/// missing or unreadable (unreadable drops the slot), or when nothing
/// survives decoding. Records without a first name are dropped silently.
pub fn pending_legacy_import(pool: &mut StorePool) -> AppResult<Vec<Contact>> {
    if migration_state(pool)? != MigrationState::Unresolved {
        return Ok(Vec::new());
    }

    let Some(raw) = slots::read_slot(&pool.conn, LEGACY_SLOT)? else {
        return Ok(Vec::new());
    };

    let legacy: Vec<LegacyContact> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(_) => {
            slots::clear_slot(&pool.conn, LEGACY_SLOT)?;
            return Ok(Vec::new());
        }
    };

    Ok(legacy
        .into_iter()
        .filter_map(LegacyContact::into_contact)
        .collect())
}

/// Commit the user's decision.
///
/// Accepting appends the decoded records to the collection and saves it;
/// both outcomes set the flag and drop the legacy slot, so the import can
/// never run twice. Returns how many records were appended.
pub fn resolve_legacy_import(pool: &mut StorePool, accept: bool) -> AppResult<usize> {
    let pending = pending_legacy_import(pool)?;

    let imported = if accept && !pending.is_empty() {
        let mut contacts = slots::load_contacts(pool)?;
        let count = pending.len();
        contacts.extend(pending);
        slots::save_contacts(pool, &contacts)?;
        count
    } else {
        0
    };

    let state = if accept {
        MigrationState::Accepted
    } else {
        MigrationState::Declined
    };
    slots::write_slot(&pool.conn, MIGRATION_SLOT, state.as_str())?;
    slots::clear_slot(&pool.conn, LEGACY_SLOT)?;

    Ok(imported)
}
