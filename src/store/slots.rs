//! Key-value slot access and the contact collection that lives in it.

use crate::errors::{AppError, AppResult};
use crate::models::contact::Contact;
use crate::store::pool::StorePool;
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, params};

/// Slot holding the current-shape contact collection.
pub const CONTACTS_SLOT: &str = "rolo-contacts-v2";

/// Slot written by the pre-v2 storage shape; deleted once migration resolves.
pub const LEGACY_SLOT: &str = "contacts";

/// Migration flag slot: "accepted" or "declined"; missing means unresolved.
pub const MIGRATION_SLOT: &str = "rolo-migrated-v2";

pub fn read_slot(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM slots WHERE key = ?1")?;
    let value = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn write_slot(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO slots (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn clear_slot(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM slots WHERE key = ?1", [key])?;
    Ok(())
}

/// Load the contact collection.
///
/// A missing slot reads as an empty collection. A slot holding malformed
/// JSON is dropped and an empty collection is returned; the caller never
/// sees an error for it.
pub fn load_contacts(pool: &mut StorePool) -> AppResult<Vec<Contact>> {
    let Some(raw) = read_slot(&pool.conn, CONTACTS_SLOT)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Contact>>(&raw) {
        Ok(contacts) => Ok(contacts),
        Err(_) => {
            warning("Stored contacts were unreadable — starting from an empty list.");
            clear_slot(&pool.conn, CONTACTS_SLOT)?;
            Ok(Vec::new())
        }
    }
}

/// Overwrite the persisted collection.
/// No validation here: that is the form's responsibility.
pub fn save_contacts(pool: &mut StorePool, contacts: &[Contact]) -> AppResult<()> {
    let json = serde_json::to_string(contacts)
        .map_err(|e| AppError::Other(format!("Failed to serialize contacts: {e}")))?;
    write_slot(&pool.conn, CONTACTS_SLOT, &json)
}

/// Replace the record matching `contact.id`, or append when absent.
pub fn upsert(contacts: &mut Vec<Contact>, contact: Contact) {
    match contacts.iter_mut().find(|c| c.id == contact.id) {
        Some(existing) => *existing = contact,
        None => contacts.push(contact),
    }
}

/// Remove by id. Returns false when no record matched.
pub fn remove(contacts: &mut Vec<Contact>, id: &str) -> bool {
    let before = contacts.len();
    contacts.retain(|c| c.id != id);
    contacts.len() != before
}
