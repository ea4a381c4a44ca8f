use crate::core::resolve::resolve_contact;
use crate::errors::AppResult;
use crate::models::contact::Contact;
use crate::store::log::rlog;
use crate::store::pool::StorePool;
use crate::store::slots;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one contact (by id or unique name) and persist the collection.
    pub fn apply(pool: &mut StorePool, reference: &str) -> AppResult<Contact> {
        let mut contacts = slots::load_contacts(pool)?;

        let removed = resolve_contact(&contacts, reference)?.clone();

        slots::remove(&mut contacts, &removed.id);
        slots::save_contacts(pool, &contacts)?;
        rlog(
            &pool.conn,
            "del",
            &removed.id,
            &format!("Deleted contact '{}'", removed.first_name),
        )?;

        Ok(removed)
    }
}
