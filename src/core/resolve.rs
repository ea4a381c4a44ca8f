//! Resolve a CLI contact reference: exact id first, then a unique
//! case-insensitive first-name match.

use crate::errors::{AppError, AppResult};
use crate::models::contact::Contact;

pub fn resolve_contact<'a>(contacts: &'a [Contact], reference: &str) -> AppResult<&'a Contact> {
    if let Some(contact) = contacts.iter().find(|c| c.id == reference) {
        return Ok(contact);
    }

    let needle = reference.trim().to_lowercase();
    let mut matches = contacts
        .iter()
        .filter(|c| c.first_name.to_lowercase() == needle);

    match (matches.next(), matches.next()) {
        (Some(contact), None) => Ok(contact),
        (Some(_), Some(_)) => Err(AppError::AmbiguousContact(reference.to_string())),
        _ => Err(AppError::ContactNotFound(reference.to_string())),
    }
}
