// src/export/model.rs

use crate::models::contact::Contact;
use serde::Serialize;

/// Flat row shape shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct ContactExport {
    pub id: String,
    pub first_name: String,
    pub location: String,
    pub phone: String,
    pub instagram: String,
    pub shifts: String,
    pub notes: String,
}

impl ContactExport {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            first_name: contact.first_name.clone(),
            location: contact.effective_location_label().to_string(),
            phone: contact.phone.clone().unwrap_or_default(),
            instagram: contact.instagram.clone().unwrap_or_default(),
            shifts: compact_shifts(contact),
            notes: contact.notes.clone().unwrap_or_default(),
        }
    }
}

/// Compact shift encoding for flat rows, e.g. "mon:AM+PM;tue:Eve".
fn compact_shifts(contact: &Contact) -> String {
    contact
        .shifts
        .iter()
        .map(|(day, periods)| {
            let labels: Vec<&str> = periods.iter().map(|p| p.label()).collect();
            format!("{}:{}", day.code(), labels.join("+"))
        })
        .collect::<Vec<_>>()
        .join(";")
}
