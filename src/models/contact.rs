use super::place::Place;
use super::shift::ShiftGrid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single rolodex card.
///
/// Serialized as camelCase JSON inside the contacts slot, matching the
/// wire shape the collection has always been stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque unique id, generated client-side, immutable after creation.
    pub id: String,

    pub first_name: String,

    /// Free-text workplace/location label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub shifts: ShiftGrid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Contact {
    /// Fresh card with a new id. Field values are the form's responsibility.
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            id: new_contact_id(),
            first_name: first_name.into(),
            restaurant: None,
            phone: None,
            instagram: None,
            place: None,
            shifts: ShiftGrid::new(),
            notes: None,
        }
    }

    /// The workplace label used everywhere a location is displayed,
    /// filtered, or grouped: `restaurant` if set, else the place's display
    /// name, else empty. Always trimmed, so every call site agrees.
    pub fn effective_location_label(&self) -> &str {
        if let Some(restaurant) = &self.restaurant {
            let trimmed = restaurant.trim();
            if !trimmed.is_empty() {
                return trimmed;
            }
        }
        if let Some(place) = &self.place {
            let trimmed = place.location_name.trim();
            if !trimmed.is_empty() {
                return trimmed;
            }
        }
        ""
    }
}

/// Client-generated opaque contact id.
pub fn new_contact_id() -> String {
    Uuid::new_v4().to_string()
}
