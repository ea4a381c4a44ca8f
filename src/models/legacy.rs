use super::contact::{Contact, new_contact_id};
use super::day::Day;
use super::place::Place;
use super::shift::{ShiftGrid, ShiftPeriod};
use serde::Deserialize;

/// Contact record as written by the pre-v2 storage shape.
/// Read-only: only ever decoded during the one-time import.
///
/// `shifts` is a flat list of integers in [0, 21), each encoding
/// `day * 3 + period`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContact {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub shifts: Option<Vec<i64>>,

    #[serde(default)]
    pub place: Option<Place>,
}

impl LegacyContact {
    /// Decode into the current shape.
    ///
    /// Returns None when the record has no usable first name. Shift indexes
    /// outside [0, 21) are skipped without failing the record.
    pub fn into_contact(self) -> Option<Contact> {
        let first_name = self.first_name.as_deref().map(str::trim).unwrap_or("");
        if first_name.is_empty() {
            return None;
        }

        let mut shifts = ShiftGrid::new();
        for index in self.shifts.unwrap_or_default() {
            if !(0..21).contains(&index) {
                continue;
            }
            let Some(day) = Day::from_index((index / 3) as usize) else {
                continue;
            };
            let Some(period) = ShiftPeriod::from_index((index % 3) as usize) else {
                continue;
            };
            shifts.entry(day).or_default().insert(period);
        }

        let restaurant = self
            .place
            .as_ref()
            .map(|p| p.location_name.trim().to_string())
            .filter(|label| !label.is_empty());
        let notes = self.notes.filter(|n| !n.trim().is_empty());
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(new_contact_id);

        Some(Contact {
            id,
            first_name: first_name.to_string(),
            restaurant,
            phone: None,
            instagram: None,
            place: self.place,
            shifts,
            notes,
        })
    }
}
