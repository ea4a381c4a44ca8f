use serde::{Deserialize, Serialize};

/// Structured location attached by an address-lookup flow.
/// Stored verbatim; independent of the free-text `restaurant` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub coordinates: Coordinates,
    pub formatted_address: String,
    pub place_id: String,
    pub location_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
