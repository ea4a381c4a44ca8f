use super::day::Day;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One of the three shift periods within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftPeriod {
    Morning,
    Afternoon,
    Evening,
}

/// Per-contact shift schedule: absent days mean no shifts.
pub type ShiftGrid = BTreeMap<Day, BTreeSet<ShiftPeriod>>;

impl ShiftPeriod {
    pub const ALL: [ShiftPeriod; 3] = [
        ShiftPeriod::Morning,
        ShiftPeriod::Afternoon,
        ShiftPeriod::Evening,
    ];

    /// Row header used by the shift grid.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "AM",
            ShiftPeriod::Afternoon => "PM",
            ShiftPeriod::Evening => "Eve",
        }
    }

    /// Parse a CLI code, short or full, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "am" | "morning" => Some(ShiftPeriod::Morning),
            "pm" | "afternoon" => Some(ShiftPeriod::Afternoon),
            "eve" | "evening" => Some(ShiftPeriod::Evening),
            _ => None,
        }
    }

    /// Index in [0, 3), as used by the flat legacy shift encoding.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Parse a `DAY:PERIOD` CLI spec, e.g. "mon:am" or "tuesday:evening".
pub fn parse_shift_spec(spec: &str) -> Option<(Day, ShiftPeriod)> {
    let (day, period) = spec.split_once(':')?;
    Some((Day::from_code(day.trim())?, ShiftPeriod::from_code(period.trim())?))
}
