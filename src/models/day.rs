use serde::{Deserialize, Serialize};

/// Day of the week, in shift-grid order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Short CLI code ("mon", "tue", ...)
    pub fn code(&self) -> &'static str {
        match self {
            Day::Monday => "mon",
            Day::Tuesday => "tue",
            Day::Wednesday => "wed",
            Day::Thursday => "thu",
            Day::Friday => "fri",
            Day::Saturday => "sat",
            Day::Sunday => "sun",
        }
    }

    /// Column header used by the shift grid ("Mon", "Tue", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
            Day::Saturday => "Sat",
            Day::Sunday => "Sun",
        }
    }

    /// Parse a CLI code, short or full, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "mon" | "monday" => Some(Day::Monday),
            "tue" | "tuesday" => Some(Day::Tuesday),
            "wed" | "wednesday" => Some(Day::Wednesday),
            "thu" | "thursday" => Some(Day::Thursday),
            "fri" | "friday" => Some(Day::Friday),
            "sat" | "saturday" => Some(Day::Saturday),
            "sun" | "sunday" => Some(Day::Sunday),
            _ => None,
        }
    }

    /// Index in [0, 7), as used by the flat legacy shift encoding.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
