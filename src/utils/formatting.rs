//! Formatting utilities used for CLI outputs.

use crate::models::contact::Contact;
use crate::models::day::Day;
use crate::models::shift::ShiftPeriod;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to a display width (not a byte count), so names and labels with
/// wide or combining characters still line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    let padding = width.saturating_sub(used);
    format!("{}{}", s, " ".repeat(padding))
}

/// Placeholder for missing optional fields, as the detail card shows them.
pub fn dash_if_empty(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "—",
    }
}

/// Render the 7x3 shift grid:
///
/// ```text
///      Mon Tue Wed Thu Fri Sat Sun
/// AM   ●   .   .   .   .   .   .
/// PM   .   ●   .   .   .   .   .
/// Eve  .   .   .   .   .   .   .
/// ```
pub fn shift_grid(contact: &Contact) -> String {
    let mut out = String::new();

    out.push_str("     ");
    for day in Day::ALL {
        out.push_str(&pad_right(day.label(), 4));
    }
    out.push('\n');

    for period in ShiftPeriod::ALL {
        out.push_str(&pad_right(period.label(), 5));
        for day in Day::ALL {
            let marked = contact
                .shifts
                .get(&day)
                .is_some_and(|periods| periods.contains(&period));
            out.push_str(&pad_right(if marked { "●" } else { "." }, 4));
        }
        out.push('\n');
    }

    out
}

/// Wrap free-text notes to the detail card width.
pub fn wrap_notes(notes: &str, width: usize) -> String {
    textwrap::fill(notes, width)
}
