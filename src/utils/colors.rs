/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";

/// Tab divider palette, cycled per group: warm oranges fading into olive,
/// like the plastic dividers of a card index.
const GROUP_COLORS: [&str; 8] = [
    "\x1b[38;5;166m",
    "\x1b[38;5;172m",
    "\x1b[38;5;179m",
    "\x1b[38;5;143m",
    "\x1b[38;5;107m",
    "\x1b[38;5;101m",
    "\x1b[38;5;100m",
    "\x1b[38;5;58m",
];

pub fn group_color(index: usize) -> &'static str {
    GROUP_COLORS[index % GROUP_COLORS.len()]
}

/// Returns GREY when the field is empty (None or blank), RESET otherwise.
pub fn color_for_optional_field(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() => RESET,
        _ => GREY,
    }
}

/// Grey out placeholder values ("—") so real data stands out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "—" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
