//! Contact list query engine: search, category filtering, ranking and
//! grouping for the list view.

use crate::models::contact::Contact;
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The eight fixed alphabetic ranges used by the name-mode tab row.
pub const ALPHABET_TABS: [&str; 8] = [
    "A-C", "D-F", "G-I", "J-L", "M-O", "P-R", "S-U", "V-Z",
];

/// Group label for contacts without a location, restaurant mode only.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// How the list view is keyed: by first name or by workplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListMode {
    Name,
    Restaurant,
}

impl ListMode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "name" => Some(ListMode::Name),
            "restaurant" => Some(ListMode::Restaurant),
            _ => None,
        }
    }
}

/// One rendered group of the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactGroup {
    pub label: String,
    pub contacts: Vec<Contact>,
}

/// Alphabetic tab for a first name.
///
/// The first character is ASCII-uppercased and matched against the range
/// bounds. Anything that does not land on 'A'..='Z' (digits, symbols,
/// empty names, non-ASCII letters) goes to the terminal "V-Z" tab, so this
/// function partitions every contact into exactly one of the eight tabs.
pub fn alphabet_tab_for(name: &str) -> &'static str {
    let first = name.chars().next().map(|c| c.to_ascii_uppercase());
    match first {
        Some(c @ 'A'..='Z') => {
            if c <= 'C' {
                "A-C"
            } else if c <= 'F' {
                "D-F"
            } else if c <= 'I' {
                "G-I"
            } else if c <= 'L' {
                "J-L"
            } else if c <= 'O' {
                "M-O"
            } else if c <= 'R' {
                "P-R"
            } else if c <= 'U' {
                "S-U"
            } else {
                "V-Z"
            }
        }
        _ => "V-Z",
    }
}

/// Case-aware lexicographic order: lowercased comparison first, raw
/// comparison as the tie-break. Total and deterministic.
pub fn label_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn name_cmp(a: &Contact, b: &Contact) -> Ordering {
    label_cmp(&a.first_name, &b.first_name)
}

/// Search rank, lower is better: 0 name prefix, 1 name substring, 2 label
/// prefix, 3 label substring, 4 neither. Rank 4 is unreachable for contacts
/// that passed the search filter.
fn score(contact: &Contact, term: &str) -> u8 {
    if term.is_empty() {
        return 0;
    }
    let name = contact.first_name.to_lowercase();
    let label = contact.effective_location_label().to_lowercase();
    if name.starts_with(term) {
        0
    } else if name.contains(term) {
        1
    } else if label.starts_with(term) {
        2
    } else if label.contains(term) {
        3
    } else {
        4
    }
}

/// Filter and rank the collection.
///
/// A non-empty search term (trimmed, lowercased) matches the first name and
/// the effective location label, and suppresses any active category.
/// Without a term, an active category filters by tab membership (name mode)
/// or by exact label match (restaurant mode).
pub fn filter_and_rank(
    contacts: &[Contact],
    search_term: &str,
    active_category: Option<&str>,
    mode: ListMode,
) -> Vec<Contact> {
    let term = search_term.trim().to_lowercase();

    let mut result: Vec<Contact> = contacts
        .iter()
        .filter(|contact| {
            if !term.is_empty() {
                contact.first_name.to_lowercase().contains(&term)
                    || contact
                        .effective_location_label()
                        .to_lowercase()
                        .contains(&term)
            } else if let Some(category) = active_category {
                match mode {
                    ListMode::Name => alphabet_tab_for(&contact.first_name) == category,
                    ListMode::Restaurant => contact.effective_location_label() == category,
                }
            } else {
                true
            }
        })
        .cloned()
        .collect();

    // Stable sort: equal (score, name) pairs keep their stored order.
    result.sort_by(|a, b| {
        score(a, &term)
            .cmp(&score(b, &term))
            .then_with(|| name_cmp(a, b))
    });

    result
}

/// Full query: filter, rank, then bucket for display.
///
/// Empty groups are omitted; the fixed tab row is available separately via
/// [`category_tabs`]. Total over any well-formed collection: an empty
/// collection yields an empty view.
pub fn query(
    contacts: &[Contact],
    search_term: &str,
    active_category: Option<&str>,
    mode: ListMode,
) -> Vec<ContactGroup> {
    let filtered = filter_and_rank(contacts, search_term, active_category, mode);

    let mut buckets: BTreeMap<String, Vec<Contact>> = BTreeMap::new();
    for contact in filtered {
        let key = match mode {
            ListMode::Name => alphabet_tab_for(&contact.first_name).to_string(),
            ListMode::Restaurant => {
                let label = contact.effective_location_label();
                if label.is_empty() {
                    UNKNOWN_GROUP.to_string()
                } else {
                    label.to_string()
                }
            }
        };
        buckets.entry(key).or_default().push(contact);
    }

    let mut groups: Vec<ContactGroup> = buckets
        .into_iter()
        .map(|(label, mut contacts)| {
            contacts.sort_by(name_cmp);
            ContactGroup { label, contacts }
        })
        .collect();

    groups.sort_by(|a, b| label_cmp(&a.label, &b.label));
    groups
}

/// Derived category tab list for the current collection: the fixed ranges
/// in name mode, every distinct non-empty location label in restaurant
/// mode. Recomputed fresh on every call, never stored.
pub fn category_tabs(contacts: &[Contact], mode: ListMode) -> Vec<String> {
    match mode {
        ListMode::Name => ALPHABET_TABS.iter().map(|tab| tab.to_string()).collect(),
        ListMode::Restaurant => {
            let mut labels: Vec<String> = contacts
                .iter()
                .map(|c| c.effective_location_label().to_string())
                .filter(|label| !label.is_empty())
                .collect();
            labels.sort_by(|a, b| label_cmp(a, b));
            labels.dedup();
            labels
        }
    }
}
