//! Foreign-address and duplicate-address classification.

use std::collections::{BTreeSet, HashMap};

/// Latin-letter share above which an address is treated as foreign.
pub const FOREIGN_LATIN_RATIO: f64 = 0.5;

/// Share of ASCII Latin letters among all characters of `address`.
pub fn latin_ratio(address: &str) -> f64 {
    let total = address.chars().count();
    if total == 0 {
        return 0.0;
    }
    let latin = address.chars().filter(char::is_ascii_alphabetic).count();
    latin as f64 / total as f64
}

/// Flags an address as foreign when Latin letters make up strictly more than
/// half of its characters.
///
/// This is a density heuristic. Short mixed addresses near the boundary (for
/// example a domestic building name written in romaji) can land on either
/// side, and exactly 0.5 is domestic.
pub fn is_foreign_address(address: &str) -> bool {
    if address.trim().is_empty() {
        return false;
    }
    latin_ratio(address) > FOREIGN_LATIN_RATIO
}

/// Indices of addresses shared by two or more entries.
///
/// Empty addresses never take part. Every member of a shared group is
/// returned; there is no designated original.
pub fn detect_duplicate_addresses<'a, I>(addresses: I) -> BTreeSet<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: HashMap<&'a str, Vec<usize>> = HashMap::new();
    for (index, address) in addresses.into_iter().enumerate() {
        if address.is_empty() {
            continue;
        }
        groups.entry(address).or_default().push(index);
    }
    groups
        .into_values()
        .filter(|members| members.len() >= 2)
        .flatten()
        .collect()
}
