//! Display name formatting.

use super::address::IDEOGRAPHIC_SPACE;

/// Formats a contact name for display.
///
/// Half- and full-width spaces are removed and `honorific` is appended after a
/// single space, unless the name already ends with it. A missing or blank name
/// stays empty; placeholder text is a rendering concern.
pub fn format_name(name: Option<&str>, honorific: &str) -> String {
    let Some(name) = name else {
        return String::new();
    };
    let compact: String = name
        .trim()
        .chars()
        .filter(|ch| *ch != ' ' && *ch != IDEOGRAPHIC_SPACE)
        .collect();
    if compact.is_empty() {
        return String::new();
    }
    if honorific.is_empty() || compact.ends_with(honorific) {
        return compact;
    }
    format!("{compact} {honorific}")
}
