//! Address normalization.

/// Full-width (ideographic) space.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Normalizes a free-text address.
///
/// When the prefecture name occurs more than once, only its first occurrence
/// is removed; a repeated prefix such as `神奈川県神奈川県横浜市` keeps one
/// mention. Full-width spaces become ordinary spaces. No other whitespace is
/// touched.
pub fn normalize_address(address: Option<&str>, prefecture: Option<&str>) -> String {
    let Some(address) = address else {
        return String::new();
    };
    let mut normalized = match prefecture {
        Some(prefecture) if !prefecture.is_empty() && address.matches(prefecture).count() > 1 => {
            address.replacen(prefecture, "", 1)
        }
        _ => address.to_string(),
    };
    if normalized.contains(IDEOGRAPHIC_SPACE) {
        normalized = normalized.replace(IDEOGRAPHIC_SPACE, " ");
    }
    normalized
}
