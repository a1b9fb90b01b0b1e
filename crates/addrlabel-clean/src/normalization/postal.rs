//! Postal code normalization.

/// Digits in a domestic postal code.
pub const POSTAL_CODE_DIGITS: usize = 7;

/// Textual token spreadsheet exports write for an empty numeric cell.
const NOT_A_NUMBER: &str = "nan";

/// Normalizes a raw postal code to `DDD-DDDD`.
///
/// Full-width digits (U+FF10 to U+FF19) are folded to ASCII, then every
/// character other than an ASCII digit is dropped. Decimal digits of other
/// scripts, such as Arabic-Indic `٠`, count as non-digits and are removed.
/// Returns `None` when the input is absent, blank or the `nan` token, and
/// when it does not leave exactly seven digits.
pub fn normalize_postal_code(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(NOT_A_NUMBER) {
        return None;
    }
    let digits: String = raw
        .chars()
        .map(fold_full_width_digit)
        .filter(char::is_ascii_digit)
        .collect();
    if digits.len() != POSTAL_CODE_DIGITS {
        return None;
    }
    Some(format!("{}-{}", &digits[..3], &digits[3..]))
}

fn fold_full_width_digit(ch: char) -> char {
    match ch {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (ch as u32 - 0xFF10) as u8),
        _ => ch,
    }
}
