//! Fixed-width address wrapping.

/// Split `text` into lines of `max_chars` characters.
///
/// Counting is per character, not per word: addresses usually carry no word
/// breaks. The last line holds the remainder and may be shorter. An empty
/// input yields one empty line. `max_chars` of zero is treated as one.
pub fn wrap_fixed_width(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count >= max_chars {
            lines.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_fixed_width("", 25), vec![String::new()]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_line() {
        assert_eq!(wrap_fixed_width("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn remainder_becomes_short_last_line() {
        assert_eq!(wrap_fixed_width("東京都千代田区", 3), vec!["東京都", "千代田", "区"]);
    }
}
