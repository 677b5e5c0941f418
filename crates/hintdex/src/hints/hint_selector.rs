//! # Hint Selector

/// Select the longest hint; the first seen wins ties.
///
/// Longer hints occur in fewer texts, so they make for a tighter pre-filter.
/// Length is measured in chars.
///
/// ## Arguments
/// * `hints` - The candidate hints.
///
/// ## Returns
/// The selected hint, or `None` if `hints` is empty.
pub fn select_hint<S: AsRef<str>>(hints: &[S]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for hint in hints {
        let hint = hint.as_ref();
        let len = hint.chars().count();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((hint, len));
        }
    }
    best.map(|(hint, _)| hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let hints: [&str; 0] = [];
        assert_eq!(select_hint(&hints), None);
    }

    #[test]
    fn test_longest_wins() {
        assert_eq!(select_hint(&["ab", "abcd", "abc"]), Some("abcd"));
    }

    #[test]
    fn test_first_seen_wins_ties() {
        assert_eq!(select_hint(&["xy", "ab", "cd"]), Some("xy"));
        assert_eq!(select_hint(&["q", "xyz", "abc"]), Some("xyz"));
    }

    #[test]
    fn test_length_counts_chars() {
        // "éé" is 4 bytes, but 2 chars.
        assert_eq!(select_hint(&["éé", "abc"]), Some("abc"));
    }
}
