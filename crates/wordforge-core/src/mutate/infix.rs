//! Symbol insertion at interior word positions.

use std::collections::HashSet;

use crate::tables::SYMBOLS;

/// Insert every symbol at every interior character boundary of every word.
///
/// Boundaries are character boundaries, so words carrying multi-byte glyphs
/// split cleanly. Words of a single character have no interior boundary and
/// contribute nothing.
pub fn insert(words: &HashSet<String>) -> HashSet<String> {
    let mut inserted = HashSet::new();
    for word in words {
        for (boundary, _) in word.char_indices().skip(1) {
            for symbol in SYMBOLS {
                let mut variant = String::with_capacity(word.len() + symbol.len_utf8());
                variant.push_str(&word[..boundary]);
                variant.push(symbol);
                variant.push_str(&word[boundary..]);
                inserted.insert(variant);
            }
        }
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_at_every_interior_position() {
        let inserted = insert(&words(&["abc"]));
        // Two interior boundaries, nine symbols each.
        assert_eq!(inserted.len(), 18);
        assert!(inserted.contains("a!bc"));
        assert!(inserted.contains("ab!c"));
        assert!(inserted.contains("a/bc"));
        assert!(!inserted.contains("!abc"));
        assert!(!inserted.contains("abc!"));
    }

    #[test]
    fn test_single_character_words_contribute_nothing() {
        assert!(insert(&words(&["a"])).is_empty());
        assert!(insert(&words(&[""])).is_empty());
    }

    #[test]
    fn test_insert_respects_multibyte_boundaries() {
        let inserted = insert(&words(&["n€x"]));
        assert!(inserted.contains("n!€x"));
        assert!(inserted.contains("n€!x"));
        assert_eq!(inserted.len(), 18);
    }
}
