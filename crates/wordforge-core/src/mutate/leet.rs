//! Leet-speak substitution expansion.

use std::collections::HashSet;

use crate::tables;

/// Expand one word into every combination of look-alike substitutions.
///
/// Walks character positions left to right while keeping a growing list of
/// variants. At each substitutable position, every variant accumulated so
/// far spawns one new variant per replacement glyph, so forms substituted
/// and untouched at earlier positions both carry into later positions. A
/// word with no substitutable characters yields just itself.
///
/// Substitution works on characters, never bytes, so the multi-byte
/// replacements stay safe at any position.
pub fn expand(word: &str) -> HashSet<String> {
    let original: Vec<char> = word.chars().collect();
    let mut variants: Vec<Vec<char>> = vec![original.clone()];

    for (position, c) in original.iter().enumerate() {
        let replacements = tables::leet_alternatives(*c);
        if replacements.is_empty() {
            continue;
        }
        let mut spawned = Vec::new();
        for variant in &variants {
            for &replacement in replacements {
                let mut next = variant.clone();
                next[position] = replacement;
                spawned.push(next);
            }
        }
        variants.extend(spawned);
    }

    variants
        .into_iter()
        .map(|chars| chars.into_iter().collect::<String>())
        .collect()
}
