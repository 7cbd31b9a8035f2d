//! Substring splicing across seed pairs.

use std::collections::HashSet;

use wordforge_types::Seed;

/// Splice prefixes and suffixes across every pair of seeds.
///
/// Pairs are taken by position, each unordered pair once. For every interior
/// split point in each word, the prefix of one is glued to the suffix of the
/// other, in both directions. Split points are character boundaries, so
/// multi-byte seeds splice cleanly. Single-character words have no interior
/// split point and contribute nothing.
pub fn splice(seeds: &[Seed]) -> HashSet<String> {
    let mut mixed = HashSet::new();
    for (index, first) in seeds.iter().enumerate() {
        for second in &seeds[index + 1..] {
            let a = first.as_str();
            let b = second.as_str();
            for (i, _) in a.char_indices().skip(1) {
                for (j, _) in b.char_indices().skip(1) {
                    mixed.insert(format!("{}{}", &a[..i], &b[j..]));
                    mixed.insert(format!("{}{}", &b[..j], &a[i..]));
                }
            }
        }
    }
    mixed
}
