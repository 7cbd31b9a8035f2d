//! Pairwise concatenation of seed facts.

use std::collections::HashSet;

use wordforge_types::Seed;

/// Concatenate every ordered pair of value-distinct seeds.
///
/// For each ordered pair (a, b) with differing values this emits a+b, b+a,
/// and a+"_"+b; because both orders are enumerated, the underscore form
/// shows up in both directions too. Equal values at different positions in
/// the seed list are skipped, so a duplicated fact never pairs with itself.
pub fn combine(seeds: &[Seed]) -> HashSet<String> {
    let mut combined = HashSet::new();
    for a in seeds {
        for b in seeds {
            if a == b {
                continue;
            }
            combined.insert(format!("{}{}", a, b));
            combined.insert(format!("{}{}", b, a));
            combined.insert(format!("{}_{}", a, b));
        }
    }
    combined
}
