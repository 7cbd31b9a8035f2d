//! Ordered arrangements of seed facts.

use std::collections::HashSet;

use wordforge_types::Seed;

/// Concatenate every ordered arrangement of 2 through `depth` seeds.
///
/// Arrangements never reuse a seed position, though equal values at
/// different positions still combine. Arrangement lengths impossible for
/// the seed count simply contribute nothing, as does a depth below 2.
pub fn arrangements(seeds: &[Seed], depth: usize) -> HashSet<String> {
    let mut joined = HashSet::new();
    for length in 2..=depth {
        if length > seeds.len() {
            break;
        }
        let mut used = vec![false; seeds.len()];
        let mut picked = Vec::with_capacity(length);
        arrange(seeds, length, &mut used, &mut picked, &mut joined);
    }
    joined
}

fn arrange(
    seeds: &[Seed],
    remaining: usize,
    used: &mut [bool],
    picked: &mut Vec<usize>,
    out: &mut HashSet<String>,
) {
    if remaining == 0 {
        let word: String = picked.iter().map(|&i| seeds[i].as_str()).collect();
        out.insert(word);
        return;
    }
    for index in 0..seeds.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        picked.push(index);
        arrange(seeds, remaining - 1, used, picked, out);
        picked.pop();
        used[index] = false;
    }
}
