//! Affix mutation: suffix and prefix pools, bracket wrapping, and optional
//! randomized digit strings.

use std::collections::HashSet;

use rand::Rng;

use wordforge_types::Intensity;

use crate::mutate::infix;
use crate::tables::{BASE_SUFFIXES, BRACKETS, SYMBOLS, YEARS};
use crate::text;

/// Which optional affix families join a mutation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationFlags {
    /// Add symbol suffixes (single, doubled, tripled) and interior insertion
    pub symbols: bool,
    /// Add four-digit year suffixes, 1900 through the current year
    pub years: bool,
    /// Add one randomized digit string per length 1 through 4 to each word
    pub random_digits: bool,
}

impl MutationFlags {
    /// Flags for an intensity level, with randomized digits off.
    pub fn for_level(level: Intensity) -> Self {
        Self {
            symbols: level.symbols_enabled(),
            years: level.years_enabled(),
            random_digits: false,
        }
    }

    /// Enable or disable the randomized digit affixes.
    pub fn with_random_digits(mut self, enabled: bool) -> Self {
        self.random_digits = enabled;
        self
    }
}

/// Build the suffix pool for one mutation pass.
fn suffix_pool(flags: MutationFlags) -> Vec<String> {
    let mut pool: Vec<String> = BASE_SUFFIXES.iter().map(|s| s.to_string()).collect();

    if flags.symbols {
        for symbol in SYMBOLS {
            pool.push(symbol.to_string());
            pool.push(symbol.to_string().repeat(2));
            pool.push(symbol.to_string().repeat(3));
        }
    }
    if flags.years {
        pool.extend(YEARS.iter().cloned());
    }
    pool
}

/// Expand a vocabulary with suffix, prefix, bracket, and digit affixes.
///
/// For every word this emits word+suffix and suffix+word for the whole pool,
/// capitalized+suffix, the bracket wrappings, and optionally randomized
/// digit affixes. With the symbols flag set, the interior insertion forms
/// over the input vocabulary join the result as well.
///
/// Returns only the new forms; callers union them into their working set.
/// Words are visited in sorted order so that a seeded random source yields
/// reproducible output.
pub fn mutate<R: Rng + ?Sized>(
    words: &HashSet<String>,
    flags: MutationFlags,
    rng: &mut R,
) -> HashSet<String> {
    let pool = suffix_pool(flags);
    let mut variants = HashSet::new();

    let mut ordered: Vec<&String> = words.iter().collect();
    ordered.sort();

    for word in ordered {
        let capitalized = text::capitalize(word);

        for suffix in &pool {
            variants.insert(format!("{}{}", word, suffix));
            variants.insert(format!("{}{}", suffix, word));
            variants.insert(format!("{}{}", capitalized, suffix));
        }

        if flags.random_digits {
            for length in 1..=4 {
                let digits = random_digits(rng, length);
                variants.insert(format!("{}{}", word, digits));
                variants.insert(format!("{}{}", digits, word));
            }
        }

        for (left, right) in BRACKETS {
            variants.insert(format!("{}{}{}", left, word, right));
            variants.insert(format!("{}{}", word, right));
            variants.insert(format!("{}{}", left, word));
            for suffix in &pool {
                variants.insert(format!("{}{}{}{}", word, left, suffix, right));
                variants.insert(format!("{}{}{}{}", left, word, suffix, right));
            }
        }
    }

    if flags.symbols {
        variants.extend(infix::insert(words));
    }

    variants
}

/// One random digit string of the requested length.
fn random_digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
