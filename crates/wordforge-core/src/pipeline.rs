//! Tier orchestration: composes the mutation stages a level enables.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use wordforge_types::{GeneratorConfig, Seed};

use crate::mutate::affix::{self, MutationFlags};
use crate::mutate::{base, leet, mix, pairs, permute};

/// Runs the generation tiers over a seed list.
///
/// The candidate set only ever grows while tiers run; length filtering is
/// the caller's final step, after which the set is ready to sort and save.
///
/// # Example
///
/// ```
/// use wordforge_core::Generator;
/// use wordforge_types::{GeneratorConfig, Intensity, Seed};
///
/// let seeds = vec![Seed::new("ripley").unwrap()];
/// let config = GeneratorConfig {
///     level: Intensity::Standard,
///     ..Default::default()
/// };
/// let candidates = Generator::new(config).run(&seeds);
/// assert!(candidates.contains("ripley123"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for one run.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every tier the configured level enables, using the process RNG.
    pub fn run(&self, seeds: &[Seed]) -> HashSet<String> {
        self.run_with_rng(seeds, &mut rand::thread_rng())
    }

    /// Run with a caller-supplied random source.
    ///
    /// Only the randomized digit affixes draw from the source; with
    /// `random_digits` off the output is fully deterministic, and with it
    /// on, a seeded source reproduces the same set.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, seeds: &[Seed], rng: &mut R) -> HashSet<String> {
        let level = self.config.level;
        let mut candidates = HashSet::new();

        for seed in seeds {
            candidates.extend(base::expand(seed.as_str()));
            if level.leet_enabled() {
                candidates.extend(leet::expand(seed.as_str()));
            }
        }
        debug!("Base forms expanded: {} candidates", candidates.len());

        if level.mutations_enabled() {
            let flags =
                MutationFlags::for_level(level).with_random_digits(self.config.random_digits);
            let mutated = affix::mutate(&candidates, flags, rng);
            candidates.extend(mutated);
            candidates.extend(pairs::combine(seeds));
            debug!("Affix tier applied: {} candidates", candidates.len());
        }

        if level.permutations_enabled() {
            candidates.extend(permute::arrangements(seeds, self.config.permutation_depth));
            candidates.extend(mix::splice(seeds));
            debug!("Permutation tier applied: {} candidates", candidates.len());
        }

        candidates
    }
}
