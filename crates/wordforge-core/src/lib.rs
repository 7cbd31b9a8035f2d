//! # Wordforge Core
//!
//! The candidate generation engine for the wordforge wordlist generator.
//!
//! This crate turns a seed vocabulary into a deduplicated candidate set by
//! composing mutation tiers:
//!
//! - Base-form expansion: casing variants, reversal, starter suffixes
//! - Leet substitution: every combination of look-alike glyph replacements
//! - Affix mutation: numeric, symbol, and year affixes plus bracket wrapping
//! - Pairwise concatenation and interior symbol insertion
//! - Ordered permutations and substring splicing of the seed facts
//!
//! The selected [`Intensity`](wordforge_types::Intensity) level decides
//! which tiers run; a length filter and the wordlist writer finish the job.
//!
//! ## Example
//!
//! ```
//! use wordforge_core::{filter, Generator};
//! use wordforge_types::{GeneratorConfig, Intensity, Seed};
//!
//! let seeds = vec![Seed::new("ripley").unwrap()];
//! let config = GeneratorConfig {
//!     level: Intensity::Basic,
//!     ..Default::default()
//! };
//!
//! let candidates = Generator::new(config).run(&seeds);
//! let kept = filter::by_length(candidates, config.level.window());
//! assert!(kept.contains("ripley123"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod mutate;
pub mod output;
pub mod pipeline;
pub mod tables;
pub mod text;

// Re-export the engine entry point and shared result types
pub use pipeline::Generator;
pub use wordforge_types::{Result, WordforgeError};

/// Wordforge application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wordforge application name
pub const APP_NAME: &str = "wordforge";
