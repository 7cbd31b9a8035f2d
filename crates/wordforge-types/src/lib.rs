//! # Wordforge Types
//!
//! Core types shared across all wordforge crates.
//!
//! This crate provides the fundamental building blocks for the wordforge
//! wordlist generator, including:
//!
//! - A validated wrapper for seed facts and the target profile they come from
//! - The intensity ladder that decides which mutation tiers run
//! - Run and output configuration passed from the CLI to the engine
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use wordforge_types::{Intensity, Profile, Seed};
//!
//! // Create a validated seed fact
//! let seed = Seed::new("  ripley ").unwrap();
//! assert_eq!(seed.as_str(), "ripley");
//!
//! // Parse an intensity level
//! let level: Intensity = "3".parse().unwrap();
//! assert_eq!(level, Intensity::Advanced);
//!
//! // Derive seeds from a profile
//! let profile = Profile {
//!     first_name: "ellen".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(profile.seeds().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod level;
pub mod profile;
pub mod config;

// Re-export common types for convenience
pub use errors::{Result, WordforgeError};
pub use level::{Intensity, LengthWindow};
pub use profile::{Profile, Seed};
pub use config::{GeneratorConfig, OutputConfig};
