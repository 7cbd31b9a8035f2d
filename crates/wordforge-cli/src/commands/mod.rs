//! CLI command implementations.

pub mod generate;
pub mod levels;
pub mod version;
