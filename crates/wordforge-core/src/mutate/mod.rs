//! Mutation tiers that expand a seed vocabulary into a candidate set.
//!
//! Each tier takes a vocabulary (or the original seed list) and produces new
//! candidates; the pipeline owns the order in which tiers compose.

pub mod base;
pub mod leet;
pub mod infix;
pub mod affix;
pub mod pairs;
pub mod mix;
pub mod permute;
