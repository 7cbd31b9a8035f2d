//! Generation intensity levels and the length window each one imposes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, WordforgeError};

/// How aggressively a run mutates the seed vocabulary.
///
/// Levels form a strict ladder: every transformation a level enables stays
/// enabled at all higher levels, so raising the level never removes
/// candidates from the output.
///
/// # Example
///
/// ```
/// use wordforge_types::Intensity;
///
/// let level: Intensity = "3".parse().unwrap();
/// assert_eq!(level, Intensity::Advanced);
/// assert!(Intensity::Basic < Intensity::Max);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Level 1: base word forms only, no mutations
    Basic,
    /// Level 2: numeric affixes and bracket wrapping
    Standard,
    /// Level 3: leet speak plus symbol and year mutations
    Advanced,
    /// Level 4: everything, plus permutations and substring mixing
    #[default]
    Max,
}

impl Intensity {
    /// The numeric level shown to users, 1 through 4.
    pub fn as_number(&self) -> u8 {
        match self {
            Intensity::Basic => 1,
            Intensity::Standard => 2,
            Intensity::Advanced => 3,
            Intensity::Max => 4,
        }
    }

    /// Build an intensity from its numeric level.
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Intensity::Basic),
            2 => Ok(Intensity::Standard),
            3 => Ok(Intensity::Advanced),
            4 => Ok(Intensity::Max),
            _ => Err(WordforgeError::Validation(format!(
                "Invalid intensity level: {} (expected 1 through 4)",
                n
            ))),
        }
    }

    /// Whether the affix mutation tier runs at this level.
    pub fn mutations_enabled(&self) -> bool {
        *self >= Intensity::Standard
    }

    /// Whether each seed is expanded through leet substitution.
    pub fn leet_enabled(&self) -> bool {
        *self >= Intensity::Advanced
    }

    /// Whether symbol affixes and interior symbol insertion apply.
    pub fn symbols_enabled(&self) -> bool {
        *self >= Intensity::Advanced
    }

    /// Whether four-digit year suffixes join the affix pool.
    pub fn years_enabled(&self) -> bool {
        *self >= Intensity::Advanced
    }

    /// Whether seed permutations and substring mixing run.
    pub fn permutations_enabled(&self) -> bool {
        *self >= Intensity::Max
    }

    /// The inclusive character-length window applied to the final set.
    ///
    /// The top level widens the window because permutations produce both
    /// very short splices and very long concatenations worth keeping.
    pub fn window(&self) -> LengthWindow {
        match self {
            Intensity::Max => LengthWindow { min: 4, max: 20 },
            _ => LengthWindow { min: 6, max: 14 },
        }
    }
}

impl FromStr for Intensity {
    type Err = WordforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "1" | "basic" => Ok(Intensity::Basic),
            "2" | "standard" => Ok(Intensity::Standard),
            "3" | "advanced" => Ok(Intensity::Advanced),
            "4" | "max" => Ok(Intensity::Max),
            _ => Err(WordforgeError::Validation(format!(
                "Invalid intensity level: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Max => write!(f, "max"),
            other => write!(f, "{}", other.as_number()),
        }
    }
}

/// Inclusive character-length window for the final wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthWindow {
    /// Minimum length in characters
    pub min: usize,
    /// Maximum length in characters
    pub max: usize,
}

impl LengthWindow {
    /// Whether a candidate's character count falls inside the window.
    ///
    /// Lengths are counted in characters, not bytes, so multi-byte glyphs
    /// introduced by leet substitution count as one.
    pub fn contains(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min && len <= self.max
    }
}
