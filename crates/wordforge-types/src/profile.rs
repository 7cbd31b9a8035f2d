//! Target profiles and the seed facts derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{Result, WordforgeError};

/// A single non-blank seed fact.
///
/// Seeds are trimmed on construction and guaranteed to contain at least one
/// non-whitespace character, which is the invariant every mutation tier
/// relies on.
///
/// # Example
///
/// ```
/// use wordforge_types::Seed;
///
/// let seed = Seed::new("  ripley ").unwrap();
/// assert_eq!(seed.as_str(), "ripley");
/// assert!(Seed::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Create a new seed, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordforgeError::Validation(
                "Seed facts must contain at least one non-blank character".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the seed as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = WordforgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// The collected facts describing one target.
///
/// Every field may be left blank; blank facts are simply skipped when the
/// seed list is derived. Profiles load from YAML, so a reconnaissance note
/// can be replayed without retyping it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Nickname or handle
    #[serde(default)]
    pub nickname: String,
    /// Birthdate digits, typically DDMMYYYY
    #[serde(default)]
    pub birthdate: String,
    /// City of residence
    #[serde(default)]
    pub city: String,
    /// Postal code; exactly five digits also contribute shorter prefixes
    #[serde(default)]
    pub postal_code: String,
    /// Pet name
    #[serde(default)]
    pub pet: String,
    /// Free-form extra keywords
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Profile {
    /// Load a profile from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordforgeError::Profile(format!("Failed to read profile {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Derive the ordered seed list for generation.
    ///
    /// Blank facts are skipped. A postal code is used only when it is
    /// exactly five ASCII digits, in which case it contributes itself plus
    /// its three-digit and two-digit prefixes. Duplicate facts are kept
    /// here; the generation pipeline owns deduplication.
    pub fn seeds(&self) -> Vec<Seed> {
        let mut seeds = Vec::new();
        let mut push = |value: &str| {
            if let Ok(seed) = Seed::new(value) {
                seeds.push(seed);
            }
        };

        push(&self.first_name);
        push(&self.last_name);
        push(&self.nickname);
        push(&self.birthdate);
        push(&self.city);

        let postal = self.postal_code.trim();
        if postal.len() == 5 && postal.chars().all(|c| c.is_ascii_digit()) {
            push(postal);
            push(&postal[..3]);
            push(&postal[..2]);
        }

        push(&self.pet);
        for keyword in &self.keywords {
            push(keyword);
        }

        seeds
    }

    /// Whether no field carries a usable fact.
    pub fn is_empty(&self) -> bool {
        self.seeds().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_trims_whitespace() {
        let seed = Seed::new("  bob  ").unwrap();
        assert_eq!(seed.as_str(), "bob");
        assert_eq!(seed.to_string(), "bob");
    }

    #[test]
    fn test_seed_rejects_blank_input() {
        assert!(Seed::new("").is_err());
        assert!(Seed::new("   ").is_err());
        assert!(Seed::new("\t\n").is_err());
    }

    #[test]
    fn test_seed_keeps_interior_whitespace() {
        let seed = Seed::new(" new york ").unwrap();
        assert_eq!(seed.as_str(), "new york");
    }

    #[test]
    fn test_seed_from_str() {
        let seed: Seed = "rex".parse().unwrap();
        assert_eq!(seed.as_str(), "rex");
        assert!("  ".parse::<Seed>().is_err());
    }

    #[test]
    fn test_seeds_follow_field_order() {
        let profile = Profile {
            first_name: "ellen".to_string(),
            last_name: "ripley".to_string(),
            city: "paris".to_string(),
            pet: "jones".to_string(),
            keywords: vec!["nostromo".to_string(), "weyland".to_string()],
            ..Default::default()
        };
        let seeds = profile.seeds();
        let seeds: Vec<&str> = seeds.iter().map(|s| s.as_str()).collect();
        assert_eq!(seeds, vec!["ellen", "ripley", "paris", "jones", "nostromo", "weyland"]);
    }

    #[test]
    fn test_blank_facts_are_skipped() {
        let messy = Profile {
            first_name: String::new(),
            last_name: "bob".to_string(),
            nickname: "   ".to_string(),
            ..Default::default()
        };
        let clean = Profile {
            last_name: "bob".to_string(),
            ..Default::default()
        };
        assert_eq!(messy.seeds(), clean.seeds());
    }

    #[test]
    fn test_postal_code_prefixes() {
        let profile = Profile {
            postal_code: "75011".to_string(),
            ..Default::default()
        };
        let seeds = profile.seeds();
        let seeds: Vec<&str> = seeds.iter().map(|s| s.as_str()).collect();
        assert_eq!(seeds, vec!["75011", "750", "75"]);
    }

    #[test]
    fn test_non_conforming_postal_code_is_skipped() {
        for postal in ["7501", "750112", "7501a", "sw1a 1aa", ""] {
            let profile = Profile {
                postal_code: postal.to_string(),
                ..Default::default()
            };
            assert!(profile.seeds().is_empty(), "postal {:?} should be skipped", postal);
        }
    }

    #[test]
    fn test_duplicate_facts_are_kept() {
        let profile = Profile {
            first_name: "max".to_string(),
            pet: "max".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.seeds().len(), 2);
    }

    #[test]
    fn test_is_empty() {
        assert!(Profile::default().is_empty());
        let profile = Profile {
            city: "derry".to_string(),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_from_yaml_with_missing_fields() {
        let profile = Profile::from_yaml("first_name: sarah\nkeywords:\n  - skynet\n").unwrap();
        assert_eq!(profile.first_name, "sarah");
        assert_eq!(profile.keywords, vec!["skynet".to_string()]);
        assert!(profile.last_name.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_malformed_documents() {
        assert!(Profile::from_yaml("first_name: [unclosed").is_err());
        assert!(Profile::from_yaml("keywords: not-a-list").is_err());
    }

    proptest! {
        #[test]
        fn prop_seed_new_trims_or_rejects(input in "\\PC{0,16}") {
            match Seed::new(&input) {
                Ok(seed) => {
                    prop_assert_eq!(seed.as_str(), input.trim());
                    prop_assert!(!seed.as_str().is_empty());
                }
                Err(_) => prop_assert!(input.trim().is_empty()),
            }
        }
    }
}
