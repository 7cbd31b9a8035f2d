//! Run configuration shared between the generation engine and the CLI.

use std::path::PathBuf;

use crate::level::Intensity;

/// Options controlling one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Selected intensity level
    pub level: Intensity,
    /// Add randomized digit affixes wherever the mutation tier runs
    pub random_digits: bool,
    /// Maximum seed words joined per permutation
    pub permutation_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            level: Intensity::Max,
            random_digits: false,
            permutation_depth: 3,
        }
    }
}

/// Destination for a persisted wordlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory the wordlist file is written into, created if absent
    pub dir: PathBuf,
    /// Base name of the list; the file on disk becomes `<name>_clear.txt`
    pub name: String,
}

impl OutputConfig {
    /// Create a new output configuration.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Full path of the wordlist file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(format!("{}_clear.txt", self.name))
    }
}
