//! CLI structure and command definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use wordforge_types::Intensity;

#[derive(Parser)]
#[command(name = "wordforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Targeted password wordlist generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress the banner and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a wordlist from a target profile
    Generate {
        #[command(flatten)]
        level: LevelArgs,

        /// Destination directory for the wordlist
        #[arg(long, default_value = "./output")]
        path: PathBuf,

        /// Base name of the generated file
        #[arg(long, default_value = "wordlist")]
        name: String,

        /// Load the profile from a YAML file instead of prompting
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Add randomized digit affixes (output varies between runs)
        #[arg(long)]
        random_digits: bool,

        /// Maximum seed words joined per permutation
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=5))]
        depth: u8,
    },

    /// Describe the intensity levels
    Levels,

    /// Show version information
    Version,
}

/// Intensity selection flags; at most one may be given.
#[derive(Args)]
#[group(multiple = false)]
pub struct LevelArgs {
    /// Level 1: plain word forms, no mutations
    #[arg(short = '1')]
    pub basic: bool,

    /// Level 2: numeric affixes and bracket wrapping
    #[arg(short = '2')]
    pub standard: bool,

    /// Level 3: leet speak plus symbol and year mutations
    #[arg(short = '3')]
    pub advanced: bool,

    /// Level 4: everything, plus permutations and substring mixing
    #[arg(short = 'm', long = "max")]
    pub max: bool,
}

impl LevelArgs {
    /// Resolve the selected intensity, defaulting to the highest level.
    pub fn intensity(&self) -> Intensity {
        if self.basic {
            Intensity::Basic
        } else if self.standard {
            Intensity::Standard
        } else if self.advanced {
            Intensity::Advanced
        } else {
            Intensity::Max
        }
    }
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Generate {
                level,
                path,
                name,
                profile,
                random_digits,
                depth,
            } => generate::execute(
                level.intensity(),
                path,
                name,
                profile.as_deref(),
                *random_digits,
                usize::from(*depth),
                self.quiet,
            ),
            Commands::Levels => levels::execute(),
            Commands::Version => version::execute(self.verbose),
        }
    }
}
