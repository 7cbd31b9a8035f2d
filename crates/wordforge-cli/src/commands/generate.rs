//! Generate a wordlist from a target profile.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar};
use tracing::debug;

use wordforge_core::{filter, output, Generator};
use wordforge_types::{GeneratorConfig, Intensity, OutputConfig, Profile};

use crate::prompts;
use crate::ui::progress;

pub fn execute(
    level: Intensity,
    path: &Path,
    name: &str,
    profile_path: Option<&Path>,
    random_digits: bool,
    depth: usize,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!(
            "{} {}",
            wordforge_core::APP_NAME.cyan().bold(),
            wordforge_core::VERSION
        );
        println!();
    }

    let profile = match profile_path {
        Some(file) => Profile::load(file)
            .with_context(|| format!("Failed to load profile from {}", file.display()))?,
        None => prompts::collect_profile().context("Failed to collect the target profile")?,
    };

    let seeds = profile.seeds();
    if seeds.is_empty() {
        bail!("The profile contains no usable facts; nothing to generate");
    }
    debug!("Collected {} seed facts", seeds.len());

    if !quiet {
        println!(
            "{} wordlist at level {}",
            "Generating".green().bold(),
            level.to_string().cyan()
        );
    }

    let config = GeneratorConfig {
        level,
        random_digits,
        permutation_depth: depth,
    };

    let started = Instant::now();
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        progress::spinner("Expanding candidate set...")
    };
    let candidates = Generator::new(config).run(&seeds);
    spinner.finish_and_clear();

    let total = candidates.len();
    let window = level.window();
    let mut words: Vec<String> = filter::by_length(candidates, window).into_iter().collect();
    words.sort();

    if !quiet {
        println!(
            "  {} of {} candidates kept between {} and {} characters",
            words.len().to_string().cyan(),
            total,
            window.min,
            window.max
        );
    }

    let destination = OutputConfig::new(path, name);
    let written =
        output::save_wordlist(&words, &destination).context("Failed to save the wordlist")?;

    println!(
        "{} Wordlist saved to {} in {}",
        "✓".green().bold(),
        written.display().to_string().cyan(),
        HumanDuration(started.elapsed())
    );

    Ok(())
}
