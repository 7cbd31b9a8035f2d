//! Describe the intensity levels.

use anyhow::Result;
use colored::Colorize;

use wordforge_types::Intensity;

pub fn execute() -> Result<()> {
    println!("{} intensity levels:", "Available".green().bold());

    let levels = [
        (
            Intensity::Basic,
            "-1",
            "Plain word forms: casing variants, reversal, starter suffixes",
        ),
        (
            Intensity::Standard,
            "-2",
            "Numeric suffixes and prefixes, bracket wrapping, seed pairs",
        ),
        (
            Intensity::Advanced,
            "-3",
            "Leet speak plus symbol and year mutations",
        ),
        (
            Intensity::Max,
            "-m, --max",
            "Everything, plus permutations and substring mixing",
        ),
    ];

    for (level, flags, summary) in levels {
        let window = level.window();
        println!();
        println!(
            "{} ({})",
            format!("Level {}", level.as_number()).cyan().bold(),
            flags
        );
        println!("  {}", summary);
        println!(
            "  Keeps candidates of {} to {} characters",
            window.min, window.max
        );
    }

    println!();
    println!("Level 4 is the default when no flag is given.");

    Ok(())
}
