//! Show version information.

use anyhow::Result;
use colored::Colorize;

pub fn execute(verbose: bool) -> Result<()> {
    println!("{} {}", "Wordforge".cyan().bold(), env!("CARGO_PKG_VERSION"));

    if verbose {
        println!("\nBuild Information:");
        println!("  Version: {}", env!("CARGO_PKG_VERSION"));
        println!("  Engine: {}", wordforge_core::VERSION);
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
    }

    Ok(())
}
