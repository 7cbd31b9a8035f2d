//! Wordlist persistence.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use wordforge_types::{bail, OutputConfig, Result, WordforgeError};

/// Write a wordlist to `<dir>/<name>_clear.txt`, one word per line.
///
/// Creates the destination directory if absent and overwrites any existing
/// file. Words are written in the order given; callers sort beforehand.
/// Returns the path written.
pub fn save_wordlist(words: &[String], config: &OutputConfig) -> Result<PathBuf> {
    if config.name.trim().is_empty() {
        bail!(Validation, "Output name must not be blank");
    }

    fs::create_dir_all(&config.dir).map_err(|e| {
        WordforgeError::Output(format!(
            "Failed to create output directory {}: {}",
            config.dir.display(),
            e
        ))
    })?;

    let path = config.file_path();
    let file = File::create(&path).map_err(|e| {
        WordforgeError::Output(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()?;

    info!("Wrote {} candidates to {}", words.len(), path.display());
    Ok(path)
}
