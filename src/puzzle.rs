use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a puzzle input file into memory.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_puzzle(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found at {}", path.display());
    }

    let input = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file at {}", path.display()))?;

    log::debug!("Read {} bytes from {}", input.len(), path.display());
    Ok(input)
}
