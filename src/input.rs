use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Reads `path` and returns its trimmed lines. Interior blank lines are kept,
/// day 4 uses them as board separators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "loaded input");
    Ok(split_lines(&content))
}

pub fn split_lines(content: &str) -> Vec<String> {
    content.trim().lines().map(|line| line.trim().to_string()).collect()
}
