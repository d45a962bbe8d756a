//! Glob pattern resolution for input files

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::CliError;

/// Resolve file paths and glob patterns into a deduplicated file list
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        let entries =
            glob::glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let mut matched = false;
        for entry in entries {
            let resolved = entry.map_err(|e| CliError::InvalidPattern(e.to_string()))?;
            if resolved.is_file() {
                files.push(resolved);
                matched = true;
            }
        }
        if !matched {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
