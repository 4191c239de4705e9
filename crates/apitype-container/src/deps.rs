//! Dependency-list ingestion.
//!
//! Build tooling hands over a text file listing dependency archives, one
//! entry per line. Lines come in two shapes: an absolute path to an archive,
//! or a colon-delimited record (group:artifact:jar:version:path) whose final
//! segment is such a path. Everything else is discarded silently.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extract the archive paths from a dependency-list file.
///
/// A line is recognized only when it contains the substring `"jar"` and
/// either the whole trimmed line, or the trimmed final colon-delimited
/// segment, is an absolute path to an existing regular file. Unrecognized
/// lines are skipped without error.
pub fn scan_dependency_list<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dependency list {}", path.display()))?;

    let mut archives = Vec::new();
    for line in text.lines() {
        match archive_from_line(line) {
            Some(archive) => archives.push(archive),
            None => {
                if !line.trim().is_empty() {
                    debug!(line, "discarding unrecognized dependency-list line");
                }
            }
        }
    }
    Ok(archives)
}

/// The archive path carried by one dependency-list line, if any.
pub fn archive_from_line(line: &str) -> Option<PathBuf> {
    if !line.contains("jar") {
        return None;
    }
    let trimmed = line.trim();
    if let Some(path) = existing_absolute_file(trimmed) {
        return Some(path);
    }
    // Colon-delimited record: the path is the final segment.
    let last = trimmed.rsplit(':').next()?;
    existing_absolute_file(last.trim())
}

fn existing_absolute_file(candidate: &str) -> Option<PathBuf> {
    let path = Path::new(candidate);
    if path.is_absolute() && path.is_file() {
        Some(path.to_path_buf())
    } else {
        None
    }
}
