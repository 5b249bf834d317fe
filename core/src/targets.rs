//! Loads the destination list for a sweep.

use std::fs;
use std::path::Path;

use vlansweep_common::error::TargetError;

/// Reads one target per line, in file order, duplicates kept.
///
/// A line is dropped iff it is the empty string or starts with `#`. The
/// emptiness check is deliberately strict: a line of only whitespace is kept
/// verbatim and will simply fail its probes. Changing that would silently
/// alter results operators compare across runs.
pub fn load(path: &Path) -> Result<Vec<String>, TargetError> {
    if !path.is_file() {
        return Err(TargetError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| TargetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let targets: Vec<String> = content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if targets.is_empty() {
        return Err(TargetError::Empty(path.to_path_buf()));
    }

    Ok(targets)
}
