use crate::ReleaseResult;

use std::{fs, path::Path};

use tracing::debug;

/// Placeholder that keeps the otherwise empty output directory tracked.
pub const SENTINEL_FILE: &str = ".gitkeep";

/// Delete everything under `dir` except the sentinel file.
///
/// Returns the number of removed entries. A missing directory is treated as
/// already clean.
pub fn clean_output_dir(dir: &Path) -> ReleaseResult<usize> {
    if !dir.exists() {
        debug!(dir = ?dir, "Output directory does not exist");
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name() == SENTINEL_FILE {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        debug!(path = ?path, "Removed");
        removed += 1;
    }

    Ok(removed)
}
