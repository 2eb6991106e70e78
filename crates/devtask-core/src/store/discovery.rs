//! Project data directory discovery.

use std::path::{Path, PathBuf};

use super::DATA_DIR;

/// Locates an existing data directory by walking upward from `start`.
///
/// Every ancestor of `start`, the filesystem root included, is checked
/// for a `.devtask` directory. Returns `None` when no ancestor carries
/// one; callers then decide where a fresh directory should live.
pub fn find_data_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(DATA_DIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
