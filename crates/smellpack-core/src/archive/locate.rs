use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RunError, RunResult};

/// Pick the directory the analyzer should run on.
///
/// Archives commonly wrap their sources in a single named folder
/// (`proj-1.0/...`). When exactly one first-level entry of `root` is a
/// directory, that directory is returned; otherwise `root` itself.
/// First-level regular files and symlinks do not count, and nothing deeper
/// is inspected, so the result always lies inside `root`.
pub fn pick_input_dir(root: &Path) -> RunResult<PathBuf> {
    let entries = fs::read_dir(root)
        .map_err(|e| RunError::io(format!("failed to list {}", root.display()), e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| RunError::io(format!("failed to list {}", root.display()), e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| RunError::io(format!("failed to inspect {}", entry.path().display()), e))?;
        if file_type.is_dir() {
            dirs.push(entry.path());
        }
    }

    match <[PathBuf; 1]>::try_from(dirs) {
        Ok([single]) => {
            log::info!("descending into wrapper folder {}", single.display());
            Ok(single)
        }
        Err(dirs) => {
            log::debug!(
                "{} first-level directories, analyzing extraction root",
                dirs.len()
            );
            Ok(root.to_path_buf())
        }
    }
}
