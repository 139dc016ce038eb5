use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{RunError, RunResult};
use crate::report::model::{ArchiveHash, InputInfo};

/// Fingerprint the source archive.
///
/// The hash depends only on the file bytes; timestamps and permissions are
/// ignored.
pub fn describe_input(path: &Path, analyzed_dir: String) -> RunResult<InputInfo> {
    let read_err = |e| RunError::io(format!("failed to read {}", path.display()), e);

    let mut file = fs::File::open(path).map_err(read_err)?;
    let mut hasher = Sha256::new();
    let size_bytes = io::copy(&mut file, &mut hasher).map_err(read_err)?;

    Ok(InputInfo {
        path: path.display().to_string(),
        size_bytes,
        hash: ArchiveHash {
            algorithm: "sha256".to_string(),
            value: hex::encode(hasher.finalize()),
        },
        analyzed_dir,
    })
}

/// Express `dir` relative to `root`, using `"."` for the root itself.
pub fn relative_dir(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}
