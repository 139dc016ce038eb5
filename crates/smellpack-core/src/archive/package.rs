use std::fs;
use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;

use crate::collect::CollectedFile;
use crate::error::{RunError, RunResult};
use crate::report::model::EntryInfo;

/// Entry options shared by every archive member.
///
/// The fixed timestamp and mode keep archives byte-identical across runs
/// with identical inputs.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o644)
}

/// Write one archive entry per collected file into `dest`.
///
/// Located files are copied verbatim; missing ones become zero-length
/// entries, so the archive always holds the complete name set in order.
/// The archive is assembled next to `dest` and only renamed into place once
/// finished.
pub fn package(files: &[CollectedFile], dest: &Path) -> RunResult<Vec<EntryInfo>> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|e| RunError::io(format!("failed to create {}", parent.display()), e))?;

    let tmp = NamedTempFile::new_in(parent)
        .map_err(|e| RunError::io(format!("failed to create temp file in {}", parent.display()), e))?;

    let zip_err = |source| RunError::Package {
        path: dest.to_path_buf(),
        source,
    };

    let mut writer = zip::ZipWriter::new(tmp.as_file());
    let mut entries = Vec::with_capacity(files.len());

    for file in files {
        let bytes = match &file.source {
            Some(path) => fs::read(path)
                .map_err(|e| RunError::io(format!("failed to read {}", path.display()), e))?,
            None => Vec::new(),
        };

        writer.start_file(file.name, entry_options()).map_err(zip_err)?;
        writer
            .write_all(&bytes)
            .map_err(|e| RunError::io(format!("failed to write entry {}", file.name), e))?;

        entries.push(EntryInfo {
            name: file.name.to_string(),
            source: file.source.as_ref().map(|p| p.display().to_string()),
            size_bytes: bytes.len() as u64,
            sha256: hex::encode(Sha256::digest(&bytes)),
            placeholder: file.source.is_none(),
        });
    }

    writer.finish().map_err(zip_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| RunError::io(format!("failed to set permissions on {}", dest.display()), e))?;
    }

    tmp.persist(dest)
        .map_err(|e| RunError::io(format!("failed to persist {}", dest.display()), e.error))?;

    log::info!("wrote {} entries to {}", entries.len(), dest.display());
    Ok(entries)
}
