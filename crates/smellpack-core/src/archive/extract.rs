use std::fs;
use std::path::Path;

use crate::error::{RunError, RunResult};

/// Extract every entry of the zip at `archive_path` into `dest`.
///
/// `dest` must already exist. Any zip-level failure (bad signature,
/// truncated central directory, entry names escaping `dest`) is reported
/// as [`RunError::InvalidArchive`] so the caller can abort before the
/// analyzer runs.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> RunResult<usize> {
    let file = fs::File::open(archive_path)
        .map_err(|e| RunError::io(format!("failed to open {}", archive_path.display()), e))?;

    let invalid = |source| RunError::InvalidArchive {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut archive = zip::ZipArchive::new(file).map_err(invalid)?;
    let entries = archive.len();
    archive.extract(dest).map_err(invalid)?;

    log::info!(
        "extracted {entries} entries from {} into {}",
        archive_path.display(),
        dest.display()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
        let zip_path = dir.join(name);
        let file = fs::File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        for (entry_name, content) in files {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        zip_path
    }

    #[test]
    fn extracts_nested_entries() {
        let dir = TempDir::new().unwrap();
        let zip_path = write_zip(
            dir.path(),
            "proj.zip",
            &[
                ("proj-1.0/src/Main.java", b"class Main {}"),
                ("proj-1.0/README", b"readme"),
            ],
        );
        let dest = dir.path().join("src");
        fs::create_dir(&dest).unwrap();

        let count = extract_zip(&zip_path, &dest).expect("extraction succeeds");

        assert_eq!(count, 2);
        assert_eq!(
            fs::read(dest.join("proj-1.0/src/Main.java")).unwrap(),
            b"class Main {}"
        );
        assert!(dest.join("proj-1.0/README").is_file());
    }

    #[test]
    fn corrupt_archive_is_invalid() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("bad.zip");
        fs::write(&zip_path, b"this is not a zip file").unwrap();
        let dest = dir.path().join("src");
        fs::create_dir(&dest).unwrap();

        let err = extract_zip(&zip_path, &dest).unwrap_err();

        assert!(matches!(err, RunError::InvalidArchive { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_archive_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = extract_zip(&dir.path().join("absent.zip"), dir.path()).unwrap_err();

        assert!(matches!(err, RunError::Io { .. }));
    }

    #[test]
    fn empty_archive_extracts_nothing() {
        let dir = TempDir::new().unwrap();
        let zip_path = write_zip(dir.path(), "empty.zip", &[]);
        let dest = dir.path().join("src");
        fs::create_dir(&dest).unwrap();

        assert_eq!(extract_zip(&zip_path, &dest).unwrap(), 0);
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }
}
