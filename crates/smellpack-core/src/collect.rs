//! Result file discovery.
//!
//! DesigniteJava writes its CSV reports into the directory given with `-o`,
//! but some builds resolve part of their output relative to the process
//! working directory or the JAR location. Each expected name is therefore
//! probed in a fixed list of candidate directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Expected result files, in archive order.
pub const RESULT_FILES: [&str; 4] = [
    "typeMetrics.csv",
    "methodMetrics.csv",
    "designCodeSmells.csv",
    "implementationCodeSmells.csv",
];

/// Folder name the analyzer falls back to when writing relative to a
/// working directory.
pub const FALLBACK_OUTPUT_DIR: &str = "output";

/// Lookup outcome for one expected result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    pub name: &'static str,
    /// First non-empty candidate, or `None` when the analyzer produced nothing.
    pub source: Option<PathBuf>,
}

/// Candidate directories in probing order:
/// the designated output dir, `output/` under the working directory,
/// then `output/` under the analyzer artifact's parent.
pub fn search_roots(out_dir: &Path, working_dir: &Path, artifact_dir: &Path) -> Vec<PathBuf> {
    vec![
        out_dir.to_path_buf(),
        working_dir.join(FALLBACK_OUTPUT_DIR),
        artifact_dir.join(FALLBACK_OUTPUT_DIR),
    ]
}

/// Resolve each of `names` against `roots`, keeping the first candidate that
/// is a non-empty regular file.
pub fn collect(names: &[&'static str], roots: &[PathBuf]) -> Vec<CollectedFile> {
    names
        .iter()
        .map(|&name| {
            let source = roots
                .iter()
                .map(|root| root.join(name))
                .find(|candidate| is_non_empty_file(candidate));

            match &source {
                Some(path) => log::debug!("{name}: found at {}", path.display()),
                None => log::warn!("{name}: not produced by analyzer, writing empty entry"),
            }

            CollectedFile { name, source }
        })
        .collect()
}

fn is_non_empty_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roots(base: &Path) -> Vec<PathBuf> {
        search_roots(&base.join("out"), &base.join("cwd"), &base.join("jar"))
    }

    #[test]
    fn search_roots_follow_probe_order() {
        let base = Path::new("/scratch");
        assert_eq!(
            roots(base),
            vec![
                PathBuf::from("/scratch/out"),
                PathBuf::from("/scratch/cwd/output"),
                PathBuf::from("/scratch/jar/output"),
            ]
        );
    }

    #[test]
    fn prefers_designated_output_dir() {
        let base = TempDir::new().unwrap();
        let roots = roots(base.path());
        for root in &roots {
            fs::create_dir_all(root).unwrap();
            fs::write(root.join("typeMetrics.csv"), b"x").unwrap();
        }

        let found = collect(&["typeMetrics.csv"], &roots);

        assert_eq!(found[0].source, Some(roots[0].join("typeMetrics.csv")));
    }

    #[test]
    fn skips_empty_candidates() {
        let base = TempDir::new().unwrap();
        let roots = roots(base.path());
        for root in &roots {
            fs::create_dir_all(root).unwrap();
        }
        fs::write(roots[0].join("methodMetrics.csv"), b"").unwrap();
        fs::write(roots[2].join("methodMetrics.csv"), b"m,loc\n").unwrap();

        let found = collect(&["methodMetrics.csv"], &roots);

        assert_eq!(found[0].source, Some(roots[2].join("methodMetrics.csv")));
    }

    #[test]
    fn directories_are_not_results() {
        let base = TempDir::new().unwrap();
        let roots = roots(base.path());
        fs::create_dir_all(roots[0].join("designCodeSmells.csv")).unwrap();

        let found = collect(&["designCodeSmells.csv"], &roots);

        assert_eq!(found[0].source, None);
    }

    #[test]
    fn reports_every_name_in_order() {
        let base = TempDir::new().unwrap();
        let roots = roots(base.path());
        fs::create_dir_all(&roots[1]).unwrap();
        fs::write(roots[1].join("implementationCodeSmells.csv"), b"i\n").unwrap();

        let found = collect(&RESULT_FILES, &roots);

        let names: Vec<&str> = found.iter().map(|f| f.name).collect();
        assert_eq!(names, RESULT_FILES);
        assert!(found[..3].iter().all(|f| f.source.is_none()));
        assert_eq!(
            found[3].source,
            Some(roots[1].join("implementationCodeSmells.csv"))
        );
    }
}
