use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a run.
///
/// Each variant maps to a process exit code through [`RunError::exit_code`].
/// Missing result files are not errors; they become placeholder entries.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("input archive not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("analyzer artifact not found: {}", .0.display())]
    MissingAnalyzer(PathBuf),

    #[error("invalid zip archive {}: {source}", .path.display())]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to launch analyzer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// `code` is `None` when the child was terminated by a signal.
    #[error("analyzer failed with {}", describe_code(.code))]
    AnalyzerFailed { code: Option<i32> },

    #[error("failed to write report archive {}: {source}", .path.display())]
    Package {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    ///
    /// A failing analyzer propagates its own code verbatim; every other
    /// fatal condition exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::AnalyzerFailed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_failure_propagates_exit_code() {
        let err = RunError::AnalyzerFailed { code: Some(3) };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "analyzer failed with exit code 3");
    }

    #[test]
    fn signalled_analyzer_exits_1() {
        let err = RunError::AnalyzerFailed { code: None };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn local_failures_exit_1() {
        let missing = RunError::MissingInput(PathBuf::from("proj.zip"));
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(missing.to_string(), "input archive not found: proj.zip");

        let invalid = RunError::InvalidArchive {
            path: PathBuf::from("bad.zip"),
            source: zip::result::ZipError::InvalidArchive("no central directory".into()),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert!(invalid.to_string().starts_with("invalid zip archive bad.zip"));

        let io = RunError::io("reading x", io::Error::other("boom"));
        assert_eq!(io.exit_code(), 1);
        assert_eq!(io.to_string(), "reading x: boom");
    }
}
