pub mod analyzer;
pub mod archive;
pub mod collect;
pub mod error;
pub mod report;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analyzer::{AnalyzerSpec, LaunchPlan};
use crate::collect::RESULT_FILES;
use crate::error::{RunError, RunResult};
use crate::report::model::{AnalyzerInfo, RunSummary, ToolInfo};

pub const TOOL_NAME: &str = "smellpack";

/// JSON schema version of run summaries.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Zipped source tree to analyze.
    pub input_archive: PathBuf,

    /// Destination of the repackaged results.
    pub report_archive: PathBuf,

    /// DesigniteJava JAR, or an executable launcher.
    pub analyzer: PathBuf,

    /// Java runtime for JAR artifacts; `None` uses [`analyzer::default_java`].
    pub java: Option<PathBuf>,

    pub pin_working_dir: bool,

    /// Directory probed for a fallback `output/` folder; `None` uses the
    /// process working directory.
    pub working_dir: Option<PathBuf>,

    pub tool: ToolInfo,
}

/// Run the whole pipeline: extract, locate, analyze, collect, package.
///
/// The scratch workspace lives in a temporary directory removed on every
/// exit path. The analyzer's captured output is relayed to this process's
/// stdout and stderr before its exit status is checked, and nothing is
/// written to `report_archive` unless the analyzer succeeded.
pub fn run(config: &RunConfig) -> RunResult<RunSummary> {
    if !config.input_archive.exists() {
        return Err(RunError::MissingInput(config.input_archive.clone()));
    }
    if !config.analyzer.exists() {
        return Err(RunError::MissingAnalyzer(config.analyzer.clone()));
    }

    let artifact = fs::canonicalize(&config.analyzer).map_err(|e| {
        RunError::io(
            format!("failed to resolve {}", config.analyzer.display()),
            e,
        )
    })?;
    let spec = AnalyzerSpec {
        artifact,
        java: config.java.clone().unwrap_or_else(analyzer::default_java),
        pin_working_dir: config.pin_working_dir,
    };

    let scratch = tempfile::Builder::new()
        .prefix("smellpack-")
        .tempdir()
        .map_err(|e| RunError::io("failed to create scratch directory", e))?;
    let src_dir = make_dir(scratch.path(), "src")?;
    let out_dir = make_dir(scratch.path(), "out")?;

    archive::extract_zip(&config.input_archive, &src_dir)?;
    let input_dir = archive::pick_input_dir(&src_dir)?;

    let plan = LaunchPlan::new(&spec, &input_dir, &out_dir);
    let output = analyzer::invoke(&plan)?;
    output
        .relay(&mut io::stdout().lock(), &mut io::stderr().lock())
        .map_err(|e| RunError::io("failed to relay analyzer output", e))?;
    output.check()?;

    let working_dir = match &config.working_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| RunError::io("failed to read working directory", e))?,
    };
    let roots = collect::search_roots(&out_dir, &working_dir, spec.artifact_dir());
    let collected = collect::collect(&RESULT_FILES, &roots);

    let entries = archive::package(&collected, &config.report_archive)?;

    let input = report::input::describe_input(
        &config.input_archive,
        report::input::relative_dir(&src_dir, &input_dir),
    )?;
    let analyzer = AnalyzerInfo {
        artifact: spec.artifact.display().to_string(),
        program: plan.program.display().to_string(),
        args: plan.display_args(),
        exit_code: output.code,
    };

    Ok(RunSummary::new(config.tool.clone(), input, analyzer, entries))
}

fn make_dir(parent: &Path, name: &str) -> RunResult<PathBuf> {
    let dir = parent.join(name);
    fs::create_dir(&dir)
        .map_err(|e| RunError::io(format!("failed to create {}", dir.display()), e))?;
    Ok(dir)
}
