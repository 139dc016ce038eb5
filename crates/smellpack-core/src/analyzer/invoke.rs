use std::io::{self, Write};
use std::process::{Command, Output};

use crate::analyzer::launch::LaunchPlan;
use crate::error::{RunError, RunResult};

/// Captured result of one analyzer run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl AnalyzerOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Copy the captured streams to `out` and `err` unchanged.
    pub fn relay(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        if !self.stdout.is_empty() {
            out.write_all(&self.stdout)?;
            out.flush()?;
        }
        if !self.stderr.is_empty() {
            err.write_all(&self.stderr)?;
            err.flush()?;
        }
        Ok(())
    }

    /// Turn a non-zero exit into [`RunError::AnalyzerFailed`].
    pub fn check(&self) -> RunResult<()> {
        if self.success() {
            Ok(())
        } else {
            Err(RunError::AnalyzerFailed { code: self.code })
        }
    }
}

impl From<Output> for AnalyzerOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Run the analyzer to completion and capture both output streams.
///
/// Blocks until the child exits. No timeout is applied.
pub fn invoke(plan: &LaunchPlan) -> RunResult<AnalyzerOutput> {
    let mut command = Command::new(&plan.program);
    command.args(&plan.args);
    if let Some(dir) = &plan.current_dir {
        command.current_dir(dir);
    }

    log::info!(
        "running {} {}",
        plan.program.display(),
        plan.display_args().join(" ")
    );

    let output = command.output().map_err(|source| RunError::Spawn {
        program: plan.program.display().to_string(),
        source,
    })?;

    let output = AnalyzerOutput::from(output);
    log::info!(
        "analyzer exited with {:?} ({} bytes stdout, {} bytes stderr)",
        output.code,
        output.stdout.len(),
        output.stderr.len()
    );
    Ok(output)
}
