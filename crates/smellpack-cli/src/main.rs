use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use smellpack_core::report::{model::RunSummary, model::ToolInfo, render};
use smellpack_core::{RunConfig, TOOL_NAME, run};

mod args;

fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logger(args.verbose);

    let config = RunConfig {
        input_archive: args.src_zip.clone(),
        report_archive: args.report_zip.clone(),
        analyzer: args.analyzer.clone(),
        java: args.java.clone(),
        pin_working_dir: args.pin_working_dir,
        working_dir: None,
        tool: ToolInfo {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            return exit_code(err.exit_code());
        }
    };

    if let Some(path) = &args.summary
        && let Err(err) = write_summary(&summary, &args.format, path)
    {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logger(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn write_summary(summary: &RunSummary, format: &args::SummaryFormat, path: &Path) -> Result<()> {
    let output = match format {
        args::SummaryFormat::Json => render::render_json(summary)?,
        args::SummaryFormat::Text => render::render_text(summary),
    };
    std::fs::write(path, output)
        .with_context(|| format!("failed to write summary {}", path.display()))?;
    log::info!("summary written to {}", path.display());
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    // Codes outside 1..=255 cannot be expressed by a process exit status.
    match u8::try_from(code) {
        Ok(code) if code != 0 => ExitCode::from(code),
        _ => ExitCode::FAILURE,
    }
}
