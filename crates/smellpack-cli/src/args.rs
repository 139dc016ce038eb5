use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "smellpack",
    version,
    about = "Run DesigniteJava on a zipped source tree and package its CSV reports"
)]
pub struct Args {
    /// Zip archive containing the source tree to analyze
    pub src_zip: PathBuf,

    /// Destination zip for the collected reports
    pub report_zip: PathBuf,

    /// DesigniteJava JAR (or an executable launcher)
    pub analyzer: PathBuf,

    /// Java runtime used for JAR analyzers [default: $JAVA_HOME/bin/java, else java]
    #[arg(long)]
    pub java: Option<PathBuf>,

    /// Run the analyzer from its own directory (sets -Duser.dir for JARs)
    #[arg(long)]
    pub pin_working_dir: bool,

    /// Write a run summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Summary format
    #[arg(long, default_value = "json")]
    pub format: SummaryFormat,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum SummaryFormat {
    Json,
    Text,
}
