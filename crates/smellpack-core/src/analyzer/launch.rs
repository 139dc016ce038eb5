use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// How the analyzer artifact should be started.
#[derive(Debug, Clone)]
pub struct AnalyzerSpec {
    /// Canonical path to the analyzer artifact.
    pub artifact: PathBuf,

    /// Java runtime used when the artifact is a JAR.
    pub java: PathBuf,

    /// Run the analyzer from the artifact's directory so its relative log
    /// and output paths land next to the artifact.
    pub pin_working_dir: bool,
}

impl AnalyzerSpec {
    /// Directory containing the artifact.
    pub fn artifact_dir(&self) -> &Path {
        self.artifact.parent().unwrap_or(Path::new("."))
    }

    pub fn is_jar(&self) -> bool {
        self.artifact
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
    }
}

/// Fully resolved child-process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl LaunchPlan {
    /// Build the command for analyzing `input_dir` into `output_dir`.
    ///
    /// JARs run as `java [-Duser.dir=<dir>] -jar <artifact> -i <in> -o <out>`;
    /// anything else is executed directly with `-i <in> -o <out>`.
    pub fn new(spec: &AnalyzerSpec, input_dir: &Path, output_dir: &Path) -> Self {
        let mut args: Vec<OsString> = Vec::new();

        let program = if spec.is_jar() {
            if spec.pin_working_dir {
                let mut prop = OsString::from("-Duser.dir=");
                prop.push(spec.artifact_dir());
                args.push(prop);
            }
            args.push("-jar".into());
            args.push(spec.artifact.clone().into_os_string());
            spec.java.clone()
        } else {
            spec.artifact.clone()
        };

        args.push("-i".into());
        args.push(input_dir.as_os_str().to_owned());
        args.push("-o".into());
        args.push(output_dir.as_os_str().to_owned());

        Self {
            program,
            args,
            current_dir: spec
                .pin_working_dir
                .then(|| spec.artifact_dir().to_path_buf()),
        }
    }

    /// Printable form of the command line, for logs and summaries.
    pub fn display_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Java runtime to use when none is given explicitly:
/// `$JAVA_HOME/bin/java` if `JAVA_HOME` is set, else `java` from `PATH`.
pub fn default_java() -> PathBuf {
    java_from_home(env::var_os("JAVA_HOME"))
}

fn java_from_home(java_home: Option<OsString>) -> PathBuf {
    let exe = format!("java{}", env::consts::EXE_SUFFIX);
    match java_home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join("bin").join(exe),
        _ => PathBuf::from(exe),
    }
}
