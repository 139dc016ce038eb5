use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;

/// Machine-readable record of a successful run.
///
/// Entry order follows the fixed result-file list and hashes depend only on
/// file bytes, so identical inputs yield identical summaries apart from
/// paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub analyzer: AnalyzerInfo,
    pub entries: Vec<EntryInfo>,
}

impl RunSummary {
    pub fn new(
        tool: ToolInfo,
        input: InputInfo,
        analyzer: AnalyzerInfo,
        entries: Vec<EntryInfo>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            input,
            analyzer,
            entries,
        }
    }

    /// Number of entries written as empty placeholders.
    pub fn placeholder_count(&self) -> usize {
        self.entries.iter().filter(|e| e.placeholder).count()
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// The source archive that was analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    pub path: String,
    pub size_bytes: u64,
    pub hash: ArchiveHash,
    /// Analyzed directory relative to the extraction root; `"."` for the root.
    pub analyzed_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveHash {
    pub algorithm: String,
    pub value: String,
}

/// How the analyzer was launched and how it exited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerInfo {
    pub artifact: String,
    pub program: String,
    pub args: Vec<String>,
    pub exit_code: Option<i32>,
}

/// One member of the output archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    /// Where the content was found; `None` for placeholders.
    pub source: Option<String>,
    pub size_bytes: u64,
    pub sha256: String,
    pub placeholder: bool,
}
