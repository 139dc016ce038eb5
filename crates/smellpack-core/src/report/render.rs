use crate::report::model::RunSummary;

pub fn render_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", summary.tool.name, summary.tool.version));
    out.push_str(&format!(
        "Input: {} ({} bytes, analyzed dir {})\n",
        summary.input.path, summary.input.size_bytes, summary.input.analyzed_dir
    ));
    let exit = summary
        .analyzer
        .exit_code
        .map_or_else(|| "none".to_string(), |c| c.to_string());
    out.push_str(&format!("Analyzer exit code: {exit}\n"));
    out.push_str("Entries:\n");
    for e in &summary.entries {
        let marker = if e.placeholder { " (placeholder)" } else { "" };
        out.push_str(&format!("  - {} {} bytes{marker}\n", e.name, e.size_bytes));
    }
    out
}

pub fn render_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
