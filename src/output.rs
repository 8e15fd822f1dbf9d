use crate::transcript::{AdaptReport, Fragment};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write the adapted script as a UTF-8 text file and return its resolved path.
pub fn save_script(
    path: &Path,
    text: &str,
) -> Result<PathBuf> {
    std::fs::write(path, text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Listing printed by `--chunks-only`.
pub fn format_fragments(fragments: &[Fragment]) -> String {
    let total = fragments.len();
    let mut s = String::new();
    for f in fragments {
        s.push_str(&format!(
            "--- fragment {}/{} ({} words) ---\n{}\n",
            f.index + 1,
            total,
            f.words,
            f.text
        ));
    }
    s
}

/// One-line outcome for stderr, e.g. "OK 3/3 fragments rewritten".
pub fn format_summary(report: &AdaptReport) -> String {
    if report.has_failures() {
        let failed: Vec<String> = report
            .failures
            .iter()
            .map(|f| (f.index + 1).to_string())
            .collect();
        format!(
            "WARN {} of {} fragments failed (#{}); the script is missing their content",
            report.failures.len(),
            report.fragments,
            failed.join(", #")
        )
    } else {
        format!(
            "OK {}/{} fragments rewritten",
            report.succeeded(),
            report.fragments
        )
    }
}
