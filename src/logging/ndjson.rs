use crate::tally::TallySummary;
use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn mirror_summary(path: &Path, summary: &TallySummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    let line = json!({
        "ts": Utc::now().to_rfc3339(),
        "event": "tally_completed",
        "input": summary.input.display().to_string(),
        "field": summary.field,
        "mode": summary.mode.as_str(),
        "records": summary.records,
        "skipped": summary.skipped,
        "distinct": summary.counts.len(),
        "total": summary.counts.total()
    });
    writeln!(f, "{}", line)?;
    Ok(())
}
