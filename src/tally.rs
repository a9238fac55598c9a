use crate::config::{self, TallyConfig};
use crate::events::counter::EventCounts;
use crate::events::{DEFAULT_FIELD, LoadMode, loader, report};
use crate::logging::ndjson;
use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "events_dump.json";

#[derive(Debug, Clone)]
pub struct TallyCommand {
    pub input: Option<PathBuf>,
    pub field: Option<String>,
    pub config: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct TallySummary {
    pub input: PathBuf,
    pub field: String,
    pub mode: LoadMode,
    pub records: usize,
    pub skipped: usize,
    pub document_error: Option<String>,
    pub counts: EventCounts,
}

pub fn execute_tally(cmd: TallyCommand) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_tally(&cmd, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run_tally<W: Write>(cmd: &TallyCommand, out: &mut W) -> Result<TallySummary> {
    let cfg = match cmd.config.as_deref() {
        Some(path) => Some(config::load_config(path)?),
        None => config::load_default_config(Path::new("."))?,
    };
    let (input, field) = resolve(cmd, cfg.as_ref());

    let summary = tally_file(&input, &field)?;
    if let Some(err) = summary.document_error.as_deref() {
        eprintln!("Error decoding JSON: {err}");
    }
    report::write_counts(&summary.counts, &mut *out)?;

    if let Some(path) = cmd.log.as_deref() {
        ndjson::mirror_summary(path, &summary)?;
    }
    Ok(summary)
}

pub fn tally_file(input: &Path, field: &str) -> Result<TallySummary> {
    let loaded = loader::load_records(input)?;
    let counts = EventCounts::tally(&loaded.records, field);
    Ok(TallySummary {
        input: input.to_path_buf(),
        field: field.to_string(),
        mode: loaded.mode,
        records: loaded.records.len(),
        skipped: loaded.skipped,
        document_error: loaded.document_error,
        counts,
    })
}

fn resolve(cmd: &TallyCommand, cfg: Option<&TallyConfig>) -> (PathBuf, String) {
    let input = cmd
        .input
        .clone()
        .or_else(|| cfg.and_then(|c| c.input_path()).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let field = cmd
        .field
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .or_else(|| cfg.and_then(|c| c.field()))
        .unwrap_or(DEFAULT_FIELD)
        .to_string();
    (input, field)
}
