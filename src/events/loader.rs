use crate::events::{LoadMode, LoadedRecords};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read event dump {}", path.display()))?;
    Ok(parse_records(&raw))
}

pub fn parse_records(raw: &str) -> LoadedRecords {
    match serde_json::from_str::<Value>(raw) {
        Ok(doc) => LoadedRecords {
            records: document_records(doc),
            mode: LoadMode::Document,
            skipped: 0,
            document_error: None,
        },
        Err(err) => {
            let mut records = Vec::new();
            let mut skipped = 0;
            for line in raw.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<Value>(line) {
                    Ok(v) => records.push(v),
                    Err(_) => skipped += 1,
                }
            }
            LoadedRecords {
                records,
                mode: LoadMode::Lines,
                skipped,
                document_error: Some(err.to_string()),
            }
        }
    }
}

fn document_records(doc: Value) -> Vec<Value> {
    match doc {
        Value::Array(items) => items,
        Value::Object(_) => vec![doc],
        _ => Vec::new(),
    }
}
