pub mod counter;
pub mod loader;
pub mod report;

use serde_json::Value;

pub const DEFAULT_FIELD: &str = "action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Document,
    Lines,
}

impl LoadMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadMode::Document => "document",
            LoadMode::Lines => "lines",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedRecords {
    pub records: Vec<Value>,
    pub mode: LoadMode,
    pub skipped: usize,
    pub document_error: Option<String>,
}
