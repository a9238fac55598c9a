use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCounts {
    counts: BTreeMap<String, u64>,
}

impl EventCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally<'a>(records: impl IntoIterator<Item = &'a Value>, field: &str) -> Self {
        let mut counts = Self::new();
        for record in records {
            counts.record(record, field);
        }
        counts
    }

    pub fn record(&mut self, record: &Value, field: &str) {
        if let Some(name) = record
            .get(field)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
        {
            *self.counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
