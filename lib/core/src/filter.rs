// Record filters applied before scoring
use crate::record::Record;

pub trait Filter {
    fn matches(&self, record: &Record) -> bool;

    /// Keep matching records, preserving their relative order.
    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Keeps tracks that can be both streamed and downloaded:
/// `audiodownload_allowed` is true and `audiodownload` and `audio` are
/// non-empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityFilter;

impl AvailabilityFilter {
    pub fn new() -> Self {
        Self
    }

    fn non_empty(record: &Record, field: &str) -> bool {
        record
            .str_field(field)
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }
}

impl Filter for AvailabilityFilter {
    fn matches(&self, record: &Record) -> bool {
        record.bool_field("audiodownload_allowed").unwrap_or(false)
            && Self::non_empty(record, "audiodownload")
            && Self::non_empty(record, "audio")
    }
}
