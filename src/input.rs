//! Decoding of upstream search responses into records.

use jamrank_core::{AvailabilityFilter, Error, Filter, RankConfig, Record, Result};
use serde_json::Value;
use tracing::debug;

/// Accepts either a bare JSON array of records or the API envelope
/// `{"results": [...]}`. Array elements that are not objects become empty
/// records so that positions are preserved.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;
    records_from_value(value)
}

pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Error::InvalidInput(
                    "\"results\" must be an array".to_string(),
                ))
            }
            None => {
                return Err(Error::InvalidInput(
                    "expected an array of records or an object with \"results\"".to_string(),
                ))
            }
        },
        _ => {
            return Err(Error::InvalidInput(
                "expected an array of records or an object with \"results\"".to_string(),
            ))
        }
    };

    Ok(items.into_iter().map(Record::from_value).collect())
}

/// Drop tracks that cannot be streamed and downloaded when
/// `config.filter_available` is set. Runs before ranking, so positions and
/// diagnostics refer to the records that survive.
pub fn filter_available(config: &RankConfig, records: Vec<Record>) -> Vec<Record> {
    if !config.filter_available {
        return records;
    }
    let before = records.len();
    let kept = AvailabilityFilter::new().apply(records);
    debug!(before, after = kept.len(), "availability filter applied");
    kept
}
