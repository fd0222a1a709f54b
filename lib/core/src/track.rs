//! Typed view over the track fields a caller usually displays.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TAG_GROUPS: [&str; 3] = ["genres", "instruments", "vartags"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TrackSummary {
    /// Never fails; absent or mistyped fields are left empty.
    pub fn from_record(record: &Record) -> Self {
        let id = record.get("id").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        let cover = non_empty(record, "image").or_else(|| non_empty(record, "album_image"));

        let tags = TAG_GROUPS
            .iter()
            .filter_map(|group| record.get_path(&["musicinfo", "tags", *group]))
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();

        Self {
            id,
            name: record.str_field("name").map(str::to_string),
            artist_name: record.str_field("artist_name").map(str::to_string),
            duration: record.get("duration").and_then(Value::as_u64),
            audio: non_empty(record, "audio"),
            cover,
            tags,
        }
    }
}

fn non_empty(record: &Record, field: &str) -> Option<String> {
    record
        .str_field(field)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_track() {
        let record = Record::from(json!({
            "id": 1532771,
            "name": "Rainy Window",
            "artist_name": "Lo Cat",
            "duration": 184,
            "audio": "https://stream/1532771",
            "image": "",
            "album_image": "https://img/album.jpg",
            "musicinfo": {
                "tags": {
                    "genres": ["lofi", "chillhop"],
                    "instruments": ["piano"],
                    "vartags": ["calm"]
                }
            }
        }));

        let summary = TrackSummary::from_record(&record);
        assert_eq!(summary.id.as_deref(), Some("1532771"));
        assert_eq!(summary.name.as_deref(), Some("Rainy Window"));
        assert_eq!(summary.artist_name.as_deref(), Some("Lo Cat"));
        assert_eq!(summary.duration, Some(184));
        assert_eq!(summary.cover.as_deref(), Some("https://img/album.jpg"));
        assert_eq!(summary.tags, vec!["lofi", "chillhop", "piano", "calm"]);
    }

    #[test]
    fn test_sparse_track() {
        let record = Record::from(json!({
            "id": "abc",
            "duration": "three minutes",
            "musicinfo": { "tags": { "genres": "lofi" } }
        }));

        let summary = TrackSummary::from_record(&record);
        assert_eq!(summary.id.as_deref(), Some("abc"));
        assert_eq!(summary.duration, None);
        assert!(summary.tags.is_empty());
        assert!(summary.cover.is_none());
    }

    #[test]
    fn test_empty_fields_skipped_in_json() {
        let summary = TrackSummary::from_record(&Record::default());
        assert_eq!(serde_json::to_value(&summary).unwrap(), json!({}));
    }
}
