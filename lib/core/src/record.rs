use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single search result as returned by the upstream API.
///
/// Records are read-only: the ranking core only ever looks values up through
/// the typed accessors below, each of which answers `None` when the field is
/// absent or has an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from any JSON value.
    /// Anything other than an object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Numeric value strictly greater than zero.
    ///
    /// Booleans and numeric strings are not numbers here.
    pub fn positive_number(&self, name: &str) -> Option<f64> {
        self.get(name)
            .filter(|v| v.is_number())
            .and_then(Value::as_f64)
            .filter(|n| *n > 0.0)
    }

    /// Integer value strictly greater than zero. `3.0` is not an integer.
    pub fn positive_integer(&self, name: &str) -> Option<i64> {
        self.get(name)
            .and_then(Value::as_i64)
            .filter(|n| *n > 0)
    }

    /// Year prefix of a `YYYY[-MM[-DD]]` date string.
    pub fn parsed_year(&self, name: &str) -> Option<i64> {
        let text = self.str_field(name)?;
        let year = text.split('-').next()?.trim();
        year.parse::<i64>().ok()
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Walk nested objects, e.g. `["musicinfo", "tags", "genres"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = current.get(key)?;
        }
        Some(current)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
