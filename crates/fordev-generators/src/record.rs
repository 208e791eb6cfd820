//! Generated output records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// One output value.
///
/// Values keep the site's formatting (punctuation, decimal commas,
/// `DD/MM/YYYY` dates); only fields declared as integers are converted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Formatted text
    Text(String),
    /// Integer field (age, house number, weight)
    Integer(i64),
}

impl FieldValue {
    /// Text content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    /// Integer content, if this is an integer field.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

/// One generated entity: field names mapped to values, in the order the
/// operation documents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedRecord {
    fields: Vec<(String, FieldValue)>,
}

impl GeneratedRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Shorthand for a text field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Shorthand for an integer field.
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for GeneratedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Output of one operation: a single record or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Generated {
    /// Single-entity operations
    One(GeneratedRecord),
    /// Multi-entity operations, in response order
    Many(Vec<GeneratedRecord>),
}

impl Generated {
    /// Number of records carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a list of records.
    #[must_use]
    pub fn into_records(self) -> Vec<GeneratedRecord> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}
