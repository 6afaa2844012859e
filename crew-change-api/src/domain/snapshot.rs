use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// # Documentation
/// - Baseline values of a record, keyed by field path.
/// - Paths are flat strings; nested records are flattened into dotted paths
///   (`engine.serial`) by [`OriginalSnapshot::from_record`]. A plain field name
///   is simply a path without nesting.
/// - A snapshot is set once per modify-mode session and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginalSnapshot(BTreeMap<String, Value>);

impl OriginalSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a record, flattening nested objects into dotted paths.
    ///
    /// Arrays, scalars and empty objects are kept as leaf values. A non-object
    /// record yields an empty snapshot.
    pub fn from_record(record: &Value) -> Self {
        let mut values = BTreeMap::new();
        if let Value::Object(fields) = record {
            flatten_into(&mut values, None, fields);
        }
        Self(values)
    }

    pub fn with(mut self, path: impl Into<String>, value: Value) -> Self {
        self.0.insert(path.into(), value);
        self
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns a copy of this snapshot with the given values written over it.
    pub fn with_changes<'a, I>(&self, changes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut values = self.0.clone();
        for (path, value) in changes {
            values.insert(path.to_string(), value.clone());
        }
        Self(values)
    }

    /// The snapshot as a flat JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

fn flatten_into(values: &mut BTreeMap<String, Value>, prefix: Option<&str>, fields: &Map<String, Value>) {
    for (key, value) in fields {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(values, Some(&path), nested),
            _ => {
                values.insert(path, value.clone());
            }
        }
    }
}

impl From<BTreeMap<String, Value>> for OriginalSnapshot {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<(String, Value)> for OriginalSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
