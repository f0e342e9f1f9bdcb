//! Clean, normalized form of a directory entry.
//!
//! The normalizer produces an [`Entry`]: an insertion-ordered mapping whose
//! slots are either keyed (attribute names, or distinguished names for
//! deduplicated subtrees) or positional (sub-entries that could not claim a
//! key). Positional slots get integer keys assigned in append order, which
//! keeps iteration and JSON projection deterministic.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Key of one slot in a clean entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// An attribute name or a distinguished name.
    Name(String),
    /// A positional slot, numbered in append order.
    Index(usize),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Value of one slot in a clean entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single-valued attribute.
    Scalar(String),
    /// A multi-valued attribute, in original order, sentinel excluded.
    List(Vec<String>),
    /// A normalized sub-entry.
    Entry(Entry),
}

impl Value {
    /// The scalar value, if this slot is single-valued.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The value list, if this slot is multi-valued.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// The nested entry, if this slot holds one.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Value::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Project this value into JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(s) => serde_json::Value::String(s.clone()),
            Value::List(values) => serde_json::Value::Array(
                values
                    .iter()
                    .map(|v| serde_json::Value::String(v.clone()))
                    .collect(),
            ),
            Value::Entry(entry) => entry.to_json(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        Value::Entry(entry)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// A normalized directory entry: keyed and positional slots in insertion
/// order.
///
/// There is no removal API; an entry is built once by the normalizer and read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    items: Vec<(Key, Value)>,
    next_index: usize,
}

impl Entry {
    /// An empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyed slot.
    ///
    /// Re-inserting an existing key replaces its value in place, keeping the
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();

        match self.items.iter_mut().find(|(key, _)| key_matches(key, &name)) {
            Some((_, existing)) => *existing = value,
            None => self.items.push((Key::Name(name), value)),
        }
    }

    /// Append a positional slot.
    pub fn push(&mut self, value: impl Into<Value>) {
        let index = self.next_index;
        self.next_index += 1;
        self.items.push((Key::Index(index), value.into()));
    }

    /// Look up a keyed slot by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.items
            .iter()
            .find(|(key, _)| key_matches(key, name))
            .map(|(_, value)| value)
    }

    /// Look up a single-valued attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Look up a multi-valued attribute.
    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }

    /// Look up a nested entry by its key (usually a distinguished name).
    pub fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.get(name).and_then(Value::as_entry)
    }

    /// Whether a keyed slot with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.items.iter().map(|(key, value)| (key, value))
    }

    /// Positional slots only, in append order.
    pub fn positional(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().filter_map(|(key, value)| match key {
            Key::Index(_) => Some(value),
            Key::Name(_) => None,
        })
    }

    /// Number of slots, keyed and positional.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this entry has no slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Project this entry into a JSON object.
    ///
    /// Keyed slots keep their names; positional slots appear under their
    /// stringified index, mirroring how mixed-key mappings render.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.items.len());
        for (key, value) in &self.items {
            map.insert(key.to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

fn key_matches(key: &Key, name: &str) -> bool {
    matches!(key, Key::Name(existing) if existing == name)
}
