//! Document Addressing and Merge Semantics
//!
//! Paths alternate collection and document segments:
//! `chat_rooms` is a collection, `chat_rooms/room1` a document,
//! `chat_rooms/room1/messages` a sub-collection of that document.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;

/// The fields of a document
pub type Fields = serde_json::Map<String, Value>;

/// Reference to a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef {
    path: String,
}

impl CollectionRef {
    /// A top-level collection
    pub fn root(name: impl Into<String>) -> Self {
        Self { path: name.into() }
    }

    /// Reference to the document `id` inside this collection
    pub fn doc(&self, id: impl Into<String>) -> DocumentRef {
        DocumentRef {
            parent: self.clone(),
            id: id.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Reference to a document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    parent: CollectionRef,
    id: String,
}

impl DocumentRef {
    /// Reference to a sub-collection owned by this document
    pub fn collection(&self, name: &str) -> CollectionRef {
        CollectionRef {
            path: format!("{}/{}/{}", self.parent.path, self.id, name),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> &CollectionRef {
        &self.parent
    }

    /// Full slash-separated path of this document
    pub fn path(&self) -> String {
        format!("{}/{}", self.parent.path, self.id)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent.path, self.id)
    }
}

/// A document as read from the store
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub id: String,
    pub data: Fields,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl DocumentSnapshot {
    /// A single field of the document
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}

/// Outcome of a confirmed write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResult {
    pub write_time: DateTime<Utc>,
}

/// A per-field update applied by `DocumentStore::set_merge`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Replace the field
    Set(Value),
    /// Append each element not already present in the array field
    ArrayUnion(Vec<Value>),
}

impl FieldValue {
    pub fn array_union(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::ArrayUnion(elements.into_iter().collect())
    }
}

/// Apply field updates to existing document data
///
/// Fields not named in `updates` are left untouched. An `ArrayUnion` on a
/// missing or non-array field starts a fresh array. Elements are compared
/// structurally and keep their order of arrival.
pub fn merge_fields(data: &mut Fields, updates: impl IntoIterator<Item = (String, FieldValue)>) {
    for (field, update) in updates {
        match update {
            FieldValue::Set(value) => {
                data.insert(field, value);
            }
            FieldValue::ArrayUnion(elements) => {
                let entry = data.entry(field).or_insert_with(|| Value::Array(Vec::new()));
                if !entry.is_array() {
                    *entry = Value::Array(Vec::new());
                }
                if let Value::Array(items) = entry {
                    for element in elements {
                        if !items.contains(&element) {
                            items.push(element);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_paths() {
        let room = CollectionRef::root("chat_rooms").doc("room1");
        assert_eq!(room.path(), "chat_rooms/room1");
        assert_eq!(room.id(), "room1");

        let sender = room.collection("messages").doc("alice");
        assert_eq!(sender.parent().path(), "chat_rooms/room1/messages");
        assert_eq!(sender.to_string(), "chat_rooms/room1/messages/alice");
    }

    #[test]
    fn test_array_union_creates_field() {
        let mut data = Fields::new();
        merge_fields(&mut data, [("messages".into(), FieldValue::array_union([json!(1)]))]);
        assert_eq!(Value::Object(data), json!({ "messages": [1] }));
    }

    #[test]
    fn test_array_union_appends_in_order() {
        let mut data = fields(json!({ "messages": [{ "m": "a" }] }));
        merge_fields(
            &mut data,
            [(
                "messages".into(),
                FieldValue::array_union([json!({ "m": "b" }), json!({ "m": "c" })]),
            )],
        );
        assert_eq!(
            Value::Object(data),
            json!({ "messages": [{ "m": "a" }, { "m": "b" }, { "m": "c" }] })
        );
    }

    #[test]
    fn test_array_union_skips_structural_duplicates() {
        let mut data = fields(json!({ "messages": [{ "m": "a", "t": 1 }] }));
        merge_fields(
            &mut data,
            [("messages".into(), FieldValue::array_union([json!({ "t": 1, "m": "a" })]))],
        );
        assert_eq!(data["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_array_union_replaces_non_array() {
        let mut data = fields(json!({ "messages": "oops" }));
        merge_fields(&mut data, [("messages".into(), FieldValue::array_union([json!(2)]))]);
        assert_eq!(data["messages"], json!([2]));
    }

    #[test]
    fn test_merge_keeps_other_fields() {
        let mut data = fields(json!({ "title": "lobby", "count": 1 }));
        merge_fields(&mut data, [("count".into(), FieldValue::Set(json!(2)))]);
        assert_eq!(Value::Object(data), json!({ "title": "lobby", "count": 2 }));
    }
}
