// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export and import.
//!
//! Export walks the arena from a node and serializes every store as a JSON
//! object in insertion order. Import builds linked stores from JSON objects.

use alloc::string::String;
use alloc::vec::Vec;

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::defaults::Defaults;
use crate::document::{Arena, NodeId};
use crate::error::OverlayError;
use crate::key::Key;
use crate::value::Value;

/// Objects nested deeper than this are not serialized.
const MAX_DEPTH: usize = 128;

/// Largest magnitude below which integral numbers are written as integers.
const MAX_EXACT_INTEGER: f64 = 9.0e15;

pub(crate) fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Converts JSON without nested objects into a [`Value`].
///
/// Returns `None` for `null`, for objects, and for arrays containing either.
pub(crate) fn scalar_from_json(json: &serde_json::Value) -> Option<Value> {
    match json {
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::String(s) => Some(Value::String(s.clone())),
        serde_json::Value::Array(items) => items
            .iter()
            .map(scalar_from_json)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        serde_json::Value::Null | serde_json::Value::Object(_) => None,
    }
}

/// Copies the members of `map` into the store of `id`, linking nested
/// objects as attached children.
pub(crate) fn import_object(
    arena: &mut Arena,
    id: NodeId,
    map: &serde_json::Map<String, serde_json::Value>,
) -> Result<(), OverlayError> {
    for (name, member) in map {
        let key = Key::new(name.as_str())?;
        let value = match member {
            serde_json::Value::Null => continue,
            serde_json::Value::Object(nested) => {
                let child = arena.alloc_child(id, key.clone(), Defaults::empty());
                import_object(arena, child, nested)?;
                Value::Object(child)
            }
            other => match scalar_from_json(other) {
                Some(value) => value,
                None => continue,
            },
        };
        if let Some(entry) = arena.entry_mut(id) {
            entry.store.set(key, value);
        }
    }
    Ok(())
}

/// A serializable view of one node and everything reachable from it.
pub(crate) struct NodeView<'a> {
    pub(crate) arena: &'a Arena,
    pub(crate) id: NodeId,
    pub(crate) depth: usize,
}

struct ValueView<'a> {
    arena: &'a Arena,
    value: &'a Value,
    depth: usize,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.depth > MAX_DEPTH {
            return Err(S::Error::custom("option objects nested too deeply"));
        }
        let Some(entry) = self.arena.entry(self.id) else {
            return serializer.serialize_map(Some(0))?.end();
        };
        let mut map = serializer.serialize_map(Some(entry.store.len()))?;
        for (key, value) in entry.store.iter() {
            map.serialize_entry(
                key.name(),
                &ValueView {
                    arena: self.arena,
                    value,
                    depth: self.depth,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for ValueView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for value in items {
                    seq.serialize_element(&Self {
                        arena: self.arena,
                        value,
                        depth: self.depth,
                    })?;
                }
                seq.end()
            }
            Value::Object(id) => NodeView {
                arena: self.arena,
                id: *id,
                depth: self.depth + 1,
            }
            .serialize(serializer),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the round trip below rejects values that did not convert exactly"
)]
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if (-MAX_EXACT_INTEGER..MAX_EXACT_INTEGER).contains(&n) {
        let int = n as i64;
        if int as f64 == n {
            return serializer.serialize_i64(int);
        }
    }
    serializer.serialize_f64(n)
}
