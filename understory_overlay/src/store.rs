// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered key/value storage for a single node.

use smallvec::SmallVec;

use crate::key::Key;
use crate::value::{Value, ValueKind};

/// Number of entries stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 4;

/// The underlying store of one configuration node.
///
/// A `Store` is an ordered map from [`Key`] to [`Value`]:
///
/// - no key appears twice,
/// - entries keep their insertion order, which is the serialization order,
/// - replacing the value of an existing key keeps its position.
///
/// Option objects are small (a handful of keys) so entries live inline in a
/// [`SmallVec`] and lookup is a linear scan.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Key, Store, Value};
///
/// const MIN: Key = Key::from_static("min");
/// const MAX: Key = Key::from_static("max");
///
/// let mut store = Store::new();
/// store.set(MAX, Value::from(10));
/// store.set(MIN, Value::from(0));
/// store.set(MAX, Value::from(20));
///
/// let names: Vec<&str> = store.keys().map(|k| k.name()).collect();
/// assert_eq!(names, ["max", "min"]);
/// assert_eq!(store.get(&MAX), Some(&Value::from(20)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    entries: SmallVec<[(Key, Value); INLINE_CAPACITY]>,
    revision: u64,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the mutation counter of this store.
    ///
    /// The counter increases on every [`set`](Self::set) and on every
    /// [`remove`](Self::remove) that actually removed something.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.name() == name)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.get_by_name(key.name())
    }

    /// Returns the value stored under the key named `name`.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Stores `value` under `key`, replacing any previous value in place.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        self.revision += 1;
        match self.position(key.name()) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes the value stored under `key`.
    ///
    /// Removing a missing key is a no-op and leaves the revision unchanged.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let i = self.position(key.name())?;
        self.revision += 1;
        Some(self.entries.remove(i).1)
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    #[inline]
    pub fn has(&self, key: &Key) -> bool {
        self.position(key.name()).is_some()
    }

    /// Returns the dynamic kind of the value under `key`.
    ///
    /// Missing keys report [`ValueKind::Undefined`].
    #[must_use]
    pub fn kind(&self, key: &Key) -> ValueKind {
        self.get(key).map_or(ValueKind::Undefined, Value::kind)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const A: Key = Key::from_static("a");
    const B: Key = Key::from_static("b");
    const C: Key = Key::from_static("c");

    #[test]
    fn store_new() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.revision(), 0);
        assert_eq!(store.kind(&A), ValueKind::Undefined);
    }

    #[test]
    fn store_keeps_insertion_order() {
        let mut store = Store::new();
        store.set(C, Value::from(1));
        store.set(A, Value::from(2));
        store.set(B, Value::from(3));
        let names: Vec<&str> = store.keys().map(Key::name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn store_replace_keeps_position() {
        let mut store = Store::new();
        store.set(A, Value::from(1));
        store.set(B, Value::from(2));
        let previous = store.set(A, Value::from("x"));
        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(store.len(), 2);
        let entries: Vec<(&str, &Value)> = store.iter().map(|(k, v)| (k.name(), v)).collect();
        assert_eq!(entries, [("a", &Value::from("x")), ("b", &Value::from(2))]);
    }

    #[test]
    fn store_remove_missing_is_noop() {
        let mut store = Store::new();
        store.set(A, Value::from(true));
        let revision = store.revision();
        assert_eq!(store.remove(&B), None);
        assert_eq!(store.revision(), revision);
        assert_eq!(store.remove(&A), Some(Value::from(true)));
        assert!(store.revision() > revision);
        assert!(!store.has(&A));
    }

    #[test]
    fn store_revision_counts_every_set() {
        let mut store = Store::new();
        store.set(A, Value::from(1));
        store.set(A, Value::from(1));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn store_spills_past_inline_capacity() {
        let mut store = Store::new();
        for i in 0..10_i32 {
            let key = Key::new(alloc::format!("k{i}")).unwrap();
            store.set(key, Value::from(i));
        }
        assert_eq!(store.len(), 10);
        assert_eq!(store.get_by_name("k7"), Some(&Value::from(7)));
        assert_eq!(store.keys().next().map(Key::name), Some("k0"));
    }
}
