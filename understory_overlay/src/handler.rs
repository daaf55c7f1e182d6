// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed option objects and property handlers.
//!
//! [`ConfigNode`] is implemented by every typed option object; it exposes the
//! [`Node`] the object is built on. [`PropertyHandler`] groups related
//! properties that live directly on another object's store.

use alloc::string::String;
use alloc::vec::Vec;

use crate::defaults::Defaults;
use crate::key::{Key, KeyEnum};
use crate::node::{FromValue, Node};
use crate::value::{Value, ValueKind, ValueKinds};

/// A typed option object backed by a [`Node`].
///
/// # Example
///
/// ```rust
/// use understory_overlay::{ConfigNode, Defaults, Key, Node};
///
/// const TENSION: Key = Key::from_static("tension");
///
/// struct Line {
///     node: Node,
/// }
///
/// impl ConfigNode for Line {
///     fn node(&self) -> &Node {
///         &self.node
///     }
/// }
///
/// impl Line {
///     fn set_tension(&self, tension: f64) {
///         self.node.set_value_and_attach(&TENSION, tension);
///     }
/// }
///
/// let line = Line { node: Node::new_root(Defaults::empty()) };
/// line.set_tension(0.4);
/// assert_eq!(line.to_json_string().unwrap(), r#"{"tension":0.4}"#);
/// ```
pub trait ConfigNode {
    /// Returns the node this object reads and writes.
    fn node(&self) -> &Node;

    /// Returns `true` if this object is reachable from the root.
    fn is_attached(&self) -> bool {
        self.node().is_attached()
    }

    /// Exports this object as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if objects are nested too deeply to serialize.
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        self.node().to_json()
    }

    /// Exports this object as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Fails only if objects are nested too deeply to serialize.
    fn to_json_string(&self) -> Result<String, serde_json::Error> {
        self.node().to_json_string()
    }
}

impl ConfigNode for Node {
    #[inline]
    fn node(&self) -> &Node {
        self
    }
}

/// A helper that reads and writes a group of properties on its owner.
///
/// A handler has no store of its own. Every write lands in the owner's store
/// (and attaches the owner), and every read consults the owner's store, then
/// the handler's own defaults, then the caller's fallback. This lets one set
/// of typed accessors serve several owners, each with different defaults.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, DefaultsBuilder, Key, Node, PropertyHandler};
///
/// const SIZE: Key = Key::from_static("size");
///
/// let owner = Node::new_root(Defaults::empty());
/// let font = PropertyHandler::new(&owner, DefaultsBuilder::new().set(SIZE, 12).build());
///
/// assert_eq!(font.resolve(&SIZE, 0.0), 12.0);
/// font.set_value(&SIZE, 16);
/// assert_eq!(owner.get_number(&SIZE, 0.0), 16.0);
/// ```
#[derive(Clone, Debug)]
pub struct PropertyHandler {
    owner: Node,
    defaults: Defaults,
}

impl PropertyHandler {
    /// Creates a handler bound to `owner` with its own `defaults`.
    #[must_use]
    pub fn new(owner: &Node, defaults: Defaults) -> Self {
        Self {
            owner: owner.clone(),
            defaults,
        }
    }

    /// Returns the owner node.
    #[must_use]
    #[inline]
    pub fn owner(&self) -> &Node {
        &self.owner
    }

    /// Returns the handler's defaults.
    #[must_use]
    #[inline]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Stores `value` on the owner and attaches the owner.
    pub fn set_value(&self, key: &Key, value: impl Into<Value>) {
        self.owner.set_value_and_attach(key, value);
    }

    /// Stores one value as a scalar and several as an array on the owner.
    pub fn set_value_or_array<I, V>(&self, key: &Key, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.owner.set_value_or_array(key, values);
        self.owner.attach();
    }

    /// Removes `key` from the owner.
    pub fn remove(&self, key: &Key) -> bool {
        self.owner.remove(key)
    }

    /// Returns `true` if the owner stores a value under `key`.
    #[must_use]
    pub fn has(&self, key: &Key) -> bool {
        self.owner.has(key)
    }

    /// Returns the dynamic kind of the owner's value under `key`.
    #[must_use]
    pub fn kind(&self, key: &Key) -> ValueKind {
        self.owner.kind(key)
    }

    /// Returns `true` if the owner's value under `key` has one of `kinds`.
    #[must_use]
    pub fn is_kind(&self, key: &Key, kinds: ValueKinds) -> bool {
        self.owner.is_kind(key, kinds)
    }

    /// Returns a copy of the owner's value under `key`.
    #[must_use]
    pub fn get_value(&self, key: &Key) -> Option<Value> {
        self.owner.get_value(key)
    }

    /// Returns the value under `key` from the owner, else from the handler's
    /// defaults, else `fallback`.
    #[must_use]
    pub fn resolve<T: FromValue>(&self, key: &Key, fallback: T) -> T {
        self.owner
            .with_store(|store| store.get(key).and_then(T::from_value))
            .or_else(|| self.defaults.get(key).and_then(T::from_value))
            .unwrap_or(fallback)
    }

    /// Like [`resolve`](Self::resolve) for enumerations stored as strings.
    #[must_use]
    pub fn resolve_enum<E: KeyEnum>(&self, key: &Key, fallback: E) -> E {
        self.owner
            .with_store(|store| store.get(key).and_then(Value::as_str).and_then(E::from_value))
            .or_else(|| self.defaults.get_enum(key))
            .unwrap_or(fallback)
    }

    /// Reads a scalar-or-array value from the owner, else from the handler's
    /// defaults, else `[fallback]`.
    #[must_use]
    pub fn resolve_value_or_array<T: FromValue>(&self, key: &Key, fallback: T) -> Vec<T> {
        if self.owner.has(key) {
            return self.owner.get_value_or_array(key, fallback);
        }
        match self.defaults.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(T::from_value).collect(),
            Some(value) => T::from_value(value).into_iter().collect(),
            None => alloc::vec![fallback],
        }
    }
}

impl ConfigNode for PropertyHandler {
    #[inline]
    fn node(&self) -> &Node {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DefaultsBuilder;

    const SCALES: Key = Key::from_static("scales");
    const TITLE: Key = Key::from_static("title");
    const SIZE: Key = Key::from_static("size");
    const FAMILY: Key = Key::from_static("family");

    #[test]
    fn handler_writes_attach_the_owner() {
        let root = Node::new_root(Defaults::empty());
        let title = root.child(&SCALES, Defaults::empty()).child(&TITLE, Defaults::empty());
        let font = PropertyHandler::new(&title, Defaults::empty());
        assert!(!font.is_attached());
        font.set_value(&SIZE, 14);
        assert!(title.is_attached());
        assert_eq!(title.get_number(&SIZE, 0.0), 14.0);
    }

    #[test]
    fn handler_reads_own_defaults() {
        let owner_defaults = DefaultsBuilder::new().set(SIZE, 99).build();
        let owner = Node::new_root(owner_defaults);
        let font = PropertyHandler::new(
            &owner,
            DefaultsBuilder::new().set(FAMILY, "sans-serif").build(),
        );
        assert_eq!(font.resolve(&FAMILY, String::new()), "sans-serif");
        assert_eq!(font.resolve(&SIZE, 12.0), 12.0);
        assert!(!font.has(&FAMILY));
    }

    #[test]
    fn handler_value_or_array_falls_back() {
        let owner = Node::new_root(Defaults::empty());
        let handler = PropertyHandler::new(
            &owner,
            DefaultsBuilder::new()
                .set(FAMILY, alloc::vec![Value::from("a"), Value::from("b")])
                .build(),
        );
        assert_eq!(
            handler.resolve_value_or_array(&FAMILY, String::new()),
            ["a", "b"]
        );
        handler.set_value_or_array(&FAMILY, ["c"]);
        assert_eq!(handler.kind(&FAMILY), ValueKind::String);
        assert_eq!(handler.resolve_value_or_array(&FAMILY, String::new()), ["c"]);
    }

    #[test]
    fn config_node_for_handler_is_owner() {
        let owner = Node::new_root(Defaults::empty());
        let handler = PropertyHandler::new(&owner, Defaults::empty());
        assert_eq!(handler.node(), &owner);
        assert_eq!(handler.to_json_string().unwrap(), "{}");
    }
}
