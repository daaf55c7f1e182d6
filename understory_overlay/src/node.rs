// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration nodes.
//!
//! This module provides [`Node`], the handle every typed option object is
//! built on, together with [`NodeBuilder`] and the [`FromValue`] conversion
//! used by typed reads.
//!
//! ## Deferred attachment
//!
//! A child node is created *unattached*: its store exists in the arena but
//! its parent does not refer to it yet. Only a write through
//! [`Node::set_value_and_attach`] (or an explicit [`Node::attach`]) links the
//! chain of stores from the child up to the root, so option objects that
//! were only read never show up in the exported tree.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::trace;

use crate::defaults::Defaults;
use crate::document::{Document, NodeId};
use crate::error::OverlayError;
use crate::json::NodeView;
use crate::key::{Key, KeyEnum};
use crate::store::Store;
use crate::value::{Value, ValueKind, ValueKinds};

/// Conversion from a stored [`Value`] to a typed result.
///
/// Returns `None` when the value does not have the expected shape, which
/// makes typed reads fall back instead of failing.
pub trait FromValue: Sized {
    /// Converts `value`, if it has the expected shape.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "stored numbers are truncated toward zero, saturating at the bounds"
    )]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().filter(|n| n.is_finite()).map(|n| n as Self)
    }
}

impl FromValue for u32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "stored numbers are truncated toward zero, saturating at the bounds"
    )]
    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as Self)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(Into::into)
    }
}

impl FromValue for NodeId {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object()
    }
}

/// A handle to one option object in a [`Document`].
///
/// A node reads and writes named values on its own [`Store`] and knows where
/// it hangs in its parent (parent id and slot key). Handles are cheap to
/// clone; clones address the same store. Two handles are equal iff they
/// address the same store of the same document.
///
/// Reads never fail: a missing or wrong-shaped value yields the given
/// default. The `resolve*` family additionally consults the node's
/// [`Defaults`] before using the caller's fallback.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, Key, Node};
///
/// const SCALES: Key = Key::from_static("scales");
/// const X: Key = Key::from_static("x");
/// const BEGIN_AT_ZERO: Key = Key::from_static("beginAtZero");
///
/// let root = Node::new_root(Defaults::empty());
/// let x = root.child(&SCALES, Defaults::empty()).child(&X, Defaults::empty());
///
/// // Nothing is linked until something is written.
/// assert!(root.is_empty());
///
/// x.set_value_and_attach(&BEGIN_AT_ZERO, true);
/// assert!(x.is_attached());
/// assert_eq!(
///     root.to_json().unwrap(),
///     serde_json::json!({ "scales": { "x": { "beginAtZero": true } } }),
/// );
/// ```
#[derive(Clone)]
pub struct Node {
    document: Document,
    id: NodeId,
}

impl Node {
    /// Creates the root node of a new document.
    #[must_use]
    pub fn new_root(defaults: Defaults) -> Self {
        Document::new().root(defaults)
    }

    /// Returns a builder for validated node construction.
    #[must_use]
    pub fn builder() -> NodeBuilder {
        NodeBuilder::new()
    }

    pub(crate) fn from_parts(document: Document, id: NodeId) -> Self {
        Self { document, id }
    }

    /// Returns the arena id of this node.
    #[must_use]
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the document this node belongs to.
    #[must_use]
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the default-value provider of this node.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        self.document.read(|arena| {
            arena
                .entry(self.id)
                .map(|entry| entry.defaults.clone())
                .unwrap_or_default()
        })
    }

    /// Returns the parent node, or `None` for the root and for nodes whose
    /// slot was removed.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = self
            .document
            .read(|arena| arena.parent_of(self.id).map(|link| link.parent))?;
        Some(Self::from_parts(self.document.clone(), parent))
    }

    /// Returns the slot key under which this node hangs in its parent.
    ///
    /// `None` for the root and for nodes whose slot was removed.
    #[must_use]
    pub fn slot(&self) -> Option<Key> {
        self.document
            .read(|arena| arena.parent_of(self.id).map(|link| link.slot.clone()))
    }

    /// Returns the root node of this node's document.
    #[must_use]
    pub fn root(&self) -> Self {
        Self::from_parts(self.document.clone(), NodeId::ROOT)
    }

    /// Returns the child node for `slot`, creating it if needed.
    ///
    /// If an object is already stored under `slot` the child addresses that
    /// store. Otherwise a child created earlier for the slot is reused, and
    /// failing that a new, unattached child is allocated. A non-empty
    /// `defaults` becomes the child's default-value provider.
    ///
    /// Allocated children live as long as the document, so read-only lookups
    /// should check [`kind`](Self::kind) first.
    #[must_use]
    pub fn child(&self, slot: &Key, defaults: Defaults) -> Self {
        let id = self
            .document
            .write(|arena| arena.child(self.id, slot, defaults));
        Self::from_parts(self.document.clone(), id)
    }

    /// Runs `f` with read access to this node's store.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes to any node of the same document.
    pub fn with_store<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.document.read(|arena| match arena.entry(self.id) {
            Some(entry) => f(&entry.store),
            None => f(&Store::new()),
        })
    }

    fn update<R>(&self, f: impl FnOnce(&mut Store) -> R) -> Option<R> {
        self.document
            .write(|arena| arena.entry_mut(self.id).map(|entry| f(&mut entry.store)))
    }

    // --- Writes -------------------------------------------------------------

    /// Stores `value` under `key` without touching the parent chain.
    pub fn set_value(&self, key: &Key, value: impl Into<Value>) {
        let value = value.into();
        trace!(node = %self.id, key = %key, kind = ?value.kind(), "set value");
        self.update(|store| store.set(key.clone(), value));
    }

    /// Stores `value` under `key`, then makes this node reachable from the
    /// root.
    pub fn set_value_and_attach(&self, key: &Key, value: impl Into<Value>) {
        self.set_value(key, value);
        self.attach();
    }

    /// Links every store from this node up to the root, leaf first.
    ///
    /// Only links that are missing are written, so calling this on an
    /// attached node changes nothing. Returns the number of links written.
    pub fn attach(&self) -> usize {
        self.document.write(|arena| arena.attach(self.id))
    }

    /// Removes the value stored under `key`.
    ///
    /// Returns `true` if a value was removed; removing a missing key is a
    /// no-op.
    ///
    /// A child created for `key` is orphaned: handles to it keep working but
    /// never link back in, and the next [`child`](Self::child) call for `key`
    /// starts from an empty store.
    pub fn remove(&self, key: &Key) -> bool {
        self.document
            .write(|arena| arena.remove(self.id, key))
            .is_some()
    }

    /// Stores one value as a scalar and several as an array.
    ///
    /// An empty sequence removes `key`.
    ///
    /// ```rust
    /// use understory_overlay::{Defaults, Key, Node, Value};
    ///
    /// const TEXT: Key = Key::from_static("text");
    /// let title = Node::new_root(Defaults::empty());
    ///
    /// title.set_value_or_array(&TEXT, ["Sales"]);
    /// assert_eq!(title.get_value(&TEXT), Some(Value::from("Sales")));
    ///
    /// title.set_value_or_array(&TEXT, ["Sales", "2024"]);
    /// assert_eq!(title.get_value_or_array(&TEXT, String::new()), ["Sales", "2024"]);
    /// ```
    pub fn set_value_or_array<I, V>(&self, key: &Key, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
        match values.len() {
            0 => {
                self.remove(key);
            }
            1 => {
                if let Some(value) = values.pop() {
                    self.set_value(key, value);
                }
            }
            _ => self.set_value(key, Value::Array(values)),
        }
    }

    // --- Reads --------------------------------------------------------------

    /// Returns a copy of the value stored under `key`.
    #[must_use]
    pub fn get_value(&self, key: &Key) -> Option<Value> {
        self.with_store(|store| store.get(key).cloned())
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn has(&self, key: &Key) -> bool {
        self.with_store(|store| store.has(key))
    }

    /// Returns the dynamic kind of the value stored under `key`.
    #[must_use]
    pub fn kind(&self, key: &Key) -> ValueKind {
        self.with_store(|store| store.kind(key))
    }

    /// Returns `true` if the value under `key` has one of `kinds`.
    #[must_use]
    pub fn is_kind(&self, key: &Key, kinds: ValueKinds) -> bool {
        kinds.contains(self.kind(key).into_set())
    }

    /// Returns the stored keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.with_store(|store| store.keys().cloned().collect())
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_store(Store::len)
    }

    /// Returns `true` if nothing is stored on this node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_store(Store::is_empty)
    }

    /// Returns the mutation counter of this node's store.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.with_store(Store::revision)
    }

    /// Returns `true` if this node's store is reachable from the root.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.document.read(|arena| arena.is_attached(self.id))
    }

    /// Returns the stored value under `key` converted to `T`, or `default`.
    #[must_use]
    pub fn get<T: FromValue>(&self, key: &Key, default: T) -> T {
        self.with_store(|store| store.get(key).and_then(T::from_value))
            .unwrap_or(default)
    }

    /// Returns the value under `key` from the store, else from the node's
    /// defaults, else `fallback`.
    #[must_use]
    pub fn resolve<T: FromValue>(&self, key: &Key, fallback: T) -> T {
        self.with_store(|store| store.get(key).and_then(T::from_value))
            .or_else(|| self.defaults().get(key).and_then(T::from_value))
            .unwrap_or(fallback)
    }

    /// Returns the stored boolean under `key`, or `default`.
    #[must_use]
    pub fn get_bool(&self, key: &Key, default: bool) -> bool {
        self.get(key, default)
    }

    /// Returns the stored number under `key`, or `default`.
    #[must_use]
    pub fn get_number(&self, key: &Key, default: f64) -> f64 {
        self.get(key, default)
    }

    /// Returns the stored number under `key` truncated to an integer, or
    /// `default`.
    #[must_use]
    pub fn get_int(&self, key: &Key, default: i32) -> i32 {
        self.get(key, default)
    }

    /// Returns the stored string under `key`, or `default`.
    #[must_use]
    pub fn get_string(&self, key: &Key, default: &str) -> String {
        self.with_store(|store| store.get(key).and_then(String::from_value))
            .unwrap_or_else(|| default.into())
    }

    /// Returns the stored enumeration member under `key`, or `default`.
    ///
    /// Strings that name no member of `E` yield `default`.
    #[must_use]
    pub fn get_enum<E: KeyEnum>(&self, key: &Key, default: E) -> E {
        self.with_store(|store| {
            store
                .get(key)
                .and_then(Value::as_str)
                .and_then(E::from_value)
        })
        .unwrap_or(default)
    }

    /// Like [`get_enum`](Self::get_enum), consulting the node's defaults
    /// before `fallback`.
    #[must_use]
    pub fn resolve_enum<E: KeyEnum>(&self, key: &Key, fallback: E) -> E {
        self.with_store(|store| {
            store
                .get(key)
                .and_then(Value::as_str)
                .and_then(E::from_value)
        })
        .or_else(|| self.defaults().get_enum(key))
        .unwrap_or(fallback)
    }

    /// Reads a value stored either as a scalar or as an array.
    ///
    /// Elements of the wrong shape are skipped. When nothing usable is
    /// stored the node's defaults are consulted the same way, and failing
    /// that the result is `[default]`.
    #[must_use]
    pub fn get_value_or_array<T: FromValue>(&self, key: &Key, default: T) -> Vec<T> {
        fn collect<T: FromValue>(value: Option<&Value>) -> Vec<T> {
            match value {
                Some(Value::Array(items)) => items.iter().filter_map(T::from_value).collect(),
                Some(value) => T::from_value(value).into_iter().collect(),
                None => Vec::new(),
            }
        }
        let stored = self.with_store(|store| collect(store.get(key)));
        if !stored.is_empty() {
            return stored;
        }
        let defaults = collect(self.defaults().get(key));
        if !defaults.is_empty() {
            return defaults;
        }
        alloc::vec![default]
    }

    // --- Toggles ------------------------------------------------------------

    /// Disables the entry at `slot` by storing `false` in place of its object.
    ///
    /// A child created for the slot keeps its store, so a later
    /// [`enable_entry`](Self::enable_entry) can restore it.
    pub fn disable_entry(&self, slot: &Key) {
        self.set_value_and_attach(slot, false);
    }

    /// Re-enables the entry at `slot` after [`disable_entry`](Self::disable_entry).
    ///
    /// If a customized child exists for the slot its object is restored;
    /// otherwise the key is removed so the consumer's own default applies.
    /// Entries that are not stored as booleans are left alone.
    pub fn enable_entry(&self, slot: &Key) {
        if self.kind(slot) != ValueKind::Bool {
            return;
        }
        let customized = self.document.read(|arena| {
            arena
                .entry(self.id)
                .and_then(|entry| entry.child_for(slot))
                .filter(|child| arena.entry(*child).is_some_and(|c| !c.store.is_empty()))
        });
        match customized {
            Some(child) => self.set_value_and_attach(slot, Value::Object(child)),
            None => {
                self.remove(slot);
            }
        }
    }

    /// Returns `false` iff the entry at `slot` is stored as `false`.
    #[must_use]
    pub fn is_entry_enabled(&self, slot: &Key) -> bool {
        self.with_store(|store| store.get(slot).and_then(Value::as_bool)) != Some(false)
    }

    // --- Export -------------------------------------------------------------

    /// Exports this node and everything linked below it as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if objects are nested too deeply to serialize.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        self.document.read(|arena| {
            serde_json::to_value(NodeView {
                arena,
                id: self.id,
                depth: 0,
            })
        })
    }

    /// Exports this node as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Fails only if objects are nested too deeply to serialize.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        self.document.read(|arena| {
            serde_json::to_string(&NodeView {
                arena,
                id: self.id,
                depth: 0,
            })
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.document.ptr_eq(&other.document)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Node`]s with validated construction.
///
/// A defaults provider is mandatory, and a parent must come with a slot key
/// (and the other way round).
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, Key, Node, OverlayError};
///
/// let root = Node::builder().defaults(Defaults::empty()).build().unwrap();
///
/// let missing = Node::builder().parent(&root).build();
/// assert_eq!(missing.unwrap_err(), OverlayError::MissingDefaults);
///
/// let orphan = Node::builder()
///     .defaults(Defaults::empty())
///     .slot(Key::from_static("ticks"))
///     .build();
/// assert_eq!(orphan.unwrap_err(), OverlayError::InconsistentParent);
/// ```
#[derive(Debug, Default)]
pub struct NodeBuilder {
    defaults: Option<Defaults>,
    parent: Option<Node>,
    slot: Option<Key>,
}

impl NodeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default-value provider.
    #[must_use]
    pub fn defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Sets the parent node.
    #[must_use]
    pub fn parent(mut self, parent: &Node) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Sets the slot key in the parent.
    #[must_use]
    pub fn slot(mut self, slot: Key) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Builds the node.
    ///
    /// Without a parent this creates the root of a new document; with one it
    /// behaves like [`Node::child`].
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::MissingDefaults`] if no provider was given and
    /// [`OverlayError::InconsistentParent`] if only one of parent and slot
    /// was given.
    pub fn build(self) -> Result<Node, OverlayError> {
        let defaults = self.defaults.ok_or(OverlayError::MissingDefaults)?;
        match (self.parent, self.slot) {
            (None, None) => Ok(Node::new_root(defaults)),
            (Some(parent), Some(slot)) => Ok(parent.child(&slot, defaults)),
            _ => Err(OverlayError::InconsistentParent),
        }
    }
}
