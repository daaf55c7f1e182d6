// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node arena shared by every node of one option tree.
//!
//! A [`Document`] owns the [`Store`] of every node created from it. Nodes are
//! addressed by [`NodeId`]; a parent refers to a child store by holding
//! [`Value::Object`] with the child's id, and a child refers back to its
//! parent through a non-owning link (parent id plus slot key). Links are the
//! only upward references, so there is no ownership cycle.
//!
//! The arena is append-only: a node is never freed while the document lives.
//! Because a child is always allocated after its parent, every link points to
//! a lower id, which rules out link cycles.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;
use tracing::debug;

use crate::defaults::Defaults;
use crate::error::OverlayError;
use crate::key::Key;
use crate::node::Node;
use crate::store::Store;
use crate::value::Value;

/// The handle of a node's store inside a [`Document`].
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, Node};
///
/// let root = Node::new_root(Defaults::empty());
/// assert_eq!(root.id().index(), 0);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The id of the root node of every document.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the arena index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Where a node hangs in its parent.
#[derive(Clone, Debug)]
pub(crate) struct Link {
    pub(crate) parent: NodeId,
    pub(crate) slot: Key,
}

#[derive(Debug, Default)]
pub(crate) struct Entry {
    pub(crate) store: Store,
    pub(crate) link: Option<Link>,
    pub(crate) defaults: Defaults,
    /// Child nodes created for a slot of this node, attached or not.
    pub(crate) children: SmallVec<[(Key, NodeId); 2]>,
}

impl Entry {
    pub(crate) fn child_for(&self, slot: &Key) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(k, _)| k == slot)
            .map(|(_, id)| *id)
    }
}

#[derive(Debug)]
pub(crate) struct Arena {
    entries: Vec<Entry>,
}

impl Arena {
    fn new() -> Self {
        Self {
            entries: alloc::vec![Entry::default()],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.entries.get(id.slot())
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.entries.get_mut(id.slot())
    }

    /// Allocates a fresh, unattached child of `parent` for `slot`.
    pub(crate) fn alloc_child(&mut self, parent: NodeId, slot: Key, defaults: Defaults) -> NodeId {
        let index = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        let id = NodeId::new(index);
        debug_assert!(parent < id, "a parent must precede its children");
        self.entries.push(Entry {
            store: Store::new(),
            link: Some(Link {
                parent,
                slot: slot.clone(),
            }),
            defaults,
            children: SmallVec::new(),
        });
        if let Some(owner) = self.entry_mut(parent) {
            match owner.children.iter_mut().find(|(k, _)| *k == slot) {
                Some(existing) => existing.1 = id,
                None => owner.children.push((slot, id)),
            }
        }
        id
    }

    /// Returns the child to use for `slot` of `parent`.
    ///
    /// Prefers the object already stored at the slot, then a child created
    /// earlier for the slot, and otherwise allocates a new unattached child.
    /// A non-empty `defaults` replaces the defaults of a reused child.
    pub(crate) fn child(&mut self, parent: NodeId, slot: &Key, defaults: Defaults) -> NodeId {
        let existing = self.entry(parent).and_then(|owner| {
            let stored = owner
                .store
                .get(slot)
                .and_then(Value::as_object)
                .filter(|id| self.entry(*id).is_some());
            stored.or_else(|| owner.child_for(slot))
        });
        match existing {
            Some(id) => {
                if let Some(entry) = self.entry_mut(id).filter(|_| !defaults.is_empty()) {
                    entry.defaults = defaults;
                }
                id
            }
            None => self.alloc_child(parent, slot.clone(), defaults),
        }
    }

    /// Removes the value at `slot` of `parent`.
    ///
    /// The child recorded for the slot, and the object removed from it, lose
    /// their link: they never attach again and a later lookup of the slot
    /// allocates a fresh child.
    pub(crate) fn remove(&mut self, parent: NodeId, slot: &Key) -> Option<Value> {
        let owner = self.entry_mut(parent)?;
        let removed = owner.store.remove(slot);
        let recorded = owner
            .children
            .iter()
            .position(|(k, _)| k == slot)
            .map(|i| owner.children.remove(i).1);
        let stored = removed.as_ref().and_then(Value::as_object);
        for orphan in recorded.into_iter().chain(stored) {
            let unlinked = self
                .entry_mut(orphan)
                .and_then(|entry| entry.link.take())
                .is_some();
            if unlinked {
                debug!(child = %orphan, parent = %parent, slot = %slot, "orphaning child store");
            }
        }
        removed
    }

    /// Returns the link of `id` to its parent.
    pub(crate) fn parent_of(&self, id: NodeId) -> Option<&Link> {
        self.entry(id).and_then(|entry| entry.link.as_ref())
    }

    /// Makes `id` reachable from its root, leaf first.
    ///
    /// Every link on the way up is checked; a link is written only where the
    /// parent's slot does not already hold this very node. Returns the number
    /// of links written.
    pub(crate) fn attach(&mut self, id: NodeId) -> usize {
        let mut written = 0;
        let mut current = id;
        while let Some(Link { parent, slot }) = self.entry(current).and_then(|e| e.link.clone()) {
            let Some(owner) = self.entry_mut(parent) else {
                break;
            };
            if owner.store.get(&slot) != Some(&Value::Object(current)) {
                debug!(child = %current, parent = %parent, slot = %slot, "linking child store");
                owner.store.set(slot, Value::Object(current));
                written += 1;
            }
            current = parent;
        }
        written
    }

    /// Returns `true` if `id` is reachable from the document root.
    pub(crate) fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            let Some(entry) = self.entry(current) else {
                return false;
            };
            let Some(link) = &entry.link else {
                return current == NodeId::ROOT;
            };
            let linked = self
                .entry(link.parent)
                .and_then(|owner| owner.store.get(&link.slot))
                == Some(&Value::Object(current));
            if !linked {
                return false;
            }
            current = link.parent;
        }
    }
}

/// A tree of option stores with a single root.
///
/// A `Document` is a cheap handle: clones share the same arena. Every
/// [`Node`](crate::Node) keeps a handle to its document.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, Document, Key};
///
/// const SCALES: Key = Key::from_static("scales");
///
/// let document = Document::new();
/// let root = document.root(Defaults::empty());
/// let scales = root.child(&SCALES, Defaults::empty());
///
/// assert_eq!(document.len(), 2);
/// assert!(root.is_attached());
/// assert!(!scales.is_attached());
/// ```
#[derive(Clone)]
pub struct Document {
    arena: Rc<RefCell<Arena>>,
}

impl Document {
    /// Creates a document holding only an empty root store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Rc::new(RefCell::new(Arena::new())),
        }
    }

    /// Returns the root node.
    ///
    /// A non-empty `defaults` replaces the defaults of the root.
    #[must_use]
    pub fn root(&self, defaults: Defaults) -> Node {
        if !defaults.is_empty() {
            self.write(|arena| {
                if let Some(entry) = arena.entry_mut(NodeId::ROOT) {
                    entry.defaults = defaults;
                }
            });
        }
        Node::from_parts(self.clone(), NodeId::ROOT)
    }

    /// Builds a document from a JSON object and returns its root.
    ///
    /// Nested objects become attached child stores, arrays and scalars are
    /// copied, and `null` members are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NotAnObject`] if `json` is not an object, and
    /// [`OverlayError::EmptyKey`] if a member name is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_overlay::{Defaults, Document, Key};
    ///
    /// let json = serde_json::json!({ "scales": { "x": { "display": "auto" } } });
    /// let root = Document::from_json(&json, Defaults::empty()).unwrap();
    ///
    /// let x = root
    ///     .child(&Key::from_static("scales"), Defaults::empty())
    ///     .child(&Key::from_static("x"), Defaults::empty());
    /// assert!(x.is_attached());
    /// assert_eq!(x.to_json().unwrap(), serde_json::json!({ "display": "auto" }));
    /// ```
    pub fn from_json(json: &serde_json::Value, defaults: Defaults) -> Result<Node, OverlayError> {
        let serde_json::Value::Object(map) = json else {
            return Err(OverlayError::NotAnObject {
                found: crate::json::json_type_name(json),
            });
        };
        let document = Self::new();
        document.write(|arena| crate::json::import_object(arena, NodeId::ROOT, map))?;
        Ok(document.root(defaults))
    }

    /// Returns the number of nodes allocated in this document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.borrow().len()
    }

    /// A document always holds its root, so it is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if both handles refer to the same document.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    #[inline]
    pub(crate) fn read<R>(&self, f: impl FnOnce(&Arena) -> R) -> R {
        f(&*self.arena.borrow())
    }

    #[inline]
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Arena) -> R) -> R {
        f(&mut *self.arena.borrow_mut())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Key = Key::from_static("a");
    const B: Key = Key::from_static("b");

    #[test]
    fn children_follow_their_parent() {
        let mut arena = Arena::new();
        let a = arena.alloc_child(NodeId::ROOT, A, Defaults::empty());
        let b = arena.alloc_child(a, B, Defaults::empty());
        assert!(NodeId::ROOT < a && a < b);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn attach_writes_leaf_first_then_stops_writing() {
        let mut arena = Arena::new();
        let a = arena.alloc_child(NodeId::ROOT, A, Defaults::empty());
        let b = arena.alloc_child(a, B, Defaults::empty());
        assert!(!arena.is_attached(b));

        assert_eq!(arena.attach(b), 2);
        assert!(arena.is_attached(b));
        assert!(arena.is_attached(a));
        assert_eq!(arena.attach(b), 0);
    }

    #[test]
    fn attach_replaces_foreign_value_at_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc_child(NodeId::ROOT, A, Defaults::empty());
        arena
            .entry_mut(NodeId::ROOT)
            .unwrap()
            .store
            .set(A, Value::Bool(false));
        assert!(!arena.is_attached(a));
        assert_eq!(arena.attach(a), 1);
        assert!(arena.is_attached(a));
    }

    #[test]
    fn child_lookup_reuses_pending_child() {
        let mut arena = Arena::new();
        let first = arena.child(NodeId::ROOT, &A, Defaults::empty());
        let second = arena.child(NodeId::ROOT, &A, Defaults::empty());
        assert_eq!(first, second);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn node_id_formatting() {
        assert_eq!(alloc::format!("{}", NodeId::new(4)), "NodeId(4)");
        assert_eq!(alloc::format!("{:?}", NodeId::ROOT), "NodeId(0)");
    }
}
