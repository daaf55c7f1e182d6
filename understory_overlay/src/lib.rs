// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlay: typed option objects over a dynamic key/value tree.
//!
//! This crate is the mapping layer between statically typed option objects
//! and the dynamically typed configuration tree a charting library consumes.
//! Typed accessors read and write named values on a [`Store`]; stores are
//! linked into a tree that is exported as JSON.
//!
//! ## Core Concepts
//!
//! - [`Key`] names a slot in a store. [`KeyEnum`] maps enumerations to the
//!   fixed strings they are stored as.
//! - [`Value`] is the dynamic value held by a store. Nested objects are held
//!   by [`NodeId`] handle, so a parent shares its child's store.
//! - [`Document`] is the arena holding every store of one tree.
//! - [`Node`] is the handle typed objects are built on. It knows its parent
//!   and the slot it hangs in, and reads fall back to its [`Defaults`].
//! - [`PropertyHandler`] groups properties that live on another node.
//! - [`NameRegistry`] guards the names of predefined entries.
//!
//! ## Deferred attachment
//!
//! Creating a child does not modify its parent. The child is linked only
//! once it holds something worth exporting:
//!
//! ```rust
//! use understory_overlay::{Defaults, Key, Node};
//!
//! const PLUGINS: Key = Key::from_static("plugins");
//! const LEGEND: Key = Key::from_static("legend");
//! const DISPLAY: Key = Key::from_static("display");
//!
//! let options = Node::new_root(Defaults::empty());
//! let legend = options
//!     .child(&PLUGINS, Defaults::empty())
//!     .child(&LEGEND, Defaults::empty());
//!
//! // Reading through an unattached child leaves the tree untouched.
//! assert!(legend.get_bool(&DISPLAY, true));
//! assert_eq!(options.to_json_string().unwrap(), "{}");
//!
//! // The first write links the whole chain, leaf first.
//! legend.set_value_and_attach(&DISPLAY, false);
//! assert_eq!(
//!     options.to_json_string().unwrap(),
//!     r#"{"plugins":{"legend":{"display":false}}}"#,
//! );
//!
//! // Attaching again writes nothing.
//! assert_eq!(legend.attach(), 0);
//! ```
//!
//! ## Reads never fail
//!
//! Missing or wrong-shaped values make typed reads fall back: `get*` to the
//! caller's default, `resolve*` to the node's [`Defaults`] first. Errors
//! ([`OverlayError`]) are only raised while constructing nodes, keys and
//! registry entries.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod defaults;
mod document;
mod error;
mod handler;
mod json;
mod key;
mod node;
mod registry;
mod store;
mod value;

pub use defaults::{Defaults, DefaultsBuilder};
pub use document::{Document, NodeId};
pub use error::{NameRejection, OverlayError};
pub use handler::{ConfigNode, PropertyHandler};
pub use key::{Key, KeyEnum};
pub use node::{FromValue, Node, NodeBuilder};
pub use registry::NameRegistry;
pub use store::Store;
pub use value::{Value, ValueKind, ValueKinds};
