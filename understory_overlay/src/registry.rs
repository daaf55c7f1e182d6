// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reserved-name registries.
//!
//! This module provides [`NameRegistry`] for sets of entry names where the
//! consuming library predefines some entries and callers may add their own.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use tracing::debug;

use crate::error::{NameRejection, OverlayError};
use crate::key::Key;

/// A registry of reserved entry names.
///
/// Reserved names are the entries the consuming library defines itself
/// (animation modes, animation collections, animated properties). Asking
/// the registry for a reserved name returns its canonical [`Key`]; any other
/// non-empty name becomes a new user-defined key.
///
/// [`check_if_valid`](Self::check_if_valid) is the gate for *defining* a
/// custom entry: it refuses empty names and reserved names, with distinct
/// messages, under the single [`OverlayError::InvalidName`] category.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{NameRegistry, NameRejection};
///
/// let modes = NameRegistry::new(&["active", "hide", "reset", "resize", "show"]);
///
/// let active = modes.create("active").unwrap();
/// assert!(modes.is_reserved(active.name()));
///
/// let custom = modes.create("pulse").unwrap();
/// assert!(!modes.is_reserved(custom.name()));
///
/// let err = modes.check_if_valid("show").unwrap_err();
/// assert_eq!(err.name_rejection(), Some(NameRejection::Reserved));
/// assert!(modes.check_if_valid("pulse").is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    /// Reserved keys in declaration order.
    reserved: Vec<Key>,
    /// Name to index into `reserved`.
    by_name: HashMap<Key, usize>,
}

impl NameRegistry {
    /// Creates a registry reserving `names`.
    ///
    /// Duplicate names are reserved once.
    ///
    /// # Panics
    ///
    /// Panics if a name is empty.
    #[must_use]
    pub fn new(names: &[&'static str]) -> Self {
        let mut registry = Self::default();
        for &name in names {
            registry.reserve(Key::from_static(name));
        }
        registry
    }

    /// Adds `key` to the reserved names. Returns `false` if it already was.
    pub fn reserve(&mut self, key: Key) -> bool {
        if self.by_name.contains_key(&key) {
            return false;
        }
        self.by_name.insert(key.clone(), self.reserved.len());
        self.reserved.push(key);
        true
    }

    /// Returns the number of reserved names.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    /// Returns `true` if nothing is reserved.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }

    /// Returns `true` if `name` is reserved.
    #[must_use]
    #[inline]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the canonical key of a reserved name.
    #[must_use]
    pub fn reserved_key(&self, name: &str) -> Option<&Key> {
        self.by_name.get(name).map(|&idx| &self.reserved[idx])
    }

    /// Returns the reserved keys in declaration order.
    pub fn reserved(&self) -> impl Iterator<Item = &Key> + '_ {
        self.reserved.iter()
    }

    /// Returns the key for `name`.
    ///
    /// Reserved names yield their canonical key; other names yield a new
    /// user-defined key.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::InvalidName`] with
    /// [`NameRejection::NullOrInconsistent`] if `name` is empty.
    pub fn create(&self, name: &str) -> Result<Key, OverlayError> {
        if let Some(key) = self.reserved_key(name) {
            return Ok(key.clone());
        }
        Key::new(name).map_err(|_| Self::rejection(name, NameRejection::NullOrInconsistent))
    }

    /// Checks that `name` may be defined as a custom entry.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::InvalidName`] with
    /// [`NameRejection::NullOrInconsistent`] for empty names and
    /// [`NameRejection::Reserved`] for reserved names.
    pub fn check_if_valid(&self, name: &str) -> Result<(), OverlayError> {
        if name.is_empty() {
            return Err(Self::rejection(name, NameRejection::NullOrInconsistent));
        }
        if self.is_reserved(name) {
            return Err(Self::rejection(name, NameRejection::Reserved));
        }
        Ok(())
    }

    /// Like [`create`](Self::create), but refuses reserved names.
    ///
    /// # Errors
    ///
    /// See [`check_if_valid`](Self::check_if_valid).
    pub fn create_custom(&self, name: &str) -> Result<Key, OverlayError> {
        self.check_if_valid(name)?;
        self.create(name)
    }

    fn rejection(name: &str, reason: NameRejection) -> OverlayError {
        debug!(rejected = name, %reason, "name rejected");
        OverlayError::InvalidName {
            name: String::from(name),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn collections() -> NameRegistry {
        NameRegistry::new(&["colors", "numbers"])
    }

    #[test]
    fn reserved_lookup() {
        let registry = collections();
        assert_eq!(registry.len(), 2);
        assert!(registry.is_reserved("colors"));
        assert!(!registry.is_reserved("sizes"));
        assert_eq!(
            registry.reserved_key("numbers"),
            Some(&Key::from_static("numbers"))
        );
    }

    #[test]
    fn duplicates_reserved_once() {
        let registry = NameRegistry::new(&["x", "y", "x"]);
        assert_eq!(registry.len(), 2);
        let names: Vec<&str> = registry.reserved().map(Key::name).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn create_returns_canonical_or_custom_keys() {
        let registry = collections();
        assert_eq!(registry.create("colors").unwrap(), Key::from_static("colors"));
        assert_eq!(registry.create("sizes").unwrap().name(), "sizes");
        let err = registry.create("").unwrap_err();
        assert_eq!(err.name_rejection(), Some(NameRejection::NullOrInconsistent));
    }

    #[test]
    fn check_if_valid_distinguishes_reasons() {
        let registry = collections();
        let empty = registry.check_if_valid("").unwrap_err();
        let reserved = registry.check_if_valid("numbers").unwrap_err();
        assert_eq!(empty.name_rejection(), Some(NameRejection::NullOrInconsistent));
        assert_eq!(reserved.name_rejection(), Some(NameRejection::Reserved));
        assert_ne!(empty.to_string(), reserved.to_string());
        assert!(registry.check_if_valid("sizes").is_ok());
    }

    #[test]
    fn create_custom_refuses_reserved() {
        let registry = collections();
        assert!(registry.create_custom("colors").is_err());
        assert_eq!(registry.create_custom("sizes").unwrap().name(), "sizes");
    }

    #[test]
    fn reserve_dynamic_names() {
        let mut registry = NameRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.reserve(Key::new("wobble").unwrap()));
        assert!(!registry.reserve(Key::from_static("wobble")));
        assert!(registry.is_reserved("wobble"));
    }
}
