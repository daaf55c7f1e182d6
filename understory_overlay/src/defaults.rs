// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default-value providers.
//!
//! This module provides [`Defaults`], an immutable tree of fallback values
//! consulted whenever a node's store has no usable value for a key.

use alloc::rc::Rc;
use alloc::vec::Vec;

use tracing::trace;

use crate::error::OverlayError;
use crate::key::{Key, KeyEnum};
use crate::value::Value;

/// An immutable tree of fallback values.
///
/// Each level maps keys to values and slot keys to nested providers for
/// child nodes. Asking for a missing child returns an empty provider, so
/// reads always have somewhere to fall back to.
///
/// Internally, `Defaults` wraps an `Rc`, making cloning cheap. Entries are
/// kept sorted by key for O(log n) lookup.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Defaults, DefaultsBuilder, Key};
///
/// const DISPLAY: Key = Key::from_static("display");
/// const TICKS: Key = Key::from_static("ticks");
/// const PADDING: Key = Key::from_static("padding");
///
/// let scale = DefaultsBuilder::new()
///     .set(DISPLAY, true)
///     .child(TICKS, DefaultsBuilder::new().set(PADDING, 3).build())
///     .build();
///
/// assert_eq!(scale.get_bool(&DISPLAY), Some(true));
/// assert_eq!(scale.child(&TICKS).get_number(&PADDING), Some(3.0));
/// assert!(scale.child(&PADDING).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Defaults {
    inner: Rc<DefaultsData>,
}

#[derive(Debug, Default, PartialEq)]
struct DefaultsData {
    /// Sorted by key.
    values: Vec<(Key, Value)>,
    /// Sorted by key.
    children: Vec<(Key, Defaults)>,
}

impl Defaults {
    /// Returns a provider with no values and no children.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this provider has neither values nor children.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.values.is_empty() && self.inner.children.is_empty()
    }

    /// Returns the default value for `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.inner
            .values
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|idx| &self.inner.values[idx].1)
    }

    /// Returns `true` if a default value exists for `key`.
    #[must_use]
    #[inline]
    pub fn contains(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns the boolean default for `key`, if it is a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &Key) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the numeric default for `key`, if it is a number.
    #[must_use]
    pub fn get_number(&self, key: &Key) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns the string default for `key`, if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &Key) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the enumerated default for `key`, if it is a known member.
    #[must_use]
    pub fn get_enum<E: KeyEnum>(&self, key: &Key) -> Option<E> {
        self.get_str(key).and_then(E::from_value)
    }

    /// Returns the provider for the child at `slot`.
    ///
    /// Missing children resolve to an empty provider.
    #[must_use]
    pub fn child(&self, slot: &Key) -> Self {
        self.inner
            .children
            .binary_search_by(|(k, _)| k.cmp(slot))
            .ok()
            .map(|idx| self.inner.children[idx].1.clone())
            .unwrap_or_default()
    }

    /// Returns the keys that have default values, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.inner.values.iter().map(|(k, _)| k)
    }

    /// Loads a provider from a JSON object.
    ///
    /// Nested objects become child providers; `null` members are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NotAnObject`] if `json` is not an object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use understory_overlay::{Defaults, Key};
    ///
    /// let json = serde_json::json!({ "display": true, "grid": { "lineWidth": 1 } });
    /// let defaults = Defaults::from_json(&json).unwrap();
    ///
    /// let grid = defaults.child(&Key::from_static("grid"));
    /// assert_eq!(grid.get_number(&Key::from_static("lineWidth")), Some(1.0));
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Result<Self, OverlayError> {
        let serde_json::Value::Object(map) = json else {
            return Err(OverlayError::NotAnObject {
                found: crate::json::json_type_name(json),
            });
        };
        let mut builder = DefaultsBuilder::new();
        for (name, member) in map {
            let key = Key::new(name.as_str())?;
            builder = match member {
                serde_json::Value::Null => continue,
                serde_json::Value::Object(_) => builder.child(key, Self::from_json(member)?),
                scalar => match crate::json::scalar_from_json(scalar) {
                    Some(value) => builder.set(key, value),
                    None => continue,
                },
            };
        }
        Ok(builder.build())
    }
}

/// Builder for constructing [`Defaults`] instances.
///
/// Setting the same key twice replaces the earlier value.
#[derive(Debug, Default)]
pub struct DefaultsBuilder {
    values: Vec<(Key, Value)>,
    children: Vec<(Key, Defaults)>,
}

impl DefaultsBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder from the contents of an existing provider.
    #[must_use]
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            values: defaults.inner.values.clone(),
            children: defaults.inner.children.clone(),
        }
    }

    /// Sets a default value.
    #[must_use]
    pub fn set(mut self, key: Key, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.values.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(idx) => self.values[idx].1 = value,
            Err(idx) => self.values.insert(idx, (key, value)),
        }
        self
    }

    /// Sets the provider for the child at `slot`.
    #[must_use]
    pub fn child(mut self, slot: Key, defaults: Defaults) -> Self {
        match self.children.binary_search_by(|(k, _)| k.cmp(&slot)) {
            Ok(idx) => self.children[idx].1 = defaults,
            Err(idx) => self.children.insert(idx, (slot, defaults)),
        }
        self
    }

    /// Builds the provider.
    #[must_use]
    pub fn build(self) -> Defaults {
        trace!(
            values = self.values.len(),
            children = self.children.len(),
            "built defaults"
        );
        Defaults {
            inner: Rc::new(DefaultsData {
                values: self.values,
                children: self.children,
            }),
        }
    }
}
