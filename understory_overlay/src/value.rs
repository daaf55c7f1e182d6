// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamically typed store values.
//!
//! This module provides [`Value`], the tagged union held by a
//! [`Store`](crate::Store), together with [`ValueKind`] and [`ValueKinds`]
//! for shape inspection.

use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;

use crate::document::NodeId;

/// A dynamically typed value held in a store.
///
/// Nested objects are not stored inline: [`Value::Object`] holds the
/// [`NodeId`] of another store in the same [`Document`](crate::Document), so
/// linking a child into its parent shares the child's store instead of
/// copying it.
///
/// # Example
///
/// ```rust
/// use understory_overlay::{Value, ValueKind};
///
/// let value = Value::from("auto");
/// assert_eq!(value.kind(), ValueKind::String);
/// assert_eq!(value.as_str(), Some("auto"));
/// assert_eq!(value.as_bool(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A number. All numbers are stored as `f64`, as the consuming library does.
    Number(f64),
    /// A string.
    String(String),
    /// An array of values.
    Array(Vec<Value>),
    /// A nested object, by handle.
    Object(NodeId),
}

impl Value {
    /// Returns the dynamic kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array elements, if this is an array.
    #[must_use]
    #[inline]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object handle, if this is an object.
    #[must_use]
    #[inline]
    pub fn as_object(&self) -> Option<NodeId> {
        match self {
            Self::Object(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<NodeId> for Value {
    fn from(value: NodeId) -> Self {
        Self::Object(value)
    }
}

/// The dynamic kind of a stored value.
///
/// [`ValueKind::Undefined`] is reported for keys that are not present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value is stored.
    Undefined,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// A nested object.
    Object,
}

impl ValueKind {
    /// Returns this kind as a single-member [`ValueKinds`] set.
    #[must_use]
    pub const fn into_set(self) -> ValueKinds {
        match self {
            Self::Undefined => ValueKinds::UNDEFINED,
            Self::Bool => ValueKinds::BOOL,
            Self::Number => ValueKinds::NUMBER,
            Self::String => ValueKinds::STRING,
            Self::Array => ValueKinds::ARRAY,
            Self::Object => ValueKinds::OBJECT,
        }
    }
}

bitflags! {
    /// A set of [`ValueKind`]s, for checking a value against several shapes.
    ///
    /// ```rust
    /// use understory_overlay::{ValueKind, ValueKinds};
    ///
    /// let scalar = ValueKinds::NUMBER | ValueKinds::STRING;
    /// assert!(scalar.contains(ValueKind::String.into_set()));
    /// assert!(!scalar.contains(ValueKind::Object.into_set()));
    /// ```
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ValueKinds: u8 {
        /// Absent.
        const UNDEFINED = 1 << 0;
        /// Boolean.
        const BOOL = 1 << 1;
        /// Number.
        const NUMBER = 1 << 2;
        /// String.
        const STRING = 1 << 3;
        /// Array.
        const ARRAY = 1 << 4;
        /// Nested object.
        const OBJECT = 1 << 5;
    }
}

impl From<ValueKind> for ValueKinds {
    fn from(kind: ValueKind) -> Self {
        kind.into_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(2).kind(), ValueKind::Number);
        assert_eq!(Value::from("-1").kind(), ValueKind::String);
        assert_eq!(Value::from(vec![Value::from(1)]).kind(), ValueKind::Array);
        assert_eq!(Value::from(NodeId::new(3)).kind(), ValueKind::Object);
    }

    #[test]
    fn accessors_reject_other_shapes() {
        let number = Value::from(2.5);
        assert_eq!(number.as_f64(), Some(2.5));
        assert_eq!(number.as_bool(), None);
        assert_eq!(number.as_str(), None);
        assert_eq!(number.as_object(), None);
        assert!(number.as_array().is_none());
    }

    #[test]
    fn integers_widen_to_numbers() {
        assert_eq!(Value::from(-1_i32), Value::Number(-1.0));
        assert_eq!(Value::from(7_u32), Value::Number(7.0));
    }

    #[test]
    fn kind_sets() {
        let set = ValueKinds::BOOL | ValueKinds::OBJECT;
        assert!(set.contains(ValueKind::Bool.into()));
        assert!(!set.contains(ValueKinds::from(ValueKind::Undefined)));
    }
}
