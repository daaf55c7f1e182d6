// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property slot identification.
//!
//! This module provides [`Key`], the name under which a value lives in a
//! [`Store`](crate::Store), and [`KeyEnum`], the capability shared by every
//! enumeration whose members are stored as fixed string values.

use alloc::borrow::{Borrow, Cow};
use alloc::string::String;
use core::fmt;

use crate::error::OverlayError;

/// The name of a property slot.
///
/// Two keys are equal iff their names are equal, regardless of whether the
/// name is static or owned. A key is never empty.
///
/// # Example
///
/// ```rust
/// use understory_overlay::Key;
///
/// const DISPLAY: Key = Key::from_static("display");
///
/// let dynamic = Key::new("display").unwrap();
/// assert_eq!(DISPLAY, dynamic);
/// assert_eq!(DISPLAY.name(), "display");
///
/// assert!(Key::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// Creates a key from a static name.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `name` is empty.
    #[must_use]
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "key name must not be empty");
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from a dynamic name.
    ///
    /// This is how user-extensible names (custom animation properties, scale
    /// ids, transition modes) become keys.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::EmptyKey`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, OverlayError> {
        let name = name.into();
        if name.is_empty() {
            return Err(OverlayError::EmptyKey);
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Returns the name of this key.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name()).finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An enumeration whose members are stored as fixed string values.
///
/// Implementors behave like a closed set of named slots: each member maps to
/// exactly one string, and a stored string maps back to at most one member.
///
/// # Example
///
/// ```rust
/// use understory_overlay::KeyEnum;
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// enum Align {
///     Start,
///     Center,
/// }
///
/// impl KeyEnum for Align {
///     const VALUES: &'static [Self] = &[Self::Start, Self::Center];
///
///     fn value(self) -> &'static str {
///         match self {
///             Self::Start => "start",
///             Self::Center => "center",
///         }
///     }
/// }
///
/// assert_eq!(Align::from_value("center"), Some(Align::Center));
/// assert_eq!(Align::from_value("end"), None);
/// assert_eq!(Align::Start.key().name(), "start");
/// ```
pub trait KeyEnum: Copy + Eq + 'static {
    /// All members, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the stored string for this member.
    fn value(self) -> &'static str;

    /// Returns this member as a [`Key`].
    #[must_use]
    fn key(self) -> Key {
        Key::from_static(self.value())
    }

    /// Looks up the member stored as `value`.
    #[must_use]
    fn from_value(value: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|member| member.value() == value)
    }
}
