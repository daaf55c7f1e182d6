// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.
//!
//! Every error in this crate is raised while *building* something: a node,
//! a key, a registry entry. Reads never fail; see [`Node`](crate::Node) for
//! the fallback rules.

use alloc::string::String;
use thiserror::Error;

/// Why a name was refused by a [`NameRegistry`](crate::NameRegistry).
///
/// Both reasons belong to the same error category
/// ([`OverlayError::InvalidName`]); only the message differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum NameRejection {
    /// The name is empty or otherwise unusable as a key.
    #[error("null or not consistent")]
    NullOrInconsistent,
    /// The name belongs to the library's own default entries.
    #[error("reserved and cannot be redefined as a custom entry")]
    Reserved,
}

/// Errors raised while constructing overlay objects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// A node was built without a default-value provider.
    #[error("default values argument is missing")]
    MissingDefaults,
    /// A parent was given without a slot key, or a slot key without a parent.
    #[error("parent node and slot key must be given together")]
    InconsistentParent,
    /// A key was created from an empty name.
    #[error("key name must not be empty")]
    EmptyKey,
    /// A registry refused a name.
    #[error("name '{name}' is {reason}")]
    InvalidName {
        /// The refused name.
        name: String,
        /// Which check refused it.
        reason: NameRejection,
    },
    /// JSON data used to build a store was not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },
}

impl OverlayError {
    /// Returns the rejection reason if this is an [`OverlayError::InvalidName`].
    #[must_use]
    pub fn name_rejection(&self) -> Option<NameRejection> {
        match self {
            Self::InvalidName { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn invalid_name_messages_differ_by_reason() {
        let reserved = OverlayError::InvalidName {
            name: "active".into(),
            reason: NameRejection::Reserved,
        };
        let empty = OverlayError::InvalidName {
            name: String::new(),
            reason: NameRejection::NullOrInconsistent,
        };

        assert!(reserved.to_string().contains("reserved"));
        assert!(empty.to_string().contains("null or not consistent"));
        assert_ne!(reserved.to_string(), empty.to_string());
    }

    #[test]
    fn name_rejection_accessor() {
        let err = OverlayError::InvalidName {
            name: "colors".into(),
            reason: NameRejection::Reserved,
        };
        assert_eq!(err.name_rejection(), Some(NameRejection::Reserved));
        assert_eq!(OverlayError::EmptyKey.name_rejection(), None);
    }
}
