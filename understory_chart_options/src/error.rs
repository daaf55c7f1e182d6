// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option model errors.

use alloc::string::String;
use thiserror::Error;
use understory_overlay::OverlayError;

/// Errors raised while building option objects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChartOptionsError {
    /// The underlying node, key or registry refused the request.
    #[error(transparent)]
    Overlay(#[from] OverlayError),
    /// A scale was added under an id that is already in use.
    #[error("a scale with id {0} has been already added")]
    DuplicateScaleId(String),
}
