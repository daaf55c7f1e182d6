// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill values and their multi-shape storage.
//!
//! A fill is stored under one key in one of several shapes: a boolean, a
//! [`PredefinedFill`] string, an absolute dataset index number, a signed
//! relative index string, a baseline object or a fill colors object. Because
//! the raw value does not always tell which of these the caller meant, every
//! write also records a [`FillingMode`] under a private discriminator key.
//!
//! Reads trust the discriminator only as far as the stored value agrees with
//! it. When the two disagree (for instance because the consuming library
//! replaced the value), the fill falls back to the defaults.
//!
//! ```rust
//! use understory_chart_options::{ConfigNode, Fill, Options};
//!
//! let options = Options::new();
//! let line = options.elements().line();
//!
//! line.fill_handler().set_fill(Fill::Relative(-1));
//! assert_eq!(line.fill_handler().fill(), Fill::Relative(-1));
//! assert_eq!(
//!     line.to_json().unwrap(),
//!     serde_json::json!({ "fill": "-1", "charbaFillingMode": "relativeDatasetIndex" }),
//! );
//! ```

use alloc::format;
use alloc::string::String;
use core::fmt;

use tracing::debug;
use understory_overlay::{
    ConfigNode, Defaults, FromValue, Key, KeyEnum, Node, PropertyHandler, Value, ValueKind,
};

use crate::enums::{FillingMode, PredefinedFill};
use crate::keys::{ABOVE, BELOW, CHARBA_FILLING_MODE, FILL, TARGET, VALUE};

/// How the area of a line is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    /// No fill. Stored as `false`.
    Disabled,
    /// Fill to the origin. Also what a stored `true` reads back as.
    Origin,
    /// Fill to the start of the scale.
    Start,
    /// Fill to the end of the scale.
    End,
    /// Fill to the stacked dataset below.
    Stack,
    /// Fill the shape of the line.
    Shape,
    /// Fill to the dataset at this index.
    Absolute(u32),
    /// Fill to the dataset this many positions away. Zero is not a target.
    Relative(i32),
}

impl Fill {
    /// Returns the filling mode this fill is stored with.
    #[must_use]
    pub fn mode(self) -> FillingMode {
        match self {
            Self::Disabled => FillingMode::PredefinedBoolean,
            Self::Origin | Self::Start | Self::End | Self::Stack | Self::Shape => {
                FillingMode::Predefined
            }
            Self::Absolute(_) => FillingMode::AbsoluteDatasetIndex,
            Self::Relative(_) => FillingMode::RelativeDatasetIndex,
        }
    }

    /// Returns the named target, if this fill has one.
    #[must_use]
    pub fn predefined(self) -> Option<PredefinedFill> {
        match self {
            Self::Origin => Some(PredefinedFill::Origin),
            Self::Start => Some(PredefinedFill::Start),
            Self::End => Some(PredefinedFill::End),
            Self::Stack => Some(PredefinedFill::Stack),
            Self::Shape => Some(PredefinedFill::Shape),
            _ => None,
        }
    }

    /// Parses a signed relative index such as `"+1"` or `"-2"`.
    ///
    /// The sign is mandatory and zero is refused.
    #[must_use]
    pub fn parse_relative(value: &str) -> Option<Self> {
        if !value.starts_with(['+', '-']) {
            return None;
        }
        match value.parse::<i32>() {
            Ok(0) | Err(_) => None,
            Ok(index) => Some(Self::Relative(index)),
        }
    }
}

impl From<PredefinedFill> for Fill {
    fn from(fill: PredefinedFill) -> Self {
        match fill {
            PredefinedFill::Origin => Self::Origin,
            PredefinedFill::Start => Self::Start,
            PredefinedFill::End => Self::End,
            PredefinedFill::Stack => Self::Stack,
            PredefinedFill::Shape => Self::Shape,
        }
    }
}

impl From<bool> for Fill {
    fn from(fill: bool) -> Self {
        if fill { Self::Origin } else { Self::Disabled }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("false"),
            Self::Absolute(index) => write!(f, "{index}"),
            Self::Relative(index) => write!(f, "{index:+}"),
            fill => match fill.predefined() {
                Some(predefined) => f.write_str(predefined.value()),
                None => Ok(()),
            },
        }
    }
}

/// Decodes a fill by the dynamic kind of the value alone.
///
/// Used for default values, which carry no discriminator.
impl FromValue for Fill {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(fill) => Some(Self::from(*fill)),
            Value::Number(_) => u32::from_value(value).map(Self::Absolute),
            Value::String(s) => PredefinedFill::from_value(s)
                .map(Self::from)
                .or_else(|| Self::parse_relative(s)),
            _ => None,
        }
    }
}

/// Fill between a target and the line with distinct colors above and below.
#[derive(Clone, Debug, PartialEq)]
pub struct FillColors {
    /// What the area is filled to.
    pub target: Fill,
    /// Color of the area above the target.
    pub above: Option<String>,
    /// Color of the area below the target.
    pub below: Option<String>,
}

impl FillColors {
    /// Creates fill colors to `target` with no colors set.
    #[must_use]
    pub fn new(target: Fill) -> Self {
        Self {
            target,
            above: None,
            below: None,
        }
    }

    /// Sets the color above the target.
    #[must_use]
    pub fn above(mut self, color: impl Into<String>) -> Self {
        self.above = Some(color.into());
        self
    }

    /// Sets the color below the target.
    #[must_use]
    pub fn below(mut self, color: impl Into<String>) -> Self {
        self.below = Some(color.into());
        self
    }
}

/// Reads and writes a fill on its owner node.
#[derive(Clone, Debug)]
pub struct FillHandler {
    handler: PropertyHandler,
    key: Key,
}

impl FillHandler {
    /// Creates a handler storing the fill of `owner` under `fill`.
    #[must_use]
    pub fn new(owner: &Node, defaults: Defaults) -> Self {
        Self::with_key(owner, defaults, FILL)
    }

    /// Creates a handler storing the fill under `key`.
    ///
    /// Fill colors keep their target under `target` instead of `fill`.
    #[must_use]
    pub fn with_key(owner: &Node, defaults: Defaults, key: Key) -> Self {
        Self {
            handler: PropertyHandler::new(owner, defaults),
            key,
        }
    }

    /// Returns the key the fill is stored under.
    #[must_use]
    #[inline]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the filling mode recorded by the last write.
    #[must_use]
    pub fn filling_mode(&self) -> Option<FillingMode> {
        self.handler
            .get_value(&CHARBA_FILLING_MODE)
            .as_ref()
            .and_then(Value::as_str)
            .and_then(FillingMode::from_value)
    }

    /// Returns the default fill.
    #[must_use]
    pub fn default_fill(&self) -> Fill {
        self.handler
            .defaults()
            .get(&self.key)
            .and_then(Fill::from_value)
            .unwrap_or(Fill::Disabled)
    }

    fn record(&self, mode: FillingMode) {
        self.handler
            .owner()
            .set_value(&CHARBA_FILLING_MODE, mode.value());
    }

    // --- Scalar fills -------------------------------------------------------

    /// Stores `fill` with its filling mode.
    ///
    /// `Fill::Relative(0)` names no dataset and is ignored.
    pub fn set_fill(&self, fill: Fill) {
        match fill {
            Fill::Disabled => self.handler.set_value(&self.key, false),
            Fill::Absolute(index) => self.handler.set_value(&self.key, index),
            Fill::Relative(0) => {
                debug!(key = %self.key, "relative fill index 0 ignored");
                return;
            }
            Fill::Relative(index) => self.handler.set_value(&self.key, format!("{index:+}")),
            predefined => {
                let Some(name) = predefined.predefined() else {
                    return;
                };
                self.handler.set_value(&self.key, name.value());
            }
        }
        self.record(fill.mode());
    }

    /// Stores a boolean fill. `true` reads back as [`Fill::Origin`].
    pub fn set_fill_bool(&self, fill: bool) {
        self.handler.set_value(&self.key, fill);
        self.record(FillingMode::PredefinedBoolean);
    }

    /// Returns the stored fill.
    ///
    /// Baseline and colors fills, a missing discriminator, or a stored value
    /// whose kind contradicts the discriminator all yield the default fill.
    #[must_use]
    pub fn fill(&self) -> Fill {
        let stored = match self.filling_mode() {
            Some(FillingMode::PredefinedBoolean) => self
                .handler
                .get_value(&self.key)
                .and_then(|value| value.as_bool())
                .map(Fill::from),
            Some(FillingMode::Predefined) => self
                .handler
                .get_value(&self.key)
                .as_ref()
                .and_then(Value::as_str)
                .and_then(PredefinedFill::from_value)
                .map(Fill::from),
            Some(FillingMode::AbsoluteDatasetIndex) => self
                .handler
                .get_value(&self.key)
                .as_ref()
                .and_then(u32::from_value)
                .map(Fill::Absolute),
            Some(FillingMode::RelativeDatasetIndex) => self
                .handler
                .get_value(&self.key)
                .as_ref()
                .and_then(Value::as_str)
                .and_then(Fill::parse_relative),
            Some(FillingMode::Baseline | FillingMode::Colors) | None => None,
        };
        stored.unwrap_or_else(|| self.default_fill())
    }

    // --- Object fills -------------------------------------------------------

    /// Returns the object stored under the fill key, cleared unless it
    /// already holds a fill of `mode`.
    fn object(&self, mode: FillingMode) -> Node {
        let object = self.handler.owner().child(&self.key, Defaults::empty());
        let reusable =
            self.filling_mode() == Some(mode) && self.handler.kind(&self.key) == ValueKind::Object;
        if !reusable {
            for key in object.keys() {
                object.remove(&key);
            }
        }
        object
    }

    fn stored_object(&self, mode: FillingMode) -> Option<Node> {
        if self.filling_mode() != Some(mode) || self.handler.kind(&self.key) != ValueKind::Object {
            return None;
        }
        Some(self.handler.owner().child(&self.key, Defaults::empty()))
    }

    /// Fills to a horizontal line at `baseline`.
    ///
    /// Stored as an object `{ value }` under the fill key.
    pub fn set_fill_baseline(&self, baseline: f64) {
        let object = self.object(FillingMode::Baseline);
        object.set_value_and_attach(&VALUE, baseline);
        self.record(FillingMode::Baseline);
    }

    /// Returns the baseline, if the fill was last set to one.
    #[must_use]
    pub fn fill_baseline(&self) -> Option<f64> {
        self.stored_object(FillingMode::Baseline)?
            .get_value(&VALUE)
            .and_then(|value| value.as_f64())
    }

    /// Fills to a target with distinct colors above and below it.
    ///
    /// Stored as an object `{ target, above, below }` under the fill key.
    pub fn set_fill_colors(&self, colors: &FillColors) {
        let object = self.object(FillingMode::Colors);
        FillHandler::with_key(&object, Defaults::empty(), TARGET).set_fill(colors.target);
        for (key, color) in [(ABOVE, &colors.above), (BELOW, &colors.below)] {
            match color {
                Some(color) => object.set_value(&key, color.as_str()),
                None => {
                    object.remove(&key);
                }
            }
        }
        object.attach();
        self.record(FillingMode::Colors);
    }

    /// Returns the fill colors, if the fill was last set to them.
    #[must_use]
    pub fn fill_colors(&self) -> Option<FillColors> {
        let object = self.stored_object(FillingMode::Colors)?;
        let color = |key: &Key| {
            object
                .get_value(key)
                .as_ref()
                .and_then(Value::as_str)
                .map(String::from)
        };
        Some(FillColors {
            target: FillHandler::with_key(&object, Defaults::empty(), TARGET).fill(),
            above: color(&ABOVE),
            below: color(&BELOW),
        })
    }
}

impl ConfigNode for FillHandler {
    #[inline]
    fn node(&self) -> &Node {
        self.handler.owner()
    }
}
