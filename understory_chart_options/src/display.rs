// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `display` property shared by scales, grids, ticks, legends and titles.
//!
//! `display` is stored as a boolean, or as the string `"auto"`. Reads look
//! at the kind of the stored value first, so both shapes round trip.
//!
//! ```rust
//! use understory_chart_options::{DisplayMode, HasDisplay, Options};
//!
//! let options = Options::new();
//! let legend = options.plugins().legend();
//!
//! legend.set_display_mode(DisplayMode::Auto);
//! assert_eq!(legend.display_mode(), DisplayMode::Auto);
//!
//! legend.set_display(false);
//! assert_eq!(legend.display_mode(), DisplayMode::False);
//! assert!(!legend.is_display());
//! ```

use understory_overlay::{ConfigNode, FromValue, KeyEnum, Value};

use crate::enums::DisplayMode;
use crate::keys::DISPLAY;

impl FromValue for DisplayMode {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(display) => Some(Self::from(*display)),
            Value::String(mode) => <Self as KeyEnum>::from_value(mode),
            _ => None,
        }
    }
}

/// Typed access to the `display` property of a node.
pub trait HasDisplay: ConfigNode {
    /// Shows or hides the element.
    fn set_display(&self, display: bool) {
        self.node().set_value_and_attach(&DISPLAY, display);
    }

    /// Sets the display mode. [`DisplayMode::Auto`] is stored as `"auto"`,
    /// the others as booleans.
    fn set_display_mode(&self, mode: DisplayMode) {
        match mode {
            DisplayMode::True => self.set_display(true),
            DisplayMode::False => self.set_display(false),
            DisplayMode::Auto => self
                .node()
                .set_value_and_attach(&DISPLAY, DisplayMode::Auto.value()),
        }
    }

    /// Returns the display mode, from the store or else from the defaults.
    fn display_mode(&self) -> DisplayMode {
        self.node().resolve(&DISPLAY, DisplayMode::True)
    }

    /// Returns `false` only if the element is hidden. `"auto"` counts as
    /// shown.
    fn is_display(&self) -> bool {
        self.display_mode() != DisplayMode::False
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_overlay::{Defaults, DefaultsBuilder, Node};

    struct Boxed(Node);

    impl ConfigNode for Boxed {
        fn node(&self) -> &Node {
            &self.0
        }
    }

    impl HasDisplay for Boxed {}

    #[test]
    fn bool_and_auto_shapes() {
        let boxed = Boxed(Node::new_root(Defaults::empty()));
        assert_eq!(boxed.display_mode(), DisplayMode::True);
        boxed.set_display_mode(DisplayMode::Auto);
        assert_eq!(boxed.node().get_value(&DISPLAY), Some(Value::from("auto")));
        assert_eq!(boxed.display_mode(), DisplayMode::Auto);
        boxed.set_display_mode(DisplayMode::False);
        assert_eq!(boxed.node().get_value(&DISPLAY), Some(Value::Bool(false)));
        assert!(!boxed.is_display());
    }

    #[test]
    fn defaults_decode_by_kind() {
        let defaults = DefaultsBuilder::new().set(DISPLAY, false).build();
        let boxed = Boxed(Node::new_root(defaults));
        assert_eq!(boxed.display_mode(), DisplayMode::False);
        boxed.node().set_value(&DISPLAY, 4);
        assert_eq!(boxed.display_mode(), DisplayMode::False);
    }
}
