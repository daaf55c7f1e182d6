// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font options.

use alloc::string::String;

use understory_overlay::{ConfigNode, FromValue, KeyEnum, Node, Value};

use crate::enums::{FontStyle, NamedWeight};
use crate::keys::{FAMILY, FONT, LINE_HEIGHT, SIZE, STYLE, WEIGHT};

/// Weight of a font, by name or by number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FontWeight {
    /// A named weight, stored as a string.
    Named(NamedWeight),
    /// A numeric weight such as `400`, stored as a number.
    Numeric(u32),
}

impl From<NamedWeight> for FontWeight {
    fn from(weight: NamedWeight) -> Self {
        Self::Named(weight)
    }
}

impl FromValue for FontWeight {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => NamedWeight::from_value(name).map(Self::Named),
            Value::Number(_) => u32::from_value(value).map(Self::Numeric),
            _ => None,
        }
    }
}

/// The `font` object of a box, tick or label.
#[derive(Clone, Debug)]
pub struct Font {
    node: Node,
}

impl Font {
    /// Returns the font of `owner`, using the owner's font defaults.
    pub(crate) fn of(owner: &Node) -> Self {
        Self {
            node: owner.child(&FONT, owner.defaults().child(&FONT)),
        }
    }

    /// Sets the size in pixels.
    pub fn set_size(&self, size: u32) {
        self.node.set_value_and_attach(&SIZE, size);
    }

    /// Returns the size in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.node.resolve(&SIZE, 12)
    }

    /// Sets the font family.
    pub fn set_family(&self, family: &str) {
        self.node.set_value_and_attach(&FAMILY, family);
    }

    /// Returns the font family.
    #[must_use]
    pub fn family(&self) -> String {
        self.node.resolve(&FAMILY, String::new())
    }

    /// Sets the style.
    pub fn set_style(&self, style: FontStyle) {
        self.node.set_value_and_attach(&STYLE, style.value());
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> FontStyle {
        self.node.resolve_enum(&STYLE, FontStyle::Normal)
    }

    /// Sets the weight.
    pub fn set_weight(&self, weight: impl Into<FontWeight>) {
        match weight.into() {
            FontWeight::Named(name) => self.node.set_value_and_attach(&WEIGHT, name.value()),
            FontWeight::Numeric(weight) => self.node.set_value_and_attach(&WEIGHT, weight),
        }
    }

    /// Returns the weight, read by the kind of the stored value.
    #[must_use]
    pub fn weight(&self) -> FontWeight {
        self.node
            .resolve(&WEIGHT, FontWeight::Named(NamedWeight::Normal))
    }

    /// Sets the line height as a multiple of the size.
    pub fn set_line_height(&self, line_height: f64) {
        self.node.set_value_and_attach(&LINE_HEIGHT, line_height);
    }

    /// Returns the line height as a multiple of the size.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.node.resolve(&LINE_HEIGHT, 1.2)
    }
}

impl ConfigNode for Font {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_overlay::{DefaultsBuilder, Key};

    const TITLE: Key = Key::from_static("title");

    fn title_font() -> (Node, Font) {
        let font_defaults = DefaultsBuilder::new()
            .set(SIZE, 14)
            .set(WEIGHT, "bold")
            .build();
        let defaults = DefaultsBuilder::new()
            .child(
                TITLE,
                DefaultsBuilder::new().child(FONT, font_defaults).build(),
            )
            .build();
        let root = Node::new_root(defaults.clone());
        let title = root.child(&TITLE, defaults.child(&TITLE));
        let font = Font::of(&title);
        (root, font)
    }

    #[test]
    fn reads_fall_back_to_font_defaults() {
        let (_, font) = title_font();
        assert_eq!(font.size(), 14);
        assert_eq!(font.weight(), FontWeight::Named(NamedWeight::Bold));
        assert_eq!(font.style(), FontStyle::Normal);
    }

    #[test]
    fn weight_is_read_by_kind() {
        let (root, font) = title_font();
        font.set_weight(FontWeight::Numeric(700));
        assert_eq!(font.weight(), FontWeight::Numeric(700));
        font.set_weight(NamedWeight::Lighter);
        assert_eq!(font.weight(), FontWeight::Named(NamedWeight::Lighter));
        assert_eq!(
            root.to_json_string().unwrap(),
            r#"{"title":{"font":{"weight":"lighter"}}}"#
        );
    }

    #[test]
    fn setters_attach_through_owner() {
        let (_, font) = title_font();
        assert!(!font.is_attached());
        font.set_size(18);
        assert!(font.is_attached());
        assert_eq!(font.size(), 18);
    }
}
