// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plugin options: the legend and the title.

use alloc::string::String;
use alloc::vec::Vec;

use understory_overlay::{ConfigNode, Key, KeyEnum, Node};

use crate::display::HasDisplay;
use crate::enums::{Align, Position};
use crate::error::ChartOptionsError;
use crate::font::Font;
use crate::keys::{
    ALIGN, BOX_WIDTH, COLOR, FULL_SIZE, LABELS, LEGEND, PADDING, POSITION, REVERSE, TEXT, TITLE,
};

/// The `plugins` object.
///
/// Any plugin can be turned off by storing `false` in place of its options,
/// and turned back on later:
///
/// ```rust
/// use understory_chart_options::{ConfigNode, Options};
///
/// let options = Options::new();
/// let plugins = options.plugins();
///
/// plugins.set_enabled("legend", false).unwrap();
/// assert_eq!(
///     options.to_json_string().unwrap(),
///     r#"{"plugins":{"legend":false}}"#,
/// );
///
/// plugins.set_enabled("legend", true).unwrap();
/// assert!(plugins.is_enabled("legend"));
/// assert_eq!(options.to_json_string().unwrap(), r#"{"plugins":{}}"#);
/// ```
#[derive(Clone, Debug)]
pub struct Plugins {
    node: Node,
}

impl Plugins {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Returns the legend options.
    #[must_use]
    pub fn legend(&self) -> Legend {
        Legend {
            node: self.node.child(&LEGEND, self.node.defaults().child(&LEGEND)),
        }
    }

    /// Returns the title options.
    #[must_use]
    pub fn title(&self) -> Title {
        Title {
            node: self.node.child(&TITLE, self.node.defaults().child(&TITLE)),
        }
    }

    /// Turns the plugin `id` on or off.
    ///
    /// Turning a plugin back on restores its options if any were set, and
    /// otherwise removes the entry so the chart library's default applies.
    ///
    /// # Errors
    ///
    /// Fails if `id` is empty.
    pub fn set_enabled(&self, id: &str, enabled: bool) -> Result<(), ChartOptionsError> {
        let key = Key::new(id)?;
        if enabled {
            self.node.enable_entry(&key);
        } else {
            self.node.disable_entry(&key);
        }
        Ok(())
    }

    /// Returns `false` only if the plugin `id` is turned off.
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        Key::new(id).is_ok_and(|key| self.node.is_entry_enabled(&key))
    }
}

impl ConfigNode for Plugins {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Legend options.
#[derive(Clone, Debug)]
pub struct Legend {
    node: Node,
}

impl Legend {
    /// Sets the side of the chart the legend is drawn on.
    pub fn set_position(&self, position: Position) {
        self.node.set_value_and_attach(&POSITION, position.value());
    }

    /// Returns the side of the chart the legend is drawn on.
    #[must_use]
    pub fn position(&self) -> Position {
        self.node.resolve_enum(&POSITION, Position::Top)
    }

    /// Sets the alignment of the legend.
    pub fn set_align(&self, align: Align) {
        self.node.set_value_and_attach(&ALIGN, align.value());
    }

    /// Returns the alignment of the legend.
    #[must_use]
    pub fn align(&self) -> Align {
        self.node.resolve_enum(&ALIGN, Align::Center)
    }

    /// Shows datasets in reverse order.
    pub fn set_reverse(&self, reverse: bool) {
        self.node.set_value_and_attach(&REVERSE, reverse);
    }

    /// Returns `true` if datasets are shown in reverse order.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.node.resolve(&REVERSE, false)
    }

    /// Takes the full width or height of the canvas.
    pub fn set_full_size(&self, full_size: bool) {
        self.node.set_value_and_attach(&FULL_SIZE, full_size);
    }

    /// Returns `true` if the legend takes the full width or height.
    #[must_use]
    pub fn is_full_size(&self) -> bool {
        self.node.resolve(&FULL_SIZE, true)
    }

    /// Returns the label options.
    #[must_use]
    pub fn labels(&self) -> LegendLabels {
        LegendLabels {
            node: self.node.child(&LABELS, self.node.defaults().child(&LABELS)),
        }
    }
}

impl ConfigNode for Legend {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl HasDisplay for Legend {}

/// Options of the legend labels.
#[derive(Clone, Debug)]
pub struct LegendLabels {
    node: Node,
}

impl LegendLabels {
    /// Sets the width of the colored box.
    pub fn set_box_width(&self, width: u32) {
        self.node.set_value_and_attach(&BOX_WIDTH, width);
    }

    /// Returns the width of the colored box.
    #[must_use]
    pub fn box_width(&self) -> u32 {
        self.node.resolve(&BOX_WIDTH, 40)
    }

    /// Sets the padding between labels.
    pub fn set_padding(&self, padding: u32) {
        self.node.set_value_and_attach(&PADDING, padding);
    }

    /// Returns the padding between labels.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.node.resolve(&PADDING, 10)
    }

    /// Sets the text color.
    pub fn set_color(&self, color: &str) {
        self.node.set_value_and_attach(&COLOR, color);
    }

    /// Returns the text color.
    #[must_use]
    pub fn color(&self) -> String {
        self.node.resolve(&COLOR, String::new())
    }

    /// Returns the label font.
    #[must_use]
    pub fn font(&self) -> Font {
        Font::of(&self.node)
    }
}

impl ConfigNode for LegendLabels {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Title options.
#[derive(Clone, Debug)]
pub struct Title {
    node: Node,
}

impl Title {
    /// Sets the title text, one entry per line.
    ///
    /// A single line is stored as a string and several as an array. No lines
    /// removes the text.
    pub fn set_text<S: AsRef<str>>(&self, lines: &[S]) {
        self.node
            .set_value_or_array(&TEXT, lines.iter().map(|line| line.as_ref()));
        self.node.attach();
    }

    /// Returns the title lines.
    #[must_use]
    pub fn text(&self) -> Vec<String> {
        let mut lines = self.node.get_value_or_array(&TEXT, String::new());
        lines.retain(|line| !line.is_empty());
        lines
    }

    /// Sets the side of the chart the title is drawn on.
    pub fn set_position(&self, position: Position) {
        self.node.set_value_and_attach(&POSITION, position.value());
    }

    /// Returns the side of the chart the title is drawn on.
    #[must_use]
    pub fn position(&self) -> Position {
        self.node.resolve_enum(&POSITION, Position::Top)
    }

    /// Sets the alignment of the title.
    pub fn set_align(&self, align: Align) {
        self.node.set_value_and_attach(&ALIGN, align.value());
    }

    /// Returns the alignment of the title.
    #[must_use]
    pub fn align(&self) -> Align {
        self.node.resolve_enum(&ALIGN, Align::Center)
    }

    /// Sets the padding around the title.
    pub fn set_padding(&self, padding: u32) {
        self.node.set_value_and_attach(&PADDING, padding);
    }

    /// Returns the padding around the title.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.node.resolve(&PADDING, 10)
    }

    /// Sets the text color.
    pub fn set_color(&self, color: &str) {
        self.node.set_value_and_attach(&COLOR, color);
    }

    /// Returns the text color.
    #[must_use]
    pub fn color(&self) -> String {
        self.node.resolve(&COLOR, String::new())
    }

    /// Returns the title font.
    #[must_use]
    pub fn font(&self) -> Font {
        Font::of(&self.node)
    }
}

impl ConfigNode for Title {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl HasDisplay for Title {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DisplayMode, NamedWeight};
    use crate::font::FontWeight;
    use crate::Options;
    use understory_overlay::Value;

    #[test]
    fn title_text_single_or_array() {
        let title = Options::new().plugins().title();
        assert!(title.text().is_empty());
        title.set_text(&["Sales"]);
        assert_eq!(title.node().get_value(&TEXT), Some(Value::from("Sales")));
        title.set_text(&["Sales", "2024"]);
        assert_eq!(title.text(), ["Sales", "2024"]);
        title.set_text::<&str>(&[]);
        assert!(!title.node().has(&TEXT));
    }

    #[test]
    fn legend_and_title_defaults() {
        let plugins = Options::new().plugins();
        assert_eq!(plugins.legend().display_mode(), DisplayMode::True);
        assert_eq!(plugins.title().display_mode(), DisplayMode::False);
        assert_eq!(plugins.legend().labels().box_width(), 40);
        assert_eq!(
            plugins.title().font().weight(),
            FontWeight::Named(NamedWeight::Bold)
        );
    }

    #[test]
    fn customized_plugin_is_restored() {
        let options = Options::new();
        let plugins = options.plugins();
        plugins.legend().set_position(Position::Bottom);
        plugins.set_enabled("legend", false).unwrap();
        assert!(!plugins.is_enabled("legend"));
        plugins.set_enabled("legend", true).unwrap();
        assert_eq!(plugins.legend().position(), Position::Bottom);
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"plugins":{"legend":{"position":"bottom"}}}"#
        );
    }
}
