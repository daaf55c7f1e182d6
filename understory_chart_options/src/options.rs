// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The root of the option tree.

use understory_overlay::{ConfigNode, Defaults, Document, KeyEnum, Node};

use crate::animation::{Animation, Animations, Transitions};
use crate::defaults::chart_defaults;
use crate::elements::Elements;
use crate::enums::IndexAxis;
use crate::error::ChartOptionsError;
use crate::keys::{
    ANIMATION, ASPECT_RATIO, ELEMENTS, INDEX_AXIS, MAINTAIN_ASPECT_RATIO, PLUGINS, RESPONSIVE,
    SCALES,
};
use crate::plugins::Plugins;
use crate::scales::Scales;

/// The options of one chart.
///
/// Every accessor returns a lightweight handle onto the same document, so
/// handles can be requested as often as needed:
///
/// ```rust
/// use understory_chart_options::{ConfigNode, Options};
///
/// let options = Options::new();
/// options.set_responsive(false);
/// options.plugins().title().set_text(&["Sales"]);
///
/// assert_eq!(
///     options.to_json_string().unwrap(),
///     r#"{"responsive":false,"plugins":{"title":{"text":"Sales"}}}"#,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    node: Node,
}

impl Options {
    /// Creates empty options backed by the chart library defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(chart_defaults())
    }

    /// Creates empty options backed by `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            node: Document::new().root(defaults),
        }
    }

    /// Wraps options the chart library already holds.
    ///
    /// # Errors
    ///
    /// Fails if `json` is not an object.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ChartOptionsError> {
        let node = Document::from_json(json, chart_defaults())?;
        Ok(Self { node })
    }

    /// Resizes the chart with its container.
    pub fn set_responsive(&self, responsive: bool) {
        self.node.set_value_and_attach(&RESPONSIVE, responsive);
    }

    /// Returns `true` if the chart resizes with its container.
    #[must_use]
    pub fn is_responsive(&self) -> bool {
        self.node.resolve(&RESPONSIVE, true)
    }

    /// Keeps the aspect ratio when resizing.
    pub fn set_maintain_aspect_ratio(&self, maintain: bool) {
        self.node.set_value_and_attach(&MAINTAIN_ASPECT_RATIO, maintain);
    }

    /// Returns `true` if the aspect ratio is kept when resizing.
    #[must_use]
    pub fn is_maintain_aspect_ratio(&self) -> bool {
        self.node.resolve(&MAINTAIN_ASPECT_RATIO, true)
    }

    /// Sets the ratio of width to height.
    pub fn set_aspect_ratio(&self, ratio: f64) {
        self.node.set_value_and_attach(&ASPECT_RATIO, ratio);
    }

    /// Returns the ratio of width to height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.node.resolve(&ASPECT_RATIO, 2.0)
    }

    /// Sets the axis data is indexed along.
    pub fn set_index_axis(&self, axis: IndexAxis) {
        self.node.set_value_and_attach(&INDEX_AXIS, axis.value());
    }

    /// Returns the axis data is indexed along.
    #[must_use]
    pub fn index_axis(&self) -> IndexAxis {
        self.node.resolve_enum(&INDEX_AXIS, IndexAxis::X)
    }

    // --- Children -----------------------------------------------------------

    /// Returns the scales.
    #[must_use]
    pub fn scales(&self) -> Scales {
        Scales::new(self.node.child(&SCALES, self.node.defaults().child(&SCALES)))
    }

    /// Returns the plugin options.
    #[must_use]
    pub fn plugins(&self) -> Plugins {
        Plugins::new(self.node.child(&PLUGINS, self.node.defaults().child(&PLUGINS)))
    }

    /// Returns the element options.
    #[must_use]
    pub fn elements(&self) -> Elements {
        Elements::new(
            self.node
                .child(&ELEMENTS, self.node.defaults().child(&ELEMENTS)),
        )
    }

    /// Returns the timing of all animations.
    #[must_use]
    pub fn animation(&self) -> Animation {
        Animation::of(&self.node)
    }

    /// Returns the animated collections and properties.
    #[must_use]
    pub fn animations(&self) -> Animations {
        Animations::of(&self.node)
    }

    /// Returns the animation settings per update mode.
    #[must_use]
    pub fn transitions(&self) -> Transitions {
        Transitions::of(&self.node)
    }

    /// Turns all animations on or off.
    ///
    /// Turning them off stores `false` as the `animation` object; turning
    /// them back on restores the timing set before, if any.
    pub fn set_animation_enabled(&self, enabled: bool) {
        if enabled {
            self.node.enable_entry(&ANIMATION);
        } else {
            self.node.disable_entry(&ANIMATION);
        }
    }

    /// Returns `false` only if all animations are turned off.
    #[must_use]
    pub fn is_animation_enabled(&self) -> bool {
        self.node.is_entry_enabled(&ANIMATION)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigNode for Options {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationTiming;
    use crate::display::HasDisplay;
    use crate::enums::DisplayMode;

    #[test]
    fn root_reads_fall_back_to_chart_defaults() {
        let options = Options::new();
        assert!(options.is_responsive());
        assert_eq!(options.aspect_ratio(), 2.0);
        assert_eq!(options.index_axis(), IndexAxis::X);
        assert_eq!(options.to_json_string().unwrap(), "{}");
    }

    #[test]
    fn imported_options_read_through() {
        let json = serde_json::json!({
            "indexAxis": "y",
            "scales": { "x": { "display": "auto" } },
        });
        let options = Options::from_json(&json).unwrap();
        assert_eq!(options.index_axis(), IndexAxis::Y);
        let x = options.scales().get_axis("x").unwrap();
        assert!(x.is_attached());
        assert_eq!(x.display_mode(), DisplayMode::Auto);
        assert!(Options::from_json(&serde_json::json!([1])).is_err());
    }

    #[test]
    fn animation_toggle_restores_timing() {
        let options = Options::new();
        options.animation().set_duration(250);
        options.set_animation_enabled(false);
        assert!(!options.is_animation_enabled());
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"animation":false}"#
        );
        options.set_animation_enabled(true);
        assert_eq!(options.animation().duration(), 250);
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"animation":{"duration":250}}"#
        );
    }
}
