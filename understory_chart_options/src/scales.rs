// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales, their ticks and their grid lines.
//!
//! [`Scales`] is the `scales` object of the options, keyed by scale id.
//! Asking for a scale with [`Scales::axis`] creates its node lazily: nothing
//! appears under `scales` until a value is set on it.
//!
//! ```rust
//! use understory_chart_options::{ConfigNode, DisplayMode, HasDisplay, Options};
//!
//! let options = Options::new();
//! let x = options.scales().axis("x").unwrap();
//! assert!(!x.is_attached());
//!
//! x.set_display_mode(DisplayMode::Auto);
//! x.set_begin_at_zero(true);
//! assert_eq!(
//!     options.to_json_string().unwrap(),
//!     r#"{"scales":{"x":{"display":"auto","beginAtZero":true}}}"#,
//! );
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use understory_overlay::{ConfigNode, Defaults, FromValue, Key, KeyEnum, Node, Value, ValueKind};

use crate::display::HasDisplay;
use crate::enums::{AxisType, Position};
use crate::error::ChartOptionsError;
use crate::font::Font;
use crate::keys::{
    BEGIN_AT_ZERO, CHARBA_MAX_INDEX, CHARBA_MIN_INDEX, COLOR, DRAW_ON_CHART_AREA, DRAW_TICKS,
    GRACE, GRID, LINE_WIDTH, MAX, MAX_TICKS_LIMIT, MIN, OFFSET, PADDING, POSITION, R, REVERSE,
    STACKED, STEP_SIZE, SUGGESTED_MAX, SUGGESTED_MIN, TICK_LENGTH, TICKS, TYPE, WEIGHT, X, Y,
};

/// Extra space added to the data range of a scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Grace {
    /// An absolute amount, stored as a number.
    Value(f64),
    /// A percentage of the range, stored as a string such as `"5%"`.
    Percentage(f64),
}

impl FromValue for Grace {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(grace) => Some(Self::Value(*grace)),
            Value::String(grace) => grace
                .strip_suffix('%')
                .and_then(|percent| percent.trim().parse().ok())
                .map(Self::Percentage),
            _ => None,
        }
    }
}

/// The `scales` object, keyed by scale id.
#[derive(Clone, Debug)]
pub struct Scales {
    node: Node,
}

impl Scales {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Returns the defaults of a scale with `id` and `axis_type`.
    ///
    /// Radial scales and the `r` id use the radial defaults, ids starting
    /// with `x` the horizontal ones, and everything else the vertical ones.
    fn defaults_for(&self, id: &str, axis_type: Option<AxisType>) -> Defaults {
        let kind = if axis_type == Some(AxisType::RadialLinear) || id == R.name() {
            R
        } else if id.starts_with('x') {
            X
        } else {
            Y
        };
        self.node.defaults().child(&kind)
    }

    fn key(id: &str) -> Result<Key, ChartOptionsError> {
        Ok(Key::new(id)?)
    }

    /// Returns the scale with `id`, creating it lazily.
    ///
    /// An id that is not stored yet gets a fresh node in the document, kept
    /// until the document is dropped. Use [`get_axis`](Self::get_axis) or
    /// [`has_axis`](Self::has_axis) to look scales up without allocating.
    ///
    /// # Errors
    ///
    /// Fails if `id` is empty.
    pub fn axis(&self, id: &str) -> Result<Scale, ChartOptionsError> {
        let key = Self::key(id)?;
        let defaults = self.defaults_for(id, None);
        Ok(Scale::new(&self.node, key, defaults))
    }

    /// Adds a scale with `id` of `axis_type` and links it into the options.
    ///
    /// # Errors
    ///
    /// Fails if `id` is empty or a scale with `id` is already stored.
    pub fn add_axis(&self, id: &str, axis_type: AxisType) -> Result<Scale, ChartOptionsError> {
        let key = Self::key(id)?;
        if self.node.has(&key) {
            return Err(ChartOptionsError::DuplicateScaleId(String::from(id)));
        }
        let scale = Scale::new(&self.node, key, self.defaults_for(id, Some(axis_type)));
        scale.set_type(axis_type);
        Ok(scale)
    }

    /// Returns the scale with `id` if it is stored.
    #[must_use]
    pub fn get_axis(&self, id: &str) -> Option<Scale> {
        let key = Self::key(id).ok()?;
        if self.node.kind(&key) != ValueKind::Object {
            return None;
        }
        Some(Scale::new(&self.node, key, self.defaults_for(id, None)))
    }

    /// Returns `true` if a scale with `id` is stored.
    #[must_use]
    pub fn has_axis(&self, id: &str) -> bool {
        self.get_axis(id).is_some()
    }

    /// Removes the scale with `id`. Returns `true` if one was stored.
    pub fn remove_axis(&self, id: &str) -> bool {
        Self::key(id).is_ok_and(|key| self.node.remove(&key))
    }

    /// Removes every scale.
    pub fn clear_axes(&self) {
        for key in self.node.keys() {
            self.node.remove(&key);
        }
    }

    /// Returns the stored scales in insertion order.
    #[must_use]
    pub fn axes(&self) -> Vec<Scale> {
        self.node
            .keys()
            .iter()
            .filter_map(|key| self.get_axis(key.name()))
            .collect()
    }
}

impl ConfigNode for Scales {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// One scale.
#[derive(Clone, Debug)]
pub struct Scale {
    node: Node,
    id: Key,
}

impl Scale {
    fn new(scales: &Node, id: Key, defaults: Defaults) -> Self {
        Self {
            node: scales.child(&id, defaults),
            id,
        }
    }

    /// Returns the id the scale is stored under.
    #[must_use]
    #[inline]
    pub fn id(&self) -> &Key {
        &self.id
    }

    /// Sets the kind of scale.
    pub fn set_type(&self, axis_type: AxisType) {
        self.node.set_value_and_attach(&TYPE, axis_type.value());
    }

    /// Returns the kind of scale.
    #[must_use]
    pub fn axis_type(&self) -> AxisType {
        self.node.resolve_enum(&TYPE, AxisType::Linear)
    }

    /// Sets where the scale is drawn.
    pub fn set_position(&self, position: Position) {
        self.node.set_value_and_attach(&POSITION, position.value());
    }

    /// Returns where the scale is drawn.
    #[must_use]
    pub fn position(&self) -> Position {
        self.node.resolve_enum(&POSITION, Position::Left)
    }

    /// Makes the scale include zero.
    pub fn set_begin_at_zero(&self, begin_at_zero: bool) {
        self.node.set_value_and_attach(&BEGIN_AT_ZERO, begin_at_zero);
    }

    /// Returns `true` if the scale includes zero.
    #[must_use]
    pub fn is_begin_at_zero(&self) -> bool {
        self.node.resolve(&BEGIN_AT_ZERO, false)
    }

    /// Reverses the direction of the scale.
    pub fn set_reverse(&self, reverse: bool) {
        self.node.set_value_and_attach(&REVERSE, reverse);
    }

    /// Returns `true` if the scale is reversed.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.node.resolve(&REVERSE, false)
    }

    /// Stacks the datasets drawn on the scale.
    pub fn set_stacked(&self, stacked: bool) {
        self.node.set_value_and_attach(&STACKED, stacked);
    }

    /// Returns `true` if datasets are stacked.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.node.resolve(&STACKED, false)
    }

    /// Adds half a category of space at both edges.
    pub fn set_offset(&self, offset: bool) {
        self.node.set_value_and_attach(&OFFSET, offset);
    }

    /// Returns `true` if the edges are offset.
    #[must_use]
    pub fn is_offset(&self) -> bool {
        self.node.resolve(&OFFSET, false)
    }

    /// Sets the weight used to order scales on the same side.
    pub fn set_weight(&self, weight: f64) {
        self.node.set_value_and_attach(&WEIGHT, weight);
    }

    /// Returns the weight used to order scales on the same side.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.node.resolve(&WEIGHT, 0.0)
    }

    // --- Range --------------------------------------------------------------

    /// Sets the minimum value, discarding a minimum index.
    pub fn set_min(&self, min: f64) {
        self.node.remove(&CHARBA_MIN_INDEX);
        self.node.set_value_and_attach(&MIN, min);
    }

    /// Returns the minimum value, if set.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.node.get_value(&MIN).and_then(|value| value.as_f64())
    }

    /// Sets the maximum value, discarding a maximum index.
    pub fn set_max(&self, max: f64) {
        self.node.remove(&CHARBA_MAX_INDEX);
        self.node.set_value_and_attach(&MAX, max);
    }

    /// Returns the maximum value, if set.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.node.get_value(&MAX).and_then(|value| value.as_f64())
    }

    /// Sets the minimum of a category scale as a label index.
    ///
    /// The index is stored under `min` and mirrored under a private key.
    pub fn set_min_index(&self, index: u32) {
        self.node.set_value(&CHARBA_MIN_INDEX, index);
        self.node.set_value_and_attach(&MIN, index);
    }

    /// Returns the minimum label index.
    ///
    /// `None` unless `min` still equals the mirrored index, which is the case
    /// as long as nothing else overwrote `min`.
    #[must_use]
    pub fn min_index(&self) -> Option<u32> {
        self.index(&MIN, &CHARBA_MIN_INDEX)
    }

    /// Sets the maximum of a category scale as a label index.
    pub fn set_max_index(&self, index: u32) {
        self.node.set_value(&CHARBA_MAX_INDEX, index);
        self.node.set_value_and_attach(&MAX, index);
    }

    /// Returns the maximum label index, like [`min_index`](Self::min_index).
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        self.index(&MAX, &CHARBA_MAX_INDEX)
    }

    fn index(&self, key: &Key, shadow: &Key) -> Option<u32> {
        let value = self.node.get_value(key)?;
        if self.node.get_value(shadow)? != value {
            return None;
        }
        u32::from_value(&value)
    }

    /// Sets a minimum the data may extend beyond.
    pub fn set_suggested_min(&self, min: f64) {
        self.node.set_value_and_attach(&SUGGESTED_MIN, min);
    }

    /// Returns the suggested minimum, if set.
    #[must_use]
    pub fn suggested_min(&self) -> Option<f64> {
        self.node.get_value(&SUGGESTED_MIN).and_then(|value| value.as_f64())
    }

    /// Sets a maximum the data may extend beyond.
    pub fn set_suggested_max(&self, max: f64) {
        self.node.set_value_and_attach(&SUGGESTED_MAX, max);
    }

    /// Returns the suggested maximum, if set.
    #[must_use]
    pub fn suggested_max(&self) -> Option<f64> {
        self.node.get_value(&SUGGESTED_MAX).and_then(|value| value.as_f64())
    }

    /// Sets the grace added to the data range.
    pub fn set_grace(&self, grace: Grace) {
        match grace {
            Grace::Value(value) => self.node.set_value_and_attach(&GRACE, value),
            Grace::Percentage(percent) => self
                .node
                .set_value_and_attach(&GRACE, format!("{percent}%")),
        }
    }

    /// Returns the grace, read by the kind of the stored value.
    #[must_use]
    pub fn grace(&self) -> Grace {
        self.node.resolve(&GRACE, Grace::Value(0.0))
    }

    // --- Children -----------------------------------------------------------

    /// Returns the tick options.
    #[must_use]
    pub fn ticks(&self) -> Ticks {
        Ticks {
            node: self.node.child(&TICKS, self.node.defaults().child(&TICKS)),
        }
    }

    /// Returns the grid line options.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid {
            node: self.node.child(&GRID, self.node.defaults().child(&GRID)),
        }
    }
}

impl ConfigNode for Scale {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl HasDisplay for Scale {}

/// Tick options of a scale.
#[derive(Clone, Debug)]
pub struct Ticks {
    node: Node,
}

impl Ticks {
    /// Sets the padding between tick labels and the axis.
    pub fn set_padding(&self, padding: u32) {
        self.node.set_value_and_attach(&PADDING, padding);
    }

    /// Returns the padding between tick labels and the axis.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.node.resolve(&PADDING, 3)
    }

    /// Sets the color.
    pub fn set_color(&self, color: &str) {
        self.node.set_value_and_attach(&COLOR, color);
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> String {
        self.node.resolve(&COLOR, String::new())
    }

    /// Caps the number of ticks drawn.
    pub fn set_max_ticks_limit(&self, limit: u32) {
        self.node.set_value_and_attach(&MAX_TICKS_LIMIT, limit);
    }

    /// Returns the maximum number of ticks.
    #[must_use]
    pub fn max_ticks_limit(&self) -> u32 {
        self.node.resolve(&MAX_TICKS_LIMIT, 11)
    }

    /// Sets a fixed step between ticks.
    pub fn set_step_size(&self, step: f64) {
        self.node.set_value_and_attach(&STEP_SIZE, step);
    }

    /// Returns the fixed step between ticks, if set.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        self.node.get_value(&STEP_SIZE).and_then(|value| value.as_f64())
    }

    /// Returns the tick label font.
    #[must_use]
    pub fn font(&self) -> Font {
        Font::of(&self.node)
    }
}

impl ConfigNode for Ticks {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl HasDisplay for Ticks {}

/// Grid line options of a scale.
#[derive(Clone, Debug)]
pub struct Grid {
    node: Node,
}

impl Grid {
    /// Sets the color.
    pub fn set_color(&self, color: &str) {
        self.node.set_value_and_attach(&COLOR, color);
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> String {
        self.node.resolve(&COLOR, String::new())
    }

    /// Sets the stroke width of grid lines.
    pub fn set_line_width(&self, width: f64) {
        self.node.set_value_and_attach(&LINE_WIDTH, width);
    }

    /// Returns the stroke width of grid lines.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.node.resolve(&LINE_WIDTH, 1.0)
    }

    /// Draws grid lines inside the chart area, not only next to the axis.
    pub fn set_draw_on_chart_area(&self, draw: bool) {
        self.node.set_value_and_attach(&DRAW_ON_CHART_AREA, draw);
    }

    /// Returns `true` if grid lines cross the chart area.
    #[must_use]
    pub fn is_draw_on_chart_area(&self) -> bool {
        self.node.resolve(&DRAW_ON_CHART_AREA, true)
    }

    /// Draws a short line next to each tick.
    pub fn set_draw_ticks(&self, draw: bool) {
        self.node.set_value_and_attach(&DRAW_TICKS, draw);
    }

    /// Returns `true` if tick lines are drawn.
    #[must_use]
    pub fn is_draw_ticks(&self) -> bool {
        self.node.resolve(&DRAW_TICKS, true)
    }

    /// Sets the length of tick lines.
    pub fn set_tick_length(&self, length: u32) {
        self.node.set_value_and_attach(&TICK_LENGTH, length);
    }

    /// Returns the length of tick lines.
    #[must_use]
    pub fn tick_length(&self) -> u32 {
        self.node.resolve(&TICK_LENGTH, 8)
    }

    /// Adds half a category of space at both edges.
    pub fn set_offset(&self, offset: bool) {
        self.node.set_value_and_attach(&OFFSET, offset);
    }

    /// Returns `true` if the edges are offset.
    #[must_use]
    pub fn is_offset(&self) -> bool {
        self.node.resolve(&OFFSET, false)
    }
}

impl ConfigNode for Grid {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl HasDisplay for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DisplayMode;
    use crate::Options;

    #[test]
    fn axis_defaults_follow_the_id() {
        let scales = Options::new().scales();
        assert_eq!(scales.axis("x").unwrap().position(), Position::Bottom);
        assert_eq!(scales.axis("x2").unwrap().position(), Position::Bottom);
        assert_eq!(scales.axis("y").unwrap().position(), Position::Left);
        assert_eq!(scales.axis("r").unwrap().position(), Position::ChartArea);
        let radar = scales.add_axis("radar", AxisType::RadialLinear).unwrap();
        assert_eq!(radar.position(), Position::ChartArea);
    }

    #[test]
    fn lazy_axis_is_not_stored() {
        let scales = Options::new().scales();
        let x = scales.axis("x").unwrap();
        assert!(!scales.has_axis("x"));
        x.set_stacked(true);
        assert!(scales.has_axis("x"));
        assert_eq!(scales.axes().len(), 1);
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let scales = Options::new().scales();
        scales.add_axis("y", AxisType::Linear).unwrap();
        let err = scales.add_axis("y", AxisType::Logarithmic).unwrap_err();
        assert_eq!(err, ChartOptionsError::DuplicateScaleId(String::from("y")));
        assert!(scales.axis("").is_err());
    }

    #[test]
    fn remove_and_clear() {
        let scales = Options::new().scales();
        scales.add_axis("x", AxisType::Category).unwrap();
        scales.add_axis("y", AxisType::Linear).unwrap();
        assert!(scales.remove_axis("x"));
        assert!(!scales.remove_axis("x"));
        assert!(scales.get_axis("y").is_some());
        scales.clear_axes();
        assert!(scales.axes().is_empty());
        assert!(scales.node().is_empty());
    }

    #[test]
    fn lookups_do_not_allocate() {
        let scales = Options::new().scales();
        let before = scales.node().document().len();
        assert!(!scales.has_axis("x"));
        assert!(scales.get_axis("x").is_none());
        assert_eq!(scales.node().document().len(), before);
    }

    #[test]
    fn removed_axis_comes_back_empty() {
        let scales = Options::new().scales();
        let old = scales.add_axis("x", AxisType::Category).unwrap();
        old.set_min(5.0);
        assert!(scales.remove_axis("x"));

        let x = scales.add_axis("x", AxisType::Linear).unwrap();
        assert_ne!(x.node(), old.node());
        assert_eq!(x.min(), None);
        x.set_stacked(true);
        assert_eq!(
            scales.to_json().unwrap(),
            serde_json::json!({ "x": { "type": "linear", "stacked": true } }),
        );
    }

    #[test]
    fn index_reads_need_the_shadow_to_agree() {
        let x = Options::new().scales().add_axis("x", AxisType::Category).unwrap();
        x.set_min_index(2);
        x.set_max_index(5);
        assert_eq!(x.min_index(), Some(2));
        assert_eq!(x.max_index(), Some(5));
        x.node().set_value(&MIN, 3);
        assert_eq!(x.min_index(), None);
        assert_eq!(x.min(), Some(3.0));
        x.set_max(8.5);
        assert_eq!(x.max_index(), None);
        assert!(!x.node().has(&CHARBA_MAX_INDEX));
    }

    #[test]
    fn grace_by_kind() {
        let y = Options::new().scales().axis("y").unwrap();
        assert_eq!(y.grace(), Grace::Value(0.0));
        y.set_grace(Grace::Percentage(5.0));
        assert_eq!(y.node().get_value(&GRACE), Some(Value::from("5%")));
        assert_eq!(y.grace(), Grace::Percentage(5.0));
        y.set_grace(Grace::Value(2.0));
        assert_eq!(y.grace(), Grace::Value(2.0));
    }

    #[test]
    fn ticks_and_grid_attach_through_the_scale() {
        let options = Options::new();
        let y = options.scales().axis("y").unwrap();
        y.ticks().set_step_size(5.0);
        y.grid().set_display_mode(DisplayMode::False);
        assert_eq!(y.ticks().max_ticks_limit(), 11);
        assert_eq!(y.ticks().font().size(), 12);
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"scales":{"y":{"ticks":{"stepSize":5},"grid":{"display":false}}}}"#
        );
    }
}
