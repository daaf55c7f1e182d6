// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation options.
//!
//! Three objects configure animations:
//!
//! - `animation` sets the timing of every animation ([`Animation`]).
//! - `animations` holds named entries ([`Animations`]). An entry is either a
//!   *collection*, which animates a list of properties together, or a single
//!   animated *property*. The chart library defines the collections `colors`
//!   and `numbers` and a handful of properties; callers may add their own
//!   under any other name.
//! - `transitions` holds one [`AnimationMode`] per update mode, again with
//!   library-defined names (`active`, `hide`, `reset`, `resize`, `show`) and
//!   room for custom ones ([`Transitions`]).
//!
//! Entries of `animations` are switched off by storing `false` in place of
//! their object:
//!
//! ```rust
//! use understory_chart_options::{AnimationTiming, ConfigNode, Options};
//!
//! let options = Options::new();
//! let animations = options.animations();
//!
//! animations.set_enabled("colors", false).unwrap();
//! assert_eq!(
//!     options.to_json_string().unwrap(),
//!     r#"{"animations":{"colors":false}}"#,
//! );
//!
//! animations.collection("numbers").unwrap().set_duration(500);
//! animations.set_enabled("colors", true).unwrap();
//! assert_eq!(
//!     options.to_json_string().unwrap(),
//!     r#"{"animations":{"numbers":{"duration":500}}}"#,
//! );
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use understory_overlay::{
    ConfigNode, Defaults, FromValue, Key, KeyEnum, NameRegistry, Node, Value, ValueKind,
};

use crate::defaults::{DEFAULT_COLLECTIONS, DEFAULT_PROPERTIES, DEFAULT_TRANSITIONS};
use crate::enums::{AnimationType, Easing};
use crate::error::ChartOptionsError;
use crate::keys::{
    ANIMATION, ANIMATIONS, DELAY, DURATION, EASING, FROM, LOOP, PROPERTIES, TO, TRANSITIONS, TYPE,
};

pub(crate) const COLORS: Key = Key::from_static("colors");
pub(crate) const NUMBERS: Key = Key::from_static("numbers");

/// Typed access to the timing of an animation.
pub trait AnimationTiming: ConfigNode {
    /// Sets the length of the animation in milliseconds.
    fn set_duration(&self, milliseconds: u32) {
        self.node().set_value_and_attach(&DURATION, milliseconds);
    }

    /// Returns the length of the animation in milliseconds.
    fn duration(&self) -> u32 {
        self.node().resolve(&DURATION, 1000)
    }

    /// Sets the easing function.
    fn set_easing(&self, easing: Easing) {
        self.node().set_value_and_attach(&EASING, easing.value());
    }

    /// Returns the easing function.
    fn easing(&self) -> Easing {
        self.node().resolve_enum(&EASING, Easing::EaseOutQuart)
    }

    /// Sets the delay before the animation starts, in milliseconds.
    fn set_delay(&self, milliseconds: u32) {
        self.node().set_value_and_attach(&DELAY, milliseconds);
    }

    /// Returns the delay before the animation starts, in milliseconds.
    fn delay(&self) -> u32 {
        self.node().resolve(&DELAY, 0)
    }

    /// Repeats the animation endlessly.
    fn set_loop(&self, looping: bool) {
        self.node().set_value_and_attach(&LOOP, looping);
    }

    /// Returns `true` if the animation repeats endlessly.
    fn is_loop(&self) -> bool {
        self.node().resolve(&LOOP, false)
    }
}

/// Start or end value of an animated property.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationValue {
    /// A boolean switch.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A color string.
    Color(String),
}

impl From<AnimationValue> for Value {
    fn from(value: AnimationValue) -> Self {
        match value {
            AnimationValue::Bool(value) => Self::Bool(value),
            AnimationValue::Number(value) => Self::Number(value),
            AnimationValue::Color(value) => Self::String(value),
        }
    }
}

impl FromValue for AnimationValue {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(Self::Bool(*value)),
            Value::Number(value) => Some(Self::Number(*value)),
            Value::String(value) => Some(Self::Color(value.clone())),
            _ => None,
        }
    }
}

/// Typed access to the interpolation of an animated entry.
pub trait Interpolation: ConfigNode {
    /// Sets how values are interpolated.
    fn set_type(&self, animation_type: AnimationType) {
        self.node()
            .set_value_and_attach(&TYPE, animation_type.value());
    }

    /// Returns how values are interpolated.
    fn animation_type(&self) -> AnimationType {
        self.node().resolve_enum(&TYPE, AnimationType::Number)
    }

    /// Sets the value the animation starts from.
    fn set_from(&self, from: AnimationValue) {
        self.node().set_value_and_attach(&FROM, from);
    }

    /// Returns the value the animation starts from, read by kind.
    fn from(&self) -> Option<AnimationValue> {
        endpoint(self.node(), &FROM)
    }

    /// Sets the value the animation ends at.
    fn set_to(&self, to: AnimationValue) {
        self.node().set_value_and_attach(&TO, to);
    }

    /// Returns the value the animation ends at, read by kind.
    fn to(&self) -> Option<AnimationValue> {
        endpoint(self.node(), &TO)
    }
}

fn endpoint(node: &Node, key: &Key) -> Option<AnimationValue> {
    node.get_value(key)
        .as_ref()
        .and_then(AnimationValue::from_value)
        .or_else(|| node.defaults().get(key).and_then(AnimationValue::from_value))
}

/// The `animation` object, or the timing of one transition mode.
#[derive(Clone, Debug)]
pub struct Animation {
    node: Node,
}

impl Animation {
    pub(crate) fn of(owner: &Node) -> Self {
        Self {
            node: owner.child(&ANIMATION, owner.defaults().child(&ANIMATION)),
        }
    }
}

impl ConfigNode for Animation {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl AnimationTiming for Animation {}

/// The `animations` object: collections and animated properties by name.
#[derive(Clone, Debug)]
pub struct Animations {
    node: Node,
    timing: Defaults,
    collections: NameRegistry,
    properties: NameRegistry,
}

impl Animations {
    pub(crate) fn of(owner: &Node) -> Self {
        Self {
            node: owner.child(&ANIMATIONS, owner.defaults().child(&ANIMATIONS)),
            timing: owner.defaults().child(&ANIMATION),
            collections: NameRegistry::new(DEFAULT_COLLECTIONS),
            properties: NameRegistry::new(DEFAULT_PROPERTIES),
        }
    }

    /// Returns the collections registry.
    #[must_use]
    pub fn collections(&self) -> &NameRegistry {
        &self.collections
    }

    /// Returns the properties registry.
    #[must_use]
    pub fn properties(&self) -> &NameRegistry {
        &self.properties
    }

    /// Entries without defaults of their own inherit the `animation` timing.
    fn entry(&self, key: &Key) -> Node {
        let defaults = self.node.defaults().child(key);
        let defaults = if defaults.is_empty() {
            self.timing.clone()
        } else {
            defaults
        };
        self.node.child(key, defaults)
    }

    /// Refuses names reserved by either registry.
    fn check_custom(&self, name: &str) -> Result<Key, ChartOptionsError> {
        self.collections.check_if_valid(name)?;
        Ok(self.properties.create_custom(name)?)
    }

    /// Returns the collection `name`, library-defined or custom.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty or names a library-defined property, whose
    /// slot a collection cannot share.
    pub fn collection(&self, name: &str) -> Result<AnimationCollection, ChartOptionsError> {
        self.properties.check_if_valid(name)?;
        let key = self.collections.create(name)?;
        Ok(AnimationCollection {
            node: self.entry(&key),
        })
    }

    /// Defines a custom collection animating `properties`.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty or names a library-defined collection or
    /// property.
    pub fn define_collection(
        &self,
        name: &str,
        properties: &[&str],
    ) -> Result<AnimationCollection, ChartOptionsError> {
        let key = self.check_custom(name)?;
        let collection = AnimationCollection {
            node: self.entry(&key),
        };
        collection.set_properties(properties);
        Ok(collection)
    }

    /// Returns the animated property `name`, library-defined or custom.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty or names a library-defined collection.
    pub fn property(&self, name: &str) -> Result<AnimationProperty, ChartOptionsError> {
        self.collections.check_if_valid(name)?;
        let key = self.properties.create(name)?;
        Ok(AnimationProperty {
            node: self.entry(&key),
        })
    }

    /// Defines a custom animated property interpolated as `animation_type`.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty or names a library-defined collection or
    /// property.
    pub fn define_property(
        &self,
        name: &str,
        animation_type: AnimationType,
    ) -> Result<AnimationProperty, ChartOptionsError> {
        let key = self.check_custom(name)?;
        let property = AnimationProperty {
            node: self.entry(&key),
        };
        property.set_type(animation_type);
        Ok(property)
    }

    /// Turns the entry `name` on or off.
    ///
    /// Turning an entry off stores `false` under its name. Turning it back on
    /// restores its object if it was customized, and otherwise removes the
    /// entry so the chart library's default applies.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty.
    pub fn set_enabled(&self, name: &str, enabled: bool) -> Result<(), ChartOptionsError> {
        let key = Key::new(name)?;
        if enabled {
            self.node.enable_entry(&key);
        } else {
            self.node.disable_entry(&key);
        }
        Ok(())
    }

    /// Returns `false` only if the entry `name` is turned off.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        Key::new(name).is_ok_and(|key| self.node.is_entry_enabled(&key))
    }

    /// Returns `true` if an object is stored for the entry `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        Key::new(name).is_ok_and(|key| self.node.kind(&key) == ValueKind::Object)
    }

    /// Removes the entry `name`, whether an object or `false`.
    pub fn remove(&self, name: &str) -> bool {
        Key::new(name).is_ok_and(|key| self.node.remove(&key))
    }
}

impl ConfigNode for Animations {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// A group of properties animated together.
#[derive(Clone, Debug)]
pub struct AnimationCollection {
    node: Node,
}

impl AnimationCollection {
    /// Sets the names of the properties in the collection.
    pub fn set_properties<S: AsRef<str>>(&self, properties: &[S]) {
        let properties: Vec<Value> = properties
            .iter()
            .map(|property| Value::from(property.as_ref()))
            .collect();
        self.node.set_value_and_attach(&PROPERTIES, properties);
    }

    /// Returns the names of the properties in the collection.
    #[must_use]
    pub fn properties(&self) -> Vec<String> {
        let mut properties = self.node.get_value_or_array(&PROPERTIES, String::new());
        properties.retain(|property| !property.is_empty());
        properties
    }
}

impl ConfigNode for AnimationCollection {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl AnimationTiming for AnimationCollection {}
impl Interpolation for AnimationCollection {}

/// One animated property.
#[derive(Clone, Debug)]
pub struct AnimationProperty {
    node: Node,
}

impl ConfigNode for AnimationProperty {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

impl AnimationTiming for AnimationProperty {}
impl Interpolation for AnimationProperty {}

/// The `transitions` object: animation settings per update mode.
#[derive(Clone, Debug)]
pub struct Transitions {
    node: Node,
    modes: NameRegistry,
}

impl Transitions {
    pub(crate) fn of(owner: &Node) -> Self {
        Self {
            node: owner.child(&TRANSITIONS, owner.defaults().child(&TRANSITIONS)),
            modes: NameRegistry::new(DEFAULT_TRANSITIONS),
        }
    }

    /// Returns the modes registry.
    #[must_use]
    pub fn modes(&self) -> &NameRegistry {
        &self.modes
    }

    fn wrap(&self, key: &Key) -> AnimationMode {
        AnimationMode {
            node: self.node.child(key, self.node.defaults().child(key)),
        }
    }

    /// Returns the mode `name`, library-defined or custom.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty.
    pub fn mode(&self, name: &str) -> Result<AnimationMode, ChartOptionsError> {
        Ok(self.wrap(&self.modes.create(name)?))
    }

    /// Defines a custom mode.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty or names a library-defined mode.
    pub fn define_mode(&self, name: &str) -> Result<AnimationMode, ChartOptionsError> {
        Ok(self.wrap(&self.modes.create_custom(name)?))
    }

    /// Returns `true` if an object is stored for the mode `name`.
    #[must_use]
    pub fn has_mode(&self, name: &str) -> bool {
        Key::new(name).is_ok_and(|key| self.node.kind(&key) == ValueKind::Object)
    }

    /// Removes the mode `name`. Returns `true` if it was stored.
    pub fn remove_mode(&self, name: &str) -> bool {
        Key::new(name).is_ok_and(|key| self.node.remove(&key))
    }
}

impl ConfigNode for Transitions {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Animation settings of one update mode.
#[derive(Clone, Debug)]
pub struct AnimationMode {
    node: Node,
}

impl AnimationMode {
    /// Returns the timing used in this mode.
    #[must_use]
    pub fn animation(&self) -> Animation {
        Animation::of(&self.node)
    }

    /// Returns the collections and properties animated in this mode.
    #[must_use]
    pub fn animations(&self) -> Animations {
        Animations::of(&self.node)
    }
}

impl ConfigNode for AnimationMode {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}
