// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated option values.
//!
//! Every enumeration here is stored as a fixed string and implements
//! [`KeyEnum`].

use understory_overlay::KeyEnum;

/// Declares a `Copy` enumeration stored as fixed strings.
macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl KeyEnum for $name {
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.value())
            }
        }
    };
}

key_enum! {
    /// Whether an element is shown.
    ///
    /// [`DisplayMode::True`] and [`DisplayMode::False`] are stored as
    /// booleans; only [`DisplayMode::Auto`] is stored as a string.
    pub enum DisplayMode {
        /// Always shown.
        True => "true",
        /// Never shown.
        False => "false",
        /// Shown only when something is visible on it.
        Auto => "auto",
    }
}

impl From<bool> for DisplayMode {
    fn from(display: bool) -> Self {
        if display { Self::True } else { Self::False }
    }
}

key_enum! {
    /// Placement of a box around the chart area.
    pub enum Position {
        /// Above the chart area.
        Top => "top",
        /// Left of the chart area.
        Left => "left",
        /// Below the chart area.
        Bottom => "bottom",
        /// Right of the chart area.
        Right => "right",
        /// Inside the chart area.
        ChartArea => "chartArea",
        /// Centered on the chart area.
        Center => "center",
    }
}

key_enum! {
    /// Alignment within the available space.
    pub enum Align {
        /// Start of the space.
        Start => "start",
        /// Center of the space.
        Center => "center",
        /// End of the space.
        End => "end",
    }
}

key_enum! {
    /// Kind of a scale.
    pub enum AxisType {
        /// Linear numeric scale.
        Linear => "linear",
        /// Logarithmic numeric scale.
        Logarithmic => "logarithmic",
        /// Scale of category labels.
        Category => "category",
        /// Time scale.
        Time => "time",
        /// Time scale with evenly spaced data.
        TimeSeries => "timeseries",
        /// Radial scale of polar and radar charts.
        RadialLinear => "radialLinear",
    }
}

key_enum! {
    /// Axis along which data is indexed.
    pub enum IndexAxis {
        /// Horizontal index.
        X => "x",
        /// Vertical index.
        Y => "y",
    }
}

key_enum! {
    /// Easing functions of animations.
    pub enum Easing {
        /// No easing.
        Linear => "linear",
        /// Quadratic ease in.
        EaseInQuad => "easeInQuad",
        /// Quadratic ease out.
        EaseOutQuad => "easeOutQuad",
        /// Quadratic ease in and out.
        EaseInOutQuad => "easeInOutQuad",
        /// Cubic ease in.
        EaseInCubic => "easeInCubic",
        /// Cubic ease out.
        EaseOutCubic => "easeOutCubic",
        /// Cubic ease in and out.
        EaseInOutCubic => "easeInOutCubic",
        /// Quartic ease in.
        EaseInQuart => "easeInQuart",
        /// Quartic ease out.
        EaseOutQuart => "easeOutQuart",
        /// Quartic ease in and out.
        EaseInOutQuart => "easeInOutQuart",
        /// Quintic ease in.
        EaseInQuint => "easeInQuint",
        /// Quintic ease out.
        EaseOutQuint => "easeOutQuint",
        /// Quintic ease in and out.
        EaseInOutQuint => "easeInOutQuint",
        /// Sine ease in.
        EaseInSine => "easeInSine",
        /// Sine ease out.
        EaseOutSine => "easeOutSine",
        /// Sine ease in and out.
        EaseInOutSine => "easeInOutSine",
        /// Exponential ease in.
        EaseInExpo => "easeInExpo",
        /// Exponential ease out.
        EaseOutExpo => "easeOutExpo",
        /// Exponential ease in and out.
        EaseInOutExpo => "easeInOutExpo",
        /// Circular ease in.
        EaseInCirc => "easeInCirc",
        /// Circular ease out.
        EaseOutCirc => "easeOutCirc",
        /// Circular ease in and out.
        EaseInOutCirc => "easeInOutCirc",
        /// Elastic ease in.
        EaseInElastic => "easeInElastic",
        /// Elastic ease out.
        EaseOutElastic => "easeOutElastic",
        /// Elastic ease in and out.
        EaseInOutElastic => "easeInOutElastic",
        /// Overshooting ease in.
        EaseInBack => "easeInBack",
        /// Overshooting ease out.
        EaseOutBack => "easeOutBack",
        /// Overshooting ease in and out.
        EaseInOutBack => "easeInOutBack",
        /// Bouncing ease in.
        EaseInBounce => "easeInBounce",
        /// Bouncing ease out.
        EaseOutBounce => "easeOutBounce",
        /// Bouncing ease in and out.
        EaseInOutBounce => "easeInOutBounce",
    }
}

key_enum! {
    /// Interpolation used by an animation.
    pub enum AnimationType {
        /// Numeric interpolation.
        Number => "number",
        /// Color interpolation.
        Color => "color",
        /// Boolean switch.
        Boolean => "boolean",
    }
}

key_enum! {
    /// Which shape a stored fill value has.
    ///
    /// Stored next to the fill value under a private key, because the value
    /// alone does not always tell.
    pub enum FillingMode {
        /// A [`PredefinedFill`] string.
        Predefined => "predefined",
        /// A boolean.
        PredefinedBoolean => "predefinedBoolean",
        /// A dataset index number.
        AbsoluteDatasetIndex => "absoluteDatasetIndex",
        /// A signed relative index string.
        RelativeDatasetIndex => "relativeDatasetIndex",
        /// A baseline object.
        Baseline => "baseline",
        /// A fill colors object.
        Colors => "colors",
    }
}

key_enum! {
    /// Named fill targets.
    pub enum PredefinedFill {
        /// Fill to the origin.
        Origin => "origin",
        /// Fill to the start of the scale.
        Start => "start",
        /// Fill to the end of the scale.
        End => "end",
        /// Fill to the stacked dataset below.
        Stack => "stack",
        /// Fill the shape of the line.
        Shape => "shape",
    }
}

key_enum! {
    /// Font style.
    pub enum FontStyle {
        /// Upright.
        Normal => "normal",
        /// Italic.
        Italic => "italic",
        /// Oblique.
        Oblique => "oblique",
        /// The initial value.
        Initial => "initial",
        /// Inherited from the parent.
        Inherit => "inherit",
    }
}

key_enum! {
    /// Font weights that have a name.
    pub enum NamedWeight {
        /// Normal weight.
        Normal => "normal",
        /// Bold weight.
        Bold => "bold",
        /// Lighter than the parent.
        Lighter => "lighter",
        /// Bolder than the parent.
        Bolder => "bolder",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn values_round_trip() {
        for easing in Easing::VALUES {
            assert_eq!(Easing::from_value(easing.value()), Some(*easing));
        }
        assert_eq!(Easing::VALUES.len(), 31);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(Position::from_value("middle"), None);
        assert_eq!(AxisType::from_value("Linear"), None);
    }

    #[test]
    fn display_writes_stored_value() {
        assert_eq!(Position::ChartArea.to_string(), "chartArea");
        assert_eq!(FillingMode::PredefinedBoolean.to_string(), "predefinedBoolean");
    }

    #[test]
    fn display_mode_from_bool() {
        assert_eq!(DisplayMode::from(true), DisplayMode::True);
        assert_eq!(DisplayMode::from(false), DisplayMode::False);
    }
}
