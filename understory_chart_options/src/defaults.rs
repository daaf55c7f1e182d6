// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in default values of the consuming chart library.

use alloc::vec::Vec;

use understory_overlay::{Defaults, DefaultsBuilder, Key, KeyEnum, Value};

use crate::enums::{Align, AnimationType, Easing, IndexAxis, Position};
use crate::keys::*;

/// Animation modes the chart library defines itself.
pub const DEFAULT_TRANSITIONS: &[&str] = &["active", "hide", "reset", "resize", "show"];

/// Animation collections the chart library defines itself.
pub const DEFAULT_COLLECTIONS: &[&str] = &["colors", "numbers"];

/// Animated properties the chart library defines itself.
pub const DEFAULT_PROPERTIES: &[&str] = &[
    "x",
    "y",
    "borderWidth",
    "radius",
    "tension",
    "color",
    "borderColor",
    "backgroundColor",
];

const DEFAULT_FONT_FAMILY: &str = "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif";
const DEFAULT_COLOR: &str = "#666";
const DEFAULT_BORDER_COLOR: &str = "rgba(0,0,0,0.1)";

/// Returns the default values of a chart.
///
/// The tree mirrors the option tree: `scales` has one child per axis kind
/// (`x`, `y` and `r`), `plugins` has `legend` and `title`, and so on.
///
/// # Example
///
/// ```rust
/// use understory_chart_options::chart_defaults;
/// use understory_overlay::Key;
///
/// let defaults = chart_defaults();
/// let animation = defaults.child(&Key::from_static("animation"));
/// assert_eq!(animation.get_number(&Key::from_static("duration")), Some(1000.0));
/// ```
#[must_use]
pub fn chart_defaults() -> Defaults {
    DefaultsBuilder::new()
        .set(RESPONSIVE, true)
        .set(MAINTAIN_ASPECT_RATIO, true)
        .set(ASPECT_RATIO, 2)
        .set(INDEX_AXIS, IndexAxis::X.value())
        .child(ANIMATION, animation(1000))
        .child(ANIMATIONS, animations())
        .child(TRANSITIONS, transitions())
        .child(
            PLUGINS,
            DefaultsBuilder::new()
                .child(LEGEND, legend())
                .child(TITLE, title())
                .build(),
        )
        .child(
            SCALES,
            DefaultsBuilder::new()
                .child(X, scale(Position::Bottom))
                .child(Y, scale(Position::Left))
                .child(R, scale(Position::ChartArea))
                .build(),
        )
        .child(
            ELEMENTS,
            DefaultsBuilder::new().child(LINE, line()).build(),
        )
        .build()
}

fn font() -> Defaults {
    DefaultsBuilder::new()
        .set(SIZE, 12)
        .set(FAMILY, DEFAULT_FONT_FAMILY)
        .set(STYLE, "normal")
        .set(LINE_HEIGHT, 1.2)
        .build()
}

fn animation(duration: u32) -> Defaults {
    DefaultsBuilder::new()
        .set(DURATION, duration)
        .set(EASING, Easing::EaseOutQuart.value())
        .set(DELAY, 0)
        .set(LOOP, false)
        .build()
}

fn collection(kind: AnimationType, properties: &[&str]) -> Defaults {
    let properties: Vec<Value> = properties.iter().map(|p| Value::from(*p)).collect();
    DefaultsBuilder::from_defaults(&animation(1000))
        .set(TYPE, kind.value())
        .set(PROPERTIES, Value::Array(properties))
        .build()
}

fn animations() -> Defaults {
    DefaultsBuilder::new()
        .child(
            crate::animation::COLORS,
            collection(AnimationType::Color, &["color", "borderColor", "backgroundColor"]),
        )
        .child(
            crate::animation::NUMBERS,
            collection(
                AnimationType::Number,
                &["x", "y", "borderWidth", "radius", "tension"],
            ),
        )
        .build()
}

fn transitions() -> Defaults {
    let mode = |duration| {
        DefaultsBuilder::new()
            .child(ANIMATION, animation(duration))
            .child(ANIMATIONS, animations())
            .build()
    };
    let mut builder = DefaultsBuilder::new();
    for &name in DEFAULT_TRANSITIONS {
        let duration = match name {
            "active" => 400,
            "resize" => 0,
            _ => 1000,
        };
        builder = builder.child(Key::from_static(name), mode(duration));
    }
    builder.build()
}

fn legend() -> Defaults {
    DefaultsBuilder::new()
        .set(DISPLAY, true)
        .set(POSITION, Position::Top.value())
        .set(ALIGN, Align::Center.value())
        .set(REVERSE, false)
        .set(FULL_SIZE, true)
        .child(
            LABELS,
            DefaultsBuilder::new()
                .set(BOX_WIDTH, 40)
                .set(PADDING, 10)
                .set(COLOR, DEFAULT_COLOR)
                .child(FONT, font())
                .build(),
        )
        .build()
}

fn title() -> Defaults {
    DefaultsBuilder::new()
        .set(DISPLAY, false)
        .set(POSITION, Position::Top.value())
        .set(ALIGN, Align::Center.value())
        .set(FULL_SIZE, true)
        .set(PADDING, 10)
        .set(COLOR, DEFAULT_COLOR)
        .set(TEXT, Value::Array(Vec::new()))
        .child(
            FONT,
            DefaultsBuilder::from_defaults(&font())
                .set(WEIGHT, "bold")
                .build(),
        )
        .build()
}

fn scale(position: Position) -> Defaults {
    DefaultsBuilder::new()
        .set(DISPLAY, true)
        .set(POSITION, position.value())
        .set(BEGIN_AT_ZERO, false)
        .set(REVERSE, false)
        .set(STACKED, false)
        .set(OFFSET, false)
        .set(WEIGHT, 0)
        .set(GRACE, 0)
        .child(
            TICKS,
            DefaultsBuilder::new()
                .set(DISPLAY, true)
                .set(PADDING, 3)
                .set(COLOR, DEFAULT_COLOR)
                .set(MAX_TICKS_LIMIT, 11)
                .child(FONT, font())
                .build(),
        )
        .child(
            GRID,
            DefaultsBuilder::new()
                .set(DISPLAY, true)
                .set(COLOR, DEFAULT_BORDER_COLOR)
                .set(LINE_WIDTH, 1)
                .set(DRAW_ON_CHART_AREA, true)
                .set(DRAW_TICKS, true)
                .set(TICK_LENGTH, 8)
                .set(OFFSET, false)
                .build(),
        )
        .build()
}

fn line() -> Defaults {
    DefaultsBuilder::new()
        .set(TENSION, 0)
        .set(BORDER_WIDTH, 3)
        .set(BORDER_COLOR, DEFAULT_BORDER_COLOR)
        .set(BACKGROUND_COLOR, DEFAULT_BORDER_COLOR)
        .set(CAP_BEZIER_POINTS, true)
        .set(FILL, false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_per_axis_kind() {
        let scales = chart_defaults().child(&SCALES);
        assert_eq!(scales.child(&X).get_str(&POSITION), Some("bottom"));
        assert_eq!(scales.child(&Y).get_str(&POSITION), Some("left"));
        assert_eq!(scales.child(&R).get_str(&POSITION), Some("chartArea"));
        assert_eq!(
            scales.child(&X).child(&TICKS).child(&FONT).get_number(&SIZE),
            Some(12.0)
        );
    }

    #[test]
    fn transition_defaults() {
        let transitions = chart_defaults().child(&TRANSITIONS);
        let duration = |name: &'static str| {
            transitions
                .child(&Key::from_static(name))
                .child(&ANIMATION)
                .get_number(&DURATION)
        };
        assert_eq!(duration("active"), Some(400.0));
        assert_eq!(duration("resize"), Some(0.0));
        assert_eq!(duration("show"), Some(1000.0));
    }

    #[test]
    fn reserved_name_lists() {
        assert_eq!(DEFAULT_TRANSITIONS.len(), 5);
        assert!(DEFAULT_COLLECTIONS.contains(&"colors"));
        assert!(DEFAULT_PROPERTIES.contains(&"backgroundColor"));
    }
}
