// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Chart Options: typed option objects of a charting library.
//!
//! This crate builds the option tree of a chart on [`understory_overlay`]
//! nodes. Each option object is a small handle with typed setters and
//! getters; setters write into the shared tree and link the object into it,
//! getters fall back to the chart library's defaults.
//!
//! ## Example
//!
//! ```rust
//! use understory_chart_options::{ConfigNode, DisplayMode, HasDisplay, Options, Position};
//!
//! let options = Options::new();
//! let y = options.scales().axis("y").unwrap();
//!
//! // Nothing is exported until something is set.
//! assert_eq!(y.position(), Position::Left);
//! assert_eq!(options.to_json_string().unwrap(), "{}");
//!
//! y.set_display_mode(DisplayMode::Auto);
//! y.ticks().font().set_size(14);
//! assert_eq!(
//!     options.to_json_string().unwrap(),
//!     r#"{"scales":{"y":{"display":"auto","ticks":{"font":{"size":14}}}}}"#,
//! );
//! ```
//!
//! ## Multi-shape values
//!
//! Some options accept values of several shapes. `display` is a boolean or
//! `"auto"` ([`HasDisplay`]); `grace` is a number or a percentage
//! ([`Grace`]); a fill is a boolean, a name, a dataset index or an object
//! ([`FillHandler`]). Reads decide by the kind of the stored value, and fall
//! back to the defaults when it does not fit.
//!
//! ## Named entries
//!
//! Animation collections, animated properties and transition modes are open
//! sets with names the chart library reserves. Defining a custom entry under
//! a reserved name fails; see [`Animations`] and [`Transitions`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod defaults;
mod display;
mod elements;
mod enums;
mod error;
mod fill;
mod font;
mod keys;
mod options;
mod plugins;
mod scales;

pub use animation::{
    Animation, AnimationCollection, AnimationMode, AnimationProperty, AnimationTiming,
    AnimationValue, Animations, Interpolation, Transitions,
};
pub use defaults::{DEFAULT_COLLECTIONS, DEFAULT_PROPERTIES, DEFAULT_TRANSITIONS, chart_defaults};
pub use display::HasDisplay;
pub use elements::{Elements, LineElement};
pub use enums::{
    Align, AnimationType, AxisType, DisplayMode, Easing, FillingMode, FontStyle, IndexAxis,
    NamedWeight, Position, PredefinedFill,
};
pub use error::ChartOptionsError;
pub use fill::{Fill, FillColors, FillHandler};
pub use font::{Font, FontWeight};
pub use options::Options;
pub use plugins::{Legend, LegendLabels, Plugins, Title};
pub use scales::{Grace, Grid, Scale, Scales, Ticks};

pub use understory_overlay::{ConfigNode, KeyEnum};
