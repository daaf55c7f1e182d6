// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property keys of the option schema.

use understory_overlay::Key;

// --- Containers -------------------------------------------------------------

pub(crate) const ANIMATION: Key = Key::from_static("animation");
pub(crate) const ANIMATIONS: Key = Key::from_static("animations");
pub(crate) const TRANSITIONS: Key = Key::from_static("transitions");
pub(crate) const SCALES: Key = Key::from_static("scales");
pub(crate) const PLUGINS: Key = Key::from_static("plugins");
pub(crate) const LEGEND: Key = Key::from_static("legend");
pub(crate) const TITLE: Key = Key::from_static("title");
pub(crate) const LABELS: Key = Key::from_static("labels");
pub(crate) const ELEMENTS: Key = Key::from_static("elements");
pub(crate) const LINE: Key = Key::from_static("line");
pub(crate) const TICKS: Key = Key::from_static("ticks");
pub(crate) const GRID: Key = Key::from_static("grid");
pub(crate) const FONT: Key = Key::from_static("font");

// --- Chart ------------------------------------------------------------------

pub(crate) const RESPONSIVE: Key = Key::from_static("responsive");
pub(crate) const MAINTAIN_ASPECT_RATIO: Key = Key::from_static("maintainAspectRatio");
pub(crate) const ASPECT_RATIO: Key = Key::from_static("aspectRatio");
pub(crate) const INDEX_AXIS: Key = Key::from_static("indexAxis");

// --- Boxes ------------------------------------------------------------------

pub(crate) const DISPLAY: Key = Key::from_static("display");
pub(crate) const POSITION: Key = Key::from_static("position");
pub(crate) const ALIGN: Key = Key::from_static("align");
pub(crate) const REVERSE: Key = Key::from_static("reverse");
pub(crate) const FULL_SIZE: Key = Key::from_static("fullSize");
pub(crate) const TEXT: Key = Key::from_static("text");
pub(crate) const PADDING: Key = Key::from_static("padding");
pub(crate) const COLOR: Key = Key::from_static("color");
pub(crate) const BOX_WIDTH: Key = Key::from_static("boxWidth");

// --- Scales -----------------------------------------------------------------

pub(crate) const TYPE: Key = Key::from_static("type");
pub(crate) const BEGIN_AT_ZERO: Key = Key::from_static("beginAtZero");
pub(crate) const MIN: Key = Key::from_static("min");
pub(crate) const MAX: Key = Key::from_static("max");
pub(crate) const SUGGESTED_MIN: Key = Key::from_static("suggestedMin");
pub(crate) const SUGGESTED_MAX: Key = Key::from_static("suggestedMax");
pub(crate) const GRACE: Key = Key::from_static("grace");
pub(crate) const STACKED: Key = Key::from_static("stacked");
pub(crate) const WEIGHT: Key = Key::from_static("weight");
pub(crate) const OFFSET: Key = Key::from_static("offset");
pub(crate) const CHARBA_MIN_INDEX: Key = Key::from_static("charbaMinIndex");
pub(crate) const CHARBA_MAX_INDEX: Key = Key::from_static("charbaMaxIndex");
pub(crate) const STEP_SIZE: Key = Key::from_static("stepSize");
pub(crate) const MAX_TICKS_LIMIT: Key = Key::from_static("maxTicksLimit");
pub(crate) const LINE_WIDTH: Key = Key::from_static("lineWidth");
pub(crate) const DRAW_ON_CHART_AREA: Key = Key::from_static("drawOnChartArea");
pub(crate) const DRAW_TICKS: Key = Key::from_static("drawTicks");
pub(crate) const TICK_LENGTH: Key = Key::from_static("tickLength");

pub(crate) const X: Key = Key::from_static("x");
pub(crate) const Y: Key = Key::from_static("y");
pub(crate) const R: Key = Key::from_static("r");

// --- Fonts ------------------------------------------------------------------

pub(crate) const SIZE: Key = Key::from_static("size");
pub(crate) const FAMILY: Key = Key::from_static("family");
pub(crate) const STYLE: Key = Key::from_static("style");
pub(crate) const LINE_HEIGHT: Key = Key::from_static("lineHeight");

// --- Animations -------------------------------------------------------------

pub(crate) const DURATION: Key = Key::from_static("duration");
pub(crate) const EASING: Key = Key::from_static("easing");
pub(crate) const DELAY: Key = Key::from_static("delay");
pub(crate) const LOOP: Key = Key::from_static("loop");
pub(crate) const PROPERTIES: Key = Key::from_static("properties");
pub(crate) const FROM: Key = Key::from_static("from");
pub(crate) const TO: Key = Key::from_static("to");

// --- Elements ---------------------------------------------------------------

pub(crate) const TENSION: Key = Key::from_static("tension");
pub(crate) const BORDER_WIDTH: Key = Key::from_static("borderWidth");
pub(crate) const BORDER_COLOR: Key = Key::from_static("borderColor");
pub(crate) const BACKGROUND_COLOR: Key = Key::from_static("backgroundColor");
pub(crate) const CAP_BEZIER_POINTS: Key = Key::from_static("capBezierPoints");
pub(crate) const FILL: Key = Key::from_static("fill");
pub(crate) const TARGET: Key = Key::from_static("target");
pub(crate) const ABOVE: Key = Key::from_static("above");
pub(crate) const BELOW: Key = Key::from_static("below");
pub(crate) const VALUE: Key = Key::from_static("value");
pub(crate) const CHARBA_FILLING_MODE: Key = Key::from_static("charbaFillingMode");
