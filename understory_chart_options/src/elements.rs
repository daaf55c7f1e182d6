// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element options.

use alloc::string::String;

use understory_overlay::{ConfigNode, Node};

use crate::fill::FillHandler;
use crate::keys::{
    BACKGROUND_COLOR, BORDER_COLOR, BORDER_WIDTH, CAP_BEZIER_POINTS, LINE, TENSION,
};

/// The `elements` object.
#[derive(Clone, Debug)]
pub struct Elements {
    node: Node,
}

impl Elements {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Returns the options of line elements.
    #[must_use]
    pub fn line(&self) -> LineElement {
        LineElement {
            node: self.node.child(&LINE, self.node.defaults().child(&LINE)),
        }
    }
}

impl ConfigNode for Elements {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Options of line elements.
#[derive(Clone, Debug)]
pub struct LineElement {
    node: Node,
}

impl LineElement {
    /// Sets the Bézier curve tension. Zero draws straight lines.
    pub fn set_tension(&self, tension: f64) {
        self.node.set_value_and_attach(&TENSION, tension);
    }

    /// Returns the Bézier curve tension.
    #[must_use]
    pub fn tension(&self) -> f64 {
        self.node.resolve(&TENSION, 0.0)
    }

    /// Sets the stroke width.
    pub fn set_border_width(&self, width: f64) {
        self.node.set_value_and_attach(&BORDER_WIDTH, width);
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn border_width(&self) -> f64 {
        self.node.resolve(&BORDER_WIDTH, 3.0)
    }

    /// Sets the stroke color.
    pub fn set_border_color(&self, color: &str) {
        self.node.set_value_and_attach(&BORDER_COLOR, color);
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn border_color(&self) -> String {
        self.node.resolve(&BORDER_COLOR, String::new())
    }

    /// Sets the fill color.
    pub fn set_background_color(&self, color: &str) {
        self.node.set_value_and_attach(&BACKGROUND_COLOR, color);
    }

    /// Returns the fill color.
    #[must_use]
    pub fn background_color(&self) -> String {
        self.node.resolve(&BACKGROUND_COLOR, String::new())
    }

    /// Keeps Bézier control points inside the chart area.
    pub fn set_cap_bezier_points(&self, cap: bool) {
        self.node.set_value_and_attach(&CAP_BEZIER_POINTS, cap);
    }

    /// Returns `true` if control points are kept inside the chart area.
    #[must_use]
    pub fn is_cap_bezier_points(&self) -> bool {
        self.node.resolve(&CAP_BEZIER_POINTS, true)
    }

    /// Returns the handler of the `fill` property.
    #[must_use]
    pub fn fill_handler(&self) -> FillHandler {
        FillHandler::new(&self.node, self.node.defaults())
    }
}

impl ConfigNode for LineElement {
    #[inline]
    fn node(&self) -> &Node {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use crate::fill::Fill;
    use crate::Options;
    use understory_overlay::ConfigNode;

    #[test]
    fn line_defaults() {
        let line = Options::new().elements().line();
        assert_eq!(line.border_width(), 3.0);
        assert!(line.is_cap_bezier_points());
        assert_eq!(line.fill_handler().fill(), Fill::Disabled);
    }

    #[test]
    fn line_fill_lives_on_the_line_object() {
        let options = Options::new();
        let line = options.elements().line();
        line.set_tension(0.4);
        line.fill_handler().set_fill(Fill::Origin);
        assert_eq!(
            options.to_json_string().unwrap(),
            r#"{"elements":{"line":{"tension":0.4,"fill":"origin","charbaFillingMode":"predefined"}}}"#
        );
    }
}
