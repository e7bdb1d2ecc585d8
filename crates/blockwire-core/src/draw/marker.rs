//! Arrowhead marker registry.
//!
//! Arrow segments reference a shared `<marker>` definition through their
//! `marker-end` attribute. One marker exists per stroke color, so the
//! registry records every color used while connectors are rendered and emits
//! the matching `<defs>` block afterwards.

use std::collections::BTreeMap;

use svg::node::element as svg_element;

use crate::color::Color;

/// Collects arrowhead colors and generates their marker definitions.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    // Keyed by marker id so the definitions come out in a stable order
    arrowheads: BTreeMap<String, Color>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an arrowhead of the given color and returns the value for
    /// the `marker-end` attribute.
    pub fn register(&mut self, color: Color) -> String {
        let id = Self::marker_id(color);
        let reference = format!("url(#{id})");
        self.arrowheads.insert(id, color);
        reference
    }

    /// Returns the number of distinct markers registered.
    pub fn len(&self) -> usize {
        self.arrowheads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrowheads.is_empty()
    }

    /// Generates the `<defs>` element holding one marker per registered color.
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for (id, color) in &self.arrowheads {
            defs = defs.add(Self::create_arrowhead(id, *color));
        }
        defs.into()
    }

    fn marker_id(color: Color) -> String {
        format!("arrowhead-{}", color.to_id_safe_string())
    }

    /// Open chevron pointing along the path direction, tip on the endpoint.
    fn create_arrowhead(id: &str, color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", id)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 1 1 L 9 5 L 1 9")
                    .set("fill", "none")
                    .set("stroke", color.to_string())
                    .set("stroke-opacity", color.alpha())
                    .set("stroke-width", 1.5)
                    .set("stroke-linejoin", "miter"),
            )
    }
}
