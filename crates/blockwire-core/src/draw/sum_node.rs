//! Summing junctions.
//!
//! A sum node is a small circle centered on its position. Because data units
//! may scale differently along each axis the circle is emitted as an SVG
//! `<ellipse>`, keeping it a true circle in data space.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, StrokeDefinition, ZOrder},
    geometry::{Bounds, Point, Size, Viewport},
};

/// Style of a sum node.
#[derive(Debug, Clone)]
pub struct SumNodeDefinition {
    radius: f32,
    fill: Color,
    stroke: Rc<StrokeDefinition>,
    z_order: ZOrder,
}

impl SumNodeDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the radius in data units.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    pub fn set_z_order(&mut self, z_order: ZOrder) {
        self.z_order = z_order;
    }
}

impl Default for SumNodeDefinition {
    fn default() -> Self {
        Self {
            radius: 0.2,
            fill: Color::white(),
            stroke: Rc::new(StrokeDefinition::default()),
            z_order: ZOrder::SHAPE,
        }
    }
}

/// A summing junction.
#[derive(Debug, Clone)]
pub struct SumNode {
    definition: Rc<SumNodeDefinition>,
}

impl SumNode {
    pub fn new(definition: Rc<SumNodeDefinition>) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &Rc<SumNodeDefinition> {
        &self.definition
    }
}

impl Drawable for SumNode {
    fn render_to_layers(&self, position: Point, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;

        let center = viewport.to_screen(position);
        let radius = definition.radius();

        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", radius * viewport.scale_x())
            .set("ry", radius * viewport.scale_y())
            .set("fill", definition.fill().to_string())
            .set("fill-opacity", definition.fill().alpha());
        let ellipse = apply_stroke!(ellipse, definition.stroke(), viewport);

        output.add_to_layer(definition.z_order(), Box::new(ellipse));
        output
    }

    fn bounds(&self, position: Point) -> Bounds {
        let diameter = self.definition.radius() * 2.0;
        Bounds::new_from_center(position, Size::new(diameter, diameter))
    }
}
