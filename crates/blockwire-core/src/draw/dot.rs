//! Filled junction dots marking signal take-off points.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, ZOrder},
    geometry::{Bounds, Point, Size, Viewport},
};

/// Radius, color and paint priority of a dot.
#[derive(Debug, Clone)]
pub struct DotDefinition {
    radius: f32,
    color: Color,
    z_order: ZOrder,
}

impl DotDefinition {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            ..Self::default()
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    pub fn set_z_order(&mut self, z_order: ZOrder) {
        self.z_order = z_order;
    }
}

impl Default for DotDefinition {
    fn default() -> Self {
        Self {
            radius: 0.08,
            color: Color::default(),
            z_order: ZOrder::PATCH,
        }
    }
}

/// A filled dot without outline.
#[derive(Debug, Clone)]
pub struct Dot {
    definition: Rc<DotDefinition>,
}

impl Dot {
    pub fn new(definition: Rc<DotDefinition>) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &Rc<DotDefinition> {
        &self.definition
    }
}

impl Drawable for Dot {
    fn render_to_layers(&self, position: Point, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;
        let center = viewport.to_screen(position);

        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", definition.radius() * viewport.scale_x())
            .set("ry", definition.radius() * viewport.scale_y())
            .set("fill", definition.color().to_string())
            .set("fill-opacity", definition.color().alpha())
            .set("stroke", "none");

        output.add_to_layer(definition.z_order(), Box::new(ellipse));
        output
    }

    fn bounds(&self, position: Point) -> Bounds {
        let diameter = self.definition.radius() * 2.0;
        Bounds::new_from_center(position, Size::new(diameter, diameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;

    #[test]
    fn test_dot_render() {
        let viewport = Viewport::new(
            Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            Size::new(100.0, 100.0),
            Insets::default(),
            72.0,
        );
        let mut definition = DotDefinition::new(0.25, Color::new("#b22222").unwrap());
        definition.set_z_order(ZOrder::OVERLAY);
        let dot = Dot::new(Rc::new(definition));

        let output = dot.render_to_layers(Point::new(1.0, 9.0), &viewport);
        assert_eq!(output.z_orders(), vec![ZOrder::OVERLAY]);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("cx=\"10\""));
        assert!(svg.contains("cy=\"10\""));
        assert!(svg.contains("rx=\"2.5\""));
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn test_dot_default_is_black_patch() {
        let definition = DotDefinition::default();
        assert_eq!(definition.color(), Color::default());
        assert_eq!(definition.z_order(), ZOrder::PATCH);
    }
}
