//! Provides `PositionedDrawable`, a wrapper for a Drawable and its absolute position.

use crate::{
    draw::{Drawable, LayeredOutput},
    geometry::{Bounds, Point, Viewport},
};

/// A drawable object together with an absolute data-space position.
///
/// Calls `render_to_layers` on the wrapped drawable, passing in the stored position.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Construct a new `PositionedDrawable` from a drawable (position defaults to the origin).
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    /// Set the position for this drawable (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Render this positioned drawable to layers, using the inner drawable's implementation.
    pub fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        self.drawable.render_to_layers(self.position, viewport)
    }

    /// Calculate the data-space bounds of this positioned drawable.
    pub fn bounds(&self) -> Bounds {
        self.drawable.bounds(self.position)
    }

    /// Get a reference to the inner drawable
    pub fn inner(&self) -> &D {
        &self.drawable
    }

    /// Get the position of this drawable
    pub fn position(&self) -> Point {
        self.position
    }
}

impl<D: Drawable> Drawable for PositionedDrawable<D> {
    fn render_to_layers(&self, _position: Point, viewport: &Viewport) -> LayeredOutput {
        // Ignore the passed position and use our stored position
        self.render_to_layers(viewport)
    }

    fn bounds(&self, _position: Point) -> Bounds {
        self.bounds()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{Block, BlockDefinition, SumNode, SumNodeDefinition};
    use crate::geometry::{Insets, Size};

    fn create_block() -> Block {
        Block::new(Rc::new(BlockDefinition::default()), "$G_{11}$")
    }

    #[test]
    fn test_positioned_drawable_new_default_position() {
        let positioned = PositionedDrawable::new(create_block());

        assert_approx_eq!(f32, positioned.position().x(), 0.0);
        assert_approx_eq!(f32, positioned.position().y(), 0.0);
    }

    #[test]
    fn test_positioned_drawable_with_position() {
        let positioned =
            PositionedDrawable::new(create_block()).with_position(Point::new(11.0, 8.0));

        assert_approx_eq!(f32, positioned.position().x(), 11.0);
        assert_approx_eq!(f32, positioned.position().y(), 8.0);
        assert_eq!(positioned.inner().label(), "$G_{11}$");
    }

    #[test]
    fn test_positioned_drawable_bounds() {
        let positioned =
            PositionedDrawable::new(create_block()).with_position(Point::new(11.0, 4.0));
        let bounds = positioned.bounds();

        assert_approx_eq!(f32, bounds.min_x(), 11.0);
        assert_approx_eq!(f32, bounds.min_y(), 4.0);
        assert_approx_eq!(f32, bounds.width(), 1.6, epsilon = 0.0001);
        assert_approx_eq!(f32, bounds.height(), 1.0, epsilon = 0.0001);
    }

    #[test]
    fn test_positioned_drawable_ignores_passed_position() {
        let viewport = Viewport::new(
            Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            Size::new(100.0, 100.0),
            Insets::default(),
            72.0,
        );
        let sum = SumNode::new(Rc::new(SumNodeDefinition::default()));
        let positioned = PositionedDrawable::new(sum).with_position(Point::new(2.0, 3.0));

        let output = Drawable::render_to_layers(&positioned, Point::new(9.0, 9.0), &viewport);
        let direct: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(direct.contains("cx=\"20\""));
        assert!(direct.contains("cy=\"70\""));
    }
}
