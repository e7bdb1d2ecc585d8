//! The drawing surface of a scene.

use log::debug;

use blockwire_core::geometry::{Bounds, Insets, Point, Size, Viewport};

use crate::{config::CanvasConfig, error::BlockwireError};

/// Fixed data-space extents and the physical size of the figure.
///
/// There are no axes, ticks or grid; the extents only decide which part of
/// data space ends up in the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    extents: Bounds,
    figure_size: Size,
}

impl Canvas {
    /// Creates a canvas.
    ///
    /// # Arguments
    ///
    /// * `x_range` - Visible `(min, max)` range along the x-axis.
    /// * `y_range` - Visible `(min, max)` range along the y-axis.
    /// * `figure_size` - Figure width and height in inches.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] if a range is empty, reversed or
    /// not finite, or if the figure size is not positive.
    pub fn new(
        x_range: (f32, f32),
        y_range: (f32, f32),
        figure_size: Size,
    ) -> Result<Self, BlockwireError> {
        validate_range("x", x_range)?;
        validate_range("y", y_range)?;
        if !figure_size.is_positive() {
            return Err(BlockwireError::Layout(format!(
                "figure size must be positive, got {}x{} in",
                figure_size.width(),
                figure_size.height()
            )));
        }

        let extents = Bounds::new_from_corners(
            Point::new(x_range.0, y_range.0),
            Point::new(x_range.1, y_range.1),
        );
        debug!(
            min_x = extents.min_x(),
            max_x = extents.max_x(),
            min_y = extents.min_y(),
            max_y = extents.max_y();
            "Canvas created"
        );

        Ok(Self {
            extents,
            figure_size,
        })
    }

    /// Returns the visible data-space region.
    pub fn extents(&self) -> Bounds {
        self.extents
    }

    /// Returns the figure size in inches.
    pub fn figure_size(&self) -> Size {
        self.figure_size
    }

    /// Builds the data-to-pixel mapping for the given output settings.
    pub fn viewport(&self, config: &CanvasConfig) -> Viewport {
        Viewport::new(
            self.extents,
            self.figure_size.scale(config.dpi()),
            Insets::uniform(config.margin()),
            config.dpi(),
        )
    }
}

fn validate_range(axis: &str, (min, max): (f32, f32)) -> Result<(), BlockwireError> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(BlockwireError::Layout(format!(
            "{axis}-range must be finite and increasing, got ({min}, {max})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_canvas_viewport() {
        let canvas = Canvas::new((-2.0, 19.0), (0.0, 11.0), Size::new(16.0, 10.0)).unwrap();
        let viewport = canvas.viewport(&CanvasConfig::new(100.0, 20.0));

        let total = viewport.total_size();
        assert_approx_eq!(f32, total.width(), 1640.0);
        assert_approx_eq!(f32, total.height(), 1040.0);

        let origin = viewport.to_screen(Point::new(-2.0, 11.0));
        assert_approx_eq!(f32, origin.x(), 20.0);
        assert_approx_eq!(f32, origin.y(), 20.0);

        let corner = viewport.to_screen(Point::new(19.0, 0.0));
        assert_approx_eq!(f32, corner.x(), 1620.0, epsilon = 0.01);
        assert_approx_eq!(f32, corner.y(), 1020.0, epsilon = 0.01);
    }

    #[test]
    fn test_canvas_rejects_empty_range() {
        let result = Canvas::new((5.0, 5.0), (0.0, 1.0), Size::new(1.0, 1.0));
        assert!(matches!(result, Err(BlockwireError::Layout(_))));

        let result = Canvas::new((0.0, 1.0), (2.0, -1.0), Size::new(1.0, 1.0));
        assert!(matches!(result, Err(BlockwireError::Layout(_))));

        let result = Canvas::new((0.0, f32::NAN), (0.0, 1.0), Size::new(1.0, 1.0));
        assert!(matches!(result, Err(BlockwireError::Layout(_))));
    }

    #[test]
    fn test_canvas_rejects_non_positive_size() {
        let result = Canvas::new((0.0, 1.0), (0.0, 1.0), Size::new(0.0, 1.0));
        assert!(matches!(result, Err(BlockwireError::Layout(_))));
    }
}
