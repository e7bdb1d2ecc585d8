//! Geometric primitives for block diagram placement.
//!
//! This module provides the geometric types used throughout Blockwire for
//! describing where diagram elements sit and how they map onto the output
//! image.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Viewport`] - Maps diagram (data) coordinates to output pixels
//!
//! # Coordinate Systems
//!
//! Diagrams are described in *data space*, which follows the mathematical
//! convention of a y-axis growing upwards:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! SVG output lives in *screen space* (origin top-left, y growing downwards).
//! Only the [`Viewport`] converts between the two; every other type is
//! agnostic of the axis direction.

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use blockwire_core::geometry::Point;
/// let p1 = Point::new(3.0, 8.0);
/// let p2 = Point::new(1.0, 1.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 4.0);
/// assert_eq!(sum.y(), 9.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 2.0);
/// assert_eq!(mid.y(), 4.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns true if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both dimensions are finite and strictly positive
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds spanning two arbitrary corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockwire_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new_from_corners(Point::new(19.0, 0.0), Point::new(-2.0, 11.0));
    /// assert_eq!(bounds.min_x(), -2.0);
    /// assert_eq!(bounds.max_y(), 11.0);
    /// assert_eq!(bounds.width(), 21.0);
    /// ```
    pub fn new_from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates bounds from the corner with the smallest coordinates and a size
    pub fn new_from_min_point(min_point: Point, size: Size) -> Self {
        Self {
            min_x: min_point.x,
            min_y: min_point.y,
            max_x: min_point.x + size.width,
            max_y: min_point.y + size.height,
        }
    }

    /// Creates bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the corner with the smallest coordinates
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns true if the point lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns true if `other` lies completely inside these bounds
    pub fn contains_bounds(self, other: Bounds) -> bool {
        self.contains(other.min_point()) && self.contains(Point::new(other.max_x, other.max_y))
    }

    /// Merges two bounds into the smallest bounds containing both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// Number of typographic points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Maps data-space coordinates onto the pixel grid of the output image.
///
/// The data extents are stretched to fill the plot area independently along
/// each axis, so a data unit is not necessarily square on screen. The
/// y-axis is flipped: `extents.max_y()` lands on the top edge of the plot
/// area. The plot area is surrounded by a pixel margin.
///
/// # Examples
///
/// ```
/// # use blockwire_core::geometry::{Bounds, Insets, Point, Size, Viewport};
/// let extents = Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
/// let viewport = Viewport::new(extents, Size::new(1000.0, 500.0), Insets::default(), 100.0);
///
/// let top_left = viewport.to_screen(Point::new(0.0, 5.0));
/// assert_eq!(top_left, Point::new(0.0, 0.0));
///
/// let bottom_right = viewport.to_screen(Point::new(10.0, 0.0));
/// assert_eq!(bottom_right, Point::new(1000.0, 500.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    extents: Bounds,
    plot_size: Size,
    margin: Insets,
    dpi: f32,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Arguments
    ///
    /// * `extents` - Visible data-space region.
    /// * `plot_size` - Pixel size the extents are stretched onto.
    /// * `margin` - Pixel margin around the plot area.
    /// * `dpi` - Pixels per inch, used to convert point sizes (fonts, line widths).
    pub fn new(extents: Bounds, plot_size: Size, margin: Insets, dpi: f32) -> Self {
        Self {
            extents,
            plot_size,
            margin,
            dpi,
        }
    }

    /// Returns the visible data-space region.
    pub fn extents(&self) -> Bounds {
        self.extents
    }

    /// Returns the total pixel size of the output, margins included.
    pub fn total_size(&self) -> Size {
        self.plot_size.add_padding(self.margin)
    }

    /// Pixels per data unit along the x-axis.
    pub fn scale_x(&self) -> f32 {
        self.plot_size.width() / self.extents.width()
    }

    /// Pixels per data unit along the y-axis.
    pub fn scale_y(&self) -> f32 {
        self.plot_size.height() / self.extents.height()
    }

    /// Converts a data-space point to screen pixels.
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(
            self.margin.left() + (point.x() - self.extents.min_x()) * self.scale_x(),
            self.margin.top() + (self.extents.max_y() - point.y()) * self.scale_y(),
        )
    }

    /// Converts a data-space size to screen pixels.
    pub fn to_screen_size(&self, size: Size) -> Size {
        Size::new(size.width() * self.scale_x(), size.height() * self.scale_y())
    }

    /// Converts a length in typographic points to pixels.
    pub fn points_to_px(&self, points: f32) -> f32 {
        points * self.dpi / POINTS_PER_INCH
    }
}
