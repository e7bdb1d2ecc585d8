//! Stroke definitions for outlines and connector lines.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: Color, width, cap and join of a stroke
//! - [`StrokeCap`]: How line endpoints are rendered (butt, round, square)
//! - [`StrokeJoin`]: How line corners are rendered (miter, round, bevel)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro applying stroke attributes to SVG elements
//!
//! Stroke widths are expressed in typographic points, like font sizes, and
//! are converted to pixels with the output [`Viewport`](crate::geometry::Viewport).
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"black"`, `1` |
//! | `width` | `stroke-width` | `2.083` (1.5pt at 100 dpi) |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |

use std::str::FromStr;

use crate::color::Color;

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// Defines how line corners (joins) are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use blockwire_core::draw::{StrokeCap, StrokeDefinition};
/// use blockwire_core::color::Color;
///
/// // Default stroke (black, 1.5pt)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.5);
///
/// let mut stroke = StrokeDefinition::new(Color::new("darkred").unwrap(), 1.0);
/// stroke.set_cap(StrokeCap::Round);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width in points.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width in points.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.5,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// The width is converted from points to pixels with the given viewport.
///
/// # Examples
///
/// ```
/// use blockwire_core::draw::StrokeDefinition;
/// use blockwire_core::geometry::{Bounds, Insets, Point, Size, Viewport};
/// use svg::node::element as svg_element;
///
/// let viewport = Viewport::new(
///     Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
///     Size::new(720.0, 720.0),
///     Insets::default(),
///     72.0,
/// );
/// let stroke = StrokeDefinition::default();
/// let rect = svg_element::Rectangle::new().set("x", 0).set("y", 0);
///
/// let rect = blockwire_core::apply_stroke!(rect, &stroke, &viewport);
/// assert!(rect.to_string().contains("stroke-width=\"1.5\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr, $viewport:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $viewport.points_to_px($stroke.width()))
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 3.0);
        assert_eq!(stroke.width(), 3.0);

        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(2.5);
        stroke.set_cap(StrokeCap::Square);
        stroke.set_join(StrokeJoin::Bevel);

        assert_eq!(stroke.color().to_string(), "green");
        assert_eq!(stroke.width(), 2.5);
        assert_eq!(stroke.cap(), StrokeCap::Square);
        assert_eq!(stroke.join(), StrokeJoin::Bevel);
    }

    #[test]
    fn test_stroke_cap_from_str() {
        assert_eq!(StrokeCap::from_str("butt").unwrap(), StrokeCap::Butt);
        assert_eq!(StrokeCap::from_str("round").unwrap(), StrokeCap::Round);
        assert_eq!(StrokeCap::from_str("square").unwrap(), StrokeCap::Square);

        let result = StrokeCap::from_str("invalid");
        assert!(result.unwrap_err().contains("invalid stroke cap"));
    }

    #[test]
    fn test_stroke_join_from_str() {
        assert_eq!(StrokeJoin::from_str("miter").unwrap(), StrokeJoin::Miter);
        assert_eq!(StrokeJoin::from_str("round").unwrap(), StrokeJoin::Round);
        assert_eq!(StrokeJoin::from_str("bevel").unwrap(), StrokeJoin::Bevel);

        let result = StrokeJoin::from_str("invalid");
        assert!(result.unwrap_err().contains("invalid stroke join"));
    }

    #[test]
    fn test_svg_values() {
        assert_eq!(StrokeCap::Round.to_svg_value(), "round");
        assert_eq!(StrokeJoin::Bevel.to_svg_value(), "bevel");
    }
}
