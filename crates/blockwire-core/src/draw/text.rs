//! Text rendering definitions for diagram labels.
//!
//! This module provides types for configuring text appearance and rendering
//! text elements. Text is rendered as an SVG `<text>` element anchored at a
//! data-space point; the alignment decides which part of the text sits on
//! that point.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use std::rc::Rc;
//! # use blockwire_core::draw::{FontWeight, HorizontalAlign, Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14.0);
//! style.set_weight(FontWeight::Bold);
//! style.set_horizontal_align(HorizontalAlign::Right);
//!
//! let text = Text::new(Rc::new(style), "Nitroprusside");
//! assert_eq!(text.content(), "Nitroprusside");
//! ```
//!
//! Label content may contain math markup (see [`parse_markup`]), so `$G_{c1}$`
//! is drawn as an italic `G` with a `c1` subscript.

use std::rc::Rc;

use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, ZOrder, parse_markup},
    geometry::{Bounds, Point, Size, Viewport},
};

/// Relative size of sub- and superscript runs.
const SCRIPT_SCALE: &str = "70%";

/// Font weight of a label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Which horizontal part of the text is placed on the anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Text starts at the anchor
    #[default]
    Left,
    Center,
    /// Text ends at the anchor
    Right,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Which vertical part of the text is placed on the anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Alphabetic baseline sits on the anchor
    #[default]
    Baseline,
    Center,
    Top,
    Bottom,
}

impl VerticalAlign {
    /// Returns the SVG `dominant-baseline` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Baseline => "alphabetic",
            Self::Center => "central",
            Self::Top => "text-before-edge",
            Self::Bottom => "text-after-edge",
        }
    }
}

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"DejaVu Sans"` |
/// | Font size | `12` points |
/// | Weight | normal |
/// | Color | `None` (SVG default, black) |
/// | Alignment | left, baseline |
/// | Z-order | [`ZOrder::LABEL`] |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    color: Option<Color>,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
    z_order: ZOrder,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family (e.g., "DejaVu Sans", "Helvetica", "serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the text color. `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal alignment relative to the anchor point.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.horizontal_align = align;
    }

    /// Sets the vertical alignment relative to the anchor point.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.vertical_align = align;
    }

    /// Sets the paint priority.
    pub fn set_z_order(&mut self, z_order: ZOrder) {
        self.z_order = z_order;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "DejaVu Sans".to_string(),
            font_size: 12.0,
            weight: FontWeight::default(),
            color: None,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            z_order: ZOrder::LABEL,
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text {
    definition: Rc<TextDefinition>,
    content: String,
}

impl Text {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: Rc<TextDefinition>, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Returns the text content exactly as given, markup included.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &Rc<TextDefinition> {
        &self.definition
    }

    /// Builds the SVG `<text>` element anchored at a screen-space point.
    pub(crate) fn to_svg_element(&self, screen: Point, viewport: &Viewport) -> svg_element::Text {
        let definition = &self.definition;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", screen.x())
            .set("y", screen.y())
            .set("text-anchor", definition.horizontal_align().to_svg_value())
            .set(
                "dominant-baseline",
                definition.vertical_align().to_svg_value(),
            )
            .set("font-family", definition.font_family())
            .set("font-size", viewport.points_to_px(definition.font_size()))
            .set("font-weight", definition.weight().to_svg_value());

        if let Some(color) = definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for run in parse_markup(&self.content) {
            if !run.is_italic() && run.shift().to_svg_value().is_none() {
                rendered_text = rendered_text.add(SvgText::new(run.text()));
                continue;
            }

            let mut tspan = svg_element::TSpan::new("");
            if run.is_italic() {
                tspan = tspan.set("font-style", "italic");
            }
            if let Some(shift) = run.shift().to_svg_value() {
                tspan = tspan
                    .set("baseline-shift", shift)
                    .set("font-size", SCRIPT_SCALE);
            }
            rendered_text = rendered_text.add(tspan.add(SvgText::new(run.text())));
        }

        rendered_text
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, position: Point, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let screen = viewport.to_screen(position);
        output.add_to_layer(
            self.definition.z_order(),
            Box::new(self.to_svg_element(screen, viewport)),
        );
        output
    }

    /// Text is not measured; its bounds collapse onto the anchor point.
    fn bounds(&self, position: Point) -> Bounds {
        Bounds::new_from_center(position, Size::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;

    fn viewport() -> Viewport {
        Viewport::new(
            Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            Size::new(1000.0, 1000.0),
            Insets::default(),
            72.0,
        )
    }

    #[test]
    fn test_text_definition_defaults() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_size(), 12.0);
        assert_eq!(definition.weight(), FontWeight::Normal);
        assert_eq!(definition.horizontal_align(), HorizontalAlign::Left);
        assert_eq!(definition.vertical_align(), VerticalAlign::Baseline);
        assert_eq!(definition.z_order(), ZOrder::LABEL);
        assert!(definition.color().is_none());
    }

    #[test]
    fn test_text_render_plain() {
        let mut definition = TextDefinition::new();
        definition.set_font_size(14.0);
        definition.set_weight(FontWeight::Bold);
        definition.set_horizontal_align(HorizontalAlign::Right);
        definition.set_vertical_align(VerticalAlign::Center);
        let text = Text::new(Rc::new(definition), "Dopamine");

        let output = text.render_to_layers(Point::new(0.5, 2.5), &viewport());
        assert_eq!(output.z_orders(), vec![ZOrder::LABEL]);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains(">Dopamine<"));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("dominant-baseline=\"central\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("font-size=\"14\""));
        assert!(svg.contains("x=\"50\""));
        assert!(svg.contains("y=\"750\""));
        assert!(!svg.contains("tspan"));
    }

    #[test]
    fn test_text_render_math_markup() {
        let text = Text::new(Rc::new(TextDefinition::new()), "$G_{c1}$");
        assert_eq!(text.content(), "$G_{c1}$");

        let svg: String = text
            .render_to_layers(Point::new(5.0, 5.0), &viewport())
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert!(svg.contains("font-style=\"italic\""));
        assert!(svg.contains("baseline-shift=\"sub\""));
        assert!(svg.contains(">c1<"));
        assert!(!svg.contains('$'));
    }

    #[test]
    fn test_text_color() {
        let mut definition = TextDefinition::new();
        definition.set_color(Some(Color::new("darkred").unwrap()));
        let text = Text::new(Rc::new(definition), "b");

        let svg: String = text
            .render_to_layers(Point::new(1.0, 1.0), &viewport())
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert!(svg.contains("fill=\"darkred\""));
    }

    #[test]
    fn test_text_bounds_collapse_to_anchor() {
        let text = Text::new(Rc::new(TextDefinition::new()), "MAP");
        let bounds = text.bounds(Point::new(17.0, 8.8));
        assert_eq!(bounds.min_point(), Point::new(17.0, 8.8));
        assert_eq!(bounds.to_size(), Size::default());
    }
}
