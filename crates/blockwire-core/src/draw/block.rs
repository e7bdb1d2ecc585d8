//! Transfer-function blocks.
//!
//! A block is an outlined rectangle with a centered label. Its position is the
//! lower-left corner in data coordinates. Connections leave from the midpoint
//! of the right edge.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, FontWeight, HorizontalAlign, LayeredOutput, StrokeDefinition, Text,
        TextDefinition, VerticalAlign, ZOrder,
    },
    geometry::{Bounds, Point, Size, Viewport},
};

/// Style of a block: frame size, fill, outline and label text.
///
/// Defaults to a 1.6 x 1.0 white rectangle with a 1.5pt black outline and a
/// bold 14pt label centered inside.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    size: Size,
    fill: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
    z_order: ZOrder,
}

impl BlockDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the frame size in data units.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    pub fn text(&self) -> &Rc<TextDefinition> {
        &self.text
    }

    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Sets the fill color. `None` leaves the frame transparent.
    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets the label style. The label is always centered on the block.
    pub fn set_text(&mut self, text: Rc<TextDefinition>) {
        self.text = text;
    }

    pub fn set_z_order(&mut self, z_order: ZOrder) {
        self.z_order = z_order;
    }
}

impl Default for BlockDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(14.0);
        text.set_weight(FontWeight::Bold);
        text.set_horizontal_align(HorizontalAlign::Center);
        text.set_vertical_align(VerticalAlign::Center);
        text.set_z_order(ZOrder::OVERLAY);

        Self {
            size: Size::new(1.6, 1.0),
            fill: Some(Color::white()),
            stroke: Rc::new(StrokeDefinition::default()),
            text: Rc::new(text),
            z_order: ZOrder::SHAPE,
        }
    }
}

/// A labelled block.
#[derive(Debug, Clone)]
pub struct Block {
    definition: Rc<BlockDefinition>,
    label: Text,
}

impl Block {
    pub fn new(definition: Rc<BlockDefinition>, label: impl Into<String>) -> Self {
        let label = Text::new(Rc::clone(definition.text()), label);
        Self { definition, label }
    }

    pub fn definition(&self) -> &Rc<BlockDefinition> {
        &self.definition
    }

    /// Returns the raw label text, markup included.
    pub fn label(&self) -> &str {
        self.label.content()
    }

    /// Midpoint of the right edge, where the output signal leaves.
    pub fn right_center(&self, position: Point) -> Point {
        let size = self.definition.size();
        Point::new(position.x() + size.width(), position.y() + size.height() / 2.0)
    }

    /// Center of the frame, where the label is anchored.
    pub fn center(&self, position: Point) -> Point {
        self.bounds(position).center()
    }
}

impl Drawable for Block {
    fn render_to_layers(&self, position: Point, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;
        let size = definition.size();

        // The top-left corner in screen space is the data-space upper-left
        let top_left = viewport.to_screen(Point::new(position.x(), position.y() + size.height()));
        let screen_size = viewport.to_screen_size(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", screen_size.width())
            .set("height", screen_size.height());

        rect = match definition.fill() {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };
        rect = apply_stroke!(rect, definition.stroke(), viewport);

        output.add_to_layer(definition.z_order(), Box::new(rect));
        output.merge(self.label.render_to_layers(self.center(position), viewport));

        output
    }

    fn bounds(&self, position: Point) -> Bounds {
        Bounds::new_from_min_point(position, self.definition.size())
    }
}
