//! Step-by-step scene construction.

use std::rc::Rc;

use log::{debug, trace};

use blockwire_core::{
    color::Color,
    draw::{
        BendOrder, Block, Connector, ConnectorKind, Dot, DotDefinition, PositionedDrawable,
        SumNode, Text, TextDefinition, ZOrder,
    },
    geometry::Point,
};

use super::{DrawCommand, Scene, Styles};
use crate::{
    canvas::Canvas,
    error::BlockwireError,
    layout::{Layout, Placement},
};

/// Builds a [`Scene`] one element at a time.
///
/// Node helpers return the anchor later calls usually connect to: a block
/// returns the midpoint of its right edge and a sum node its center. Every
/// element is checked when it is added: coordinates must be finite and the
/// element must lie within the canvas extents, so a scene that builds is
/// always renderable.
///
/// # Example
///
/// ```
/// # use blockwire::canvas::Canvas;
/// # use blockwire::draw::BendOrder;
/// # use blockwire::geometry::{Point, Size};
/// # use blockwire::scene::{SceneBuilder, Styles};
/// let canvas = Canvas::new((0.0, 10.0), (0.0, 5.0), Size::new(8.0, 4.0)).unwrap();
/// let mut builder = SceneBuilder::new(canvas, Styles::default());
///
/// let sum = builder.sum("S", Point::new(1.0, 2.5)).unwrap();
/// let out = builder.block("G", Point::new(3.0, 2.0), "$G$").unwrap();
/// builder.arrow(Point::new(sum.x() + 0.2, sum.y()), Point::new(3.0, 2.5)).unwrap();
/// builder
///     .ortho_arrow(out, Point::new(sum.x(), sum.y() - 0.2), BendOrder::HorizontalFirst)
///     .unwrap();
///
/// let scene = builder.build();
/// assert_eq!(scene.summary().blocks, 1);
/// assert_eq!(scene.summary().arrows, 2);
/// ```
#[derive(Debug)]
pub struct SceneBuilder {
    canvas: Canvas,
    layout: Layout,
    styles: Styles,
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas, styles: Styles) -> Self {
        Self {
            canvas,
            layout: Layout::new(),
            styles,
            commands: Vec::new(),
        }
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Adds a block with the default white fill.
    ///
    /// Returns the midpoint of the block's right edge.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for a duplicate name or a
    /// non-finite position.
    pub fn block(
        &mut self,
        name: &str,
        lower_left: Point,
        label: &str,
    ) -> Result<Point, BlockwireError> {
        let block = Block::new(Rc::clone(self.styles.block()), label);
        self.add_block(name, lower_left, block)
    }

    /// Adds a block with a custom fill color.
    ///
    /// Returns the midpoint of the block's right edge.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for a duplicate name or a
    /// non-finite position.
    pub fn block_with_fill(
        &mut self,
        name: &str,
        lower_left: Point,
        label: &str,
        fill: Color,
    ) -> Result<Point, BlockwireError> {
        let mut definition = (**self.styles.block()).clone();
        definition.set_fill(Some(fill));
        let block = Block::new(Rc::new(definition), label);
        self.add_block(name, lower_left, block)
    }

    fn add_block(
        &mut self,
        name: &str,
        lower_left: Point,
        block: Block,
    ) -> Result<Point, BlockwireError> {
        ensure_finite(name, lower_left)?;
        let size = block.definition().size();
        if !size.is_positive() {
            return Err(BlockwireError::Layout(format!(
                "block `{name}` must have a positive size"
            )));
        }

        let anchor = block.right_center(lower_left);
        let command = DrawCommand::Block(PositionedDrawable::new(block).with_position(lower_left));
        self.ensure_on_canvas(name, &command)?;

        self.layout
            .insert(name, Placement::block(lower_left, size))?;
        trace!(name = name, x = lower_left.x(), y = lower_left.y(); "Block added");

        self.commands.push(command);
        Ok(anchor)
    }

    /// Adds a sum node centered on `center`. Returns the center.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for a duplicate name or a
    /// non-finite center.
    pub fn sum(&mut self, name: &str, center: Point) -> Result<Point, BlockwireError> {
        ensure_finite(name, center)?;
        let sum = SumNode::new(Rc::clone(self.styles.sum_node()));
        let radius = sum.definition().radius();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BlockwireError::Layout(format!(
                "sum node `{name}` must have a positive radius"
            )));
        }

        let command = DrawCommand::SumNode(PositionedDrawable::new(sum).with_position(center));
        self.ensure_on_canvas(name, &command)?;

        self.layout.insert(name, Placement::sum(center, radius))?;
        trace!(name = name, x = center.x(), y = center.y(); "Sum node added");

        self.commands.push(command);
        Ok(center)
    }

    /// Adds a filled dot.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for a non-finite center or a
    /// radius that is not positive.
    pub fn dot(
        &mut self,
        center: Point,
        radius: f32,
        color: Color,
        z_order: ZOrder,
    ) -> Result<(), BlockwireError> {
        ensure_finite("dot", center)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BlockwireError::Layout(format!(
                "dot radius must be positive, got {radius}"
            )));
        }

        let mut definition = DotDefinition::new(radius, color);
        definition.set_z_order(z_order);
        let dot = Dot::new(Rc::new(definition));
        self.push("dot", DrawCommand::Dot(PositionedDrawable::new(dot).with_position(center)))
    }

    /// Adds a straight arrow from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for non-finite or coincident endpoints.
    pub fn arrow(&mut self, from: Point, to: Point) -> Result<(), BlockwireError> {
        ensure_distinct("arrow", from, to)?;
        self.add_connector("arrow", ConnectorKind::Arrow { from, to })
    }

    /// Adds a plain line from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for non-finite or coincident endpoints.
    pub fn line(&mut self, from: Point, to: Point) -> Result<(), BlockwireError> {
        ensure_distinct("line", from, to)?;
        self.add_connector("line", ConnectorKind::Line { from, to })
    }

    /// Adds an L-shaped arrow with one bend.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for non-finite or coincident endpoints.
    pub fn ortho_arrow(
        &mut self,
        from: Point,
        to: Point,
        order: BendOrder,
    ) -> Result<(), BlockwireError> {
        ensure_distinct("orthogonal arrow", from, to)?;
        self.add_connector("orthogonal arrow", ConnectorKind::Orthogonal { from, to, order })
    }

    /// Adds a polyline through `points`, optionally ending in an arrowhead.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] if a point is not finite or the
    /// route has fewer than two distinct points.
    pub fn route(&mut self, points: &[Point], arrowhead: bool) -> Result<(), BlockwireError> {
        for point in points {
            ensure_finite("route", *point)?;
        }
        let mut distinct = points.to_vec();
        distinct.dedup();
        if distinct.len() < 2 {
            return Err(BlockwireError::Layout(
                "route needs at least two distinct points".to_string(),
            ));
        }

        self.add_connector(
            "route",
            ConnectorKind::Route {
                points: points.to_vec(),
                arrowhead,
            },
        )
    }

    fn add_connector(&mut self, what: &str, kind: ConnectorKind) -> Result<(), BlockwireError> {
        trace!(kind:? = &kind; "Connector added");
        let connector = Connector::new(Rc::clone(self.styles.connector()), kind);
        self.push(what, DrawCommand::Connector(connector))
    }

    /// Adds free text anchored at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] for a non-finite anchor or a font
    /// size that is not positive.
    pub fn label(
        &mut self,
        text: &str,
        at: Point,
        style: &Rc<TextDefinition>,
    ) -> Result<(), BlockwireError> {
        ensure_finite("label", at)?;
        let font_size = style.font_size();
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(BlockwireError::Layout(format!(
                "label `{text}` must have a positive font size"
            )));
        }

        let label = Text::new(Rc::clone(style), text);
        self.push(
            &format!("label `{text}`"),
            DrawCommand::Label(PositionedDrawable::new(label).with_position(at)),
        )
    }

    fn push(&mut self, what: &str, command: DrawCommand) -> Result<(), BlockwireError> {
        self.ensure_on_canvas(what, &command)?;
        self.commands.push(command);
        Ok(())
    }

    /// Labels are checked by their anchor point.
    fn ensure_on_canvas(&self, what: &str, command: &DrawCommand) -> Result<(), BlockwireError> {
        let extents = self.canvas.extents();
        let bounds = command.bounds();
        if !extents.contains_bounds(bounds) {
            return Err(BlockwireError::Layout(format!(
                "{what} spans ({}, {})..({}, {}), outside the canvas ({}, {})..({}, {})",
                bounds.min_x(),
                bounds.min_y(),
                bounds.max_x(),
                bounds.max_y(),
                extents.min_x(),
                extents.min_y(),
                extents.max_x(),
                extents.max_y()
            )));
        }
        Ok(())
    }

    /// Finishes the scene.
    pub fn build(self) -> Scene {
        debug!(
            nodes = self.layout.len(),
            commands = self.commands.len();
            "Scene built"
        );
        Scene::new(self.canvas, self.layout, self.commands)
    }
}

fn ensure_finite(what: &str, point: Point) -> Result<(), BlockwireError> {
    if !point.is_finite() {
        return Err(BlockwireError::Layout(format!(
            "{what} has a non-finite coordinate ({}, {})",
            point.x(),
            point.y()
        )));
    }
    Ok(())
}

fn ensure_distinct(what: &str, from: Point, to: Point) -> Result<(), BlockwireError> {
    ensure_finite(what, from)?;
    ensure_finite(what, to)?;
    if from == to {
        return Err(BlockwireError::Layout(format!(
            "{what} starts and ends at ({}, {})",
            from.x(),
            from.y()
        )));
    }
    Ok(())
}
