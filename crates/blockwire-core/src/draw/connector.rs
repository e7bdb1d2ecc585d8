//! Signal connectors between diagram elements.
//!
//! Every connector is reduced to a chain of straight [`Segment`]s before
//! rendering. Only the final segment of an arrowed connector carries an
//! arrowhead; the others are plain lines.
//!
//! # Connector kinds
//!
//! - [`ConnectorKind::Line`]: a single plain segment
//! - [`ConnectorKind::Arrow`]: a single segment ending in an arrowhead
//! - [`ConnectorKind::Orthogonal`]: an L-shaped path with one bend, see [`BendOrder`]
//! - [`ConnectorKind::Route`]: an arbitrary polyline, used for feedback loops
//!
//! Plain segments are painted at the definition's line priority and
//! arrowed segments at its arrow priority, so the arrowhead is never hidden
//! behind the line that leads to it.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{LayeredOutput, MarkerRegistry, StrokeDefinition, ZOrder},
    geometry::{Bounds, Point, Viewport},
};

/// Which leg of an orthogonal connector is drawn first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BendOrder {
    /// Horizontal leg first, bending at `(to.x, from.y)`.
    #[default]
    HorizontalFirst,
    /// Vertical leg first, bending at `(from.x, to.y)`.
    VerticalFirst,
}

impl BendOrder {
    /// Returns the corner point of an L-shaped path from `from` to `to`.
    pub fn corner(self, from: Point, to: Point) -> Point {
        match self {
            Self::HorizontalFirst => Point::new(to.x(), from.y()),
            Self::VerticalFirst => Point::new(from.x(), to.y()),
        }
    }
}

/// Geometry of a connector.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorKind {
    Line { from: Point, to: Point },
    Arrow { from: Point, to: Point },
    Orthogonal {
        from: Point,
        to: Point,
        order: BendOrder,
    },
    Route { points: Vec<Point>, arrowhead: bool },
}

impl ConnectorKind {
    /// Returns the polyline vertices and whether the path ends in an arrowhead.
    fn vertices(&self) -> (Vec<Point>, bool) {
        match self {
            Self::Line { from, to } => (vec![*from, *to], false),
            Self::Arrow { from, to } => (vec![*from, *to], true),
            Self::Orthogonal { from, to, order } => {
                (vec![*from, order.corner(*from, *to), *to], true)
            }
            Self::Route { points, arrowhead } => (points.clone(), *arrowhead),
        }
    }
}

/// A straight piece of a connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    arrowhead: bool,
}

impl Segment {
    pub fn new(start: Point, end: Point, arrowhead: bool) -> Self {
        Self {
            start,
            end,
            arrowhead,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns `true` if an arrowhead is drawn at the end of this segment.
    pub fn has_arrowhead(&self) -> bool {
        self.arrowhead
    }

    pub fn length(&self) -> f32 {
        self.end.sub_point(self.start).hypot()
    }

    /// Returns `true` if the segment runs parallel to one of the axes.
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x() == self.end.x() || self.start.y() == self.end.y()
    }
}

/// Stroke and paint priorities shared by connectors.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
    stroke: Rc<StrokeDefinition>,
    line_z_order: ZOrder,
    arrow_z_order: ZOrder,
}

impl ConnectorDefinition {
    pub fn new(stroke: Rc<StrokeDefinition>) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    /// Priority of plain segments.
    pub fn line_z_order(&self) -> ZOrder {
        self.line_z_order
    }

    /// Priority of segments ending in an arrowhead.
    pub fn arrow_z_order(&self) -> ZOrder {
        self.arrow_z_order
    }

    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }

    pub fn set_line_z_order(&mut self, z_order: ZOrder) {
        self.line_z_order = z_order;
    }

    pub fn set_arrow_z_order(&mut self, z_order: ZOrder) {
        self.arrow_z_order = z_order;
    }
}

impl Default for ConnectorDefinition {
    fn default() -> Self {
        Self {
            stroke: Rc::new(StrokeDefinition::default()),
            line_z_order: ZOrder::LINE,
            arrow_z_order: ZOrder::LABEL,
        }
    }
}

/// A connector drawn in data coordinates.
///
/// Unlike blocks and sum nodes a connector carries its own absolute
/// geometry, so it is rendered without a separate position.
#[derive(Debug, Clone)]
pub struct Connector {
    definition: Rc<ConnectorDefinition>,
    kind: ConnectorKind,
}

impl Connector {
    pub fn new(definition: Rc<ConnectorDefinition>, kind: ConnectorKind) -> Self {
        Self { definition, kind }
    }

    pub fn definition(&self) -> &Rc<ConnectorDefinition> {
        &self.definition
    }

    pub fn kind(&self) -> &ConnectorKind {
        &self.kind
    }

    /// Returns `true` if the path ends in an arrowhead.
    pub fn has_arrowhead(&self) -> bool {
        self.segments().last().is_some_and(Segment::has_arrowhead)
    }

    /// Splits the connector into straight segments.
    ///
    /// Repeated vertices are collapsed, so an orthogonal connector whose
    /// endpoints already share an axis yields a single segment. A path with
    /// fewer than two distinct vertices has no segments.
    pub fn segments(&self) -> Vec<Segment> {
        let (mut vertices, arrowhead) = self.kind.vertices();
        vertices.dedup();

        let count = vertices.len().saturating_sub(1);
        vertices
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Segment::new(pair[0], pair[1], arrowhead && index + 1 == count))
            .collect()
    }

    /// Returns the smallest box enclosing all vertices.
    pub fn bounds(&self) -> Bounds {
        let (vertices, _) = self.kind.vertices();
        let mut points = vertices.into_iter();
        let Some(first) = points.next() else {
            return Bounds::default();
        };
        points.fold(Bounds::new_from_corners(first, first), |bounds, point| {
            bounds.merge(&Bounds::new_from_corners(point, point))
        })
    }

    /// Renders each segment as its own `<path>`.
    ///
    /// Arrowed segments register their marker color with `markers`.
    pub fn render_to_layers(
        &self,
        viewport: &Viewport,
        markers: &mut MarkerRegistry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let stroke = self.definition.stroke();

        for segment in self.segments() {
            let start = viewport.to_screen(segment.start());
            let end = viewport.to_screen(segment.end());

            let path = svg_element::Path::new()
                .set(
                    "d",
                    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y()),
                )
                .set("fill", "none");
            let mut path = apply_stroke!(path, stroke, viewport);

            let z_order = if segment.has_arrowhead() {
                path = path.set("marker-end", markers.register(stroke.color()));
                self.definition.arrow_z_order()
            } else {
                self.definition.line_z_order()
            };

            output.add_to_layer(z_order, Box::new(path));
        }

        output
    }
}
