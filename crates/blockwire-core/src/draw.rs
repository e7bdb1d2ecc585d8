//! Drawable Components for Block Diagram Rendering
//!
//! This module provides drawable abstractions for the elements of a block
//! diagram. Positioned elements (blocks, sum nodes, dots and labels)
//! implement the [`Drawable`] trait; connectors carry their own absolute
//! points and render through [`Connector::render_to_layers`].
//!
//! # Layer-Based Rendering
//!
//! Every SVG node is emitted with an explicit [`ZOrder`]. The
//! [`LayeredOutput`] collecting them sorts by priority during final SVG
//! generation, so paint order never depends on call order alone.
//!
//! # Coordinates
//!
//! All positions are given in data space and converted to pixels through the
//! [`Viewport`] passed at render time.

mod block;
mod connector;
mod dot;
mod layer;
mod marker;
mod markup;
mod positioned;
mod stroke;
mod sum_node;
mod text;

pub use block::{Block, BlockDefinition};
pub use connector::{BendOrder, Connector, ConnectorDefinition, ConnectorKind, Segment};
pub use dot::{Dot, DotDefinition};
pub use layer::{LayeredOutput, SvgNode, ZOrder};
pub use marker::MarkerRegistry;
pub use markup::{BaselineShift, TextRun, markup_to_plain, parse_markup};
pub use positioned::PositionedDrawable;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use sum_node::{SumNode, SumNodeDefinition};
pub use text::{FontWeight, HorizontalAlign, Text, TextDefinition, VerticalAlign};

use crate::geometry::{Bounds, Point, Viewport};

/// Trait for diagram elements that are placed at a single position.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Implementations create SVG nodes in screen space (via `viewport`) and
    /// add them to the returned [`LayeredOutput`] with the z-order taken
    /// from their definition.
    ///
    /// # Arguments
    ///
    /// * `position` - Data-space anchor of the drawable. What the anchor
    ///   means (corner, center, text origin) is up to the implementation.
    /// * `viewport` - Data-to-pixel mapping of the output image.
    fn render_to_layers(&self, position: Point, viewport: &Viewport) -> LayeredOutput;

    /// Returns the data-space area covered when anchored at `position`.
    fn bounds(&self, position: Point) -> Bounds;
}
