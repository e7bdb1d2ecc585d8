//! Z-ordered rendering system for SVG output.
//!
//! Drawables never rely on the order in which they are rendered to decide
//! what ends up on top. Instead each SVG node is tagged with an explicit
//! [`ZOrder`] priority and collected into a [`LayeredOutput`], which emits
//! nodes grouped and sorted by priority.
//!
//! # Overview
//!
//! - [`ZOrder`]: Paint priority, higher values are painted later (on top)
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by priority
//!
//! # Example
//!
//! ```
//! # use blockwire_core::draw::{LayeredOutput, ZOrder};
//! # use svg::node::element::{Path, Rectangle, Text};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(ZOrder::LABEL, Box::new(Text::new("G")));
//! output.add_to_layer(ZOrder::SHAPE, Box::new(Rectangle::new()));
//! output.add_to_layer(ZOrder::LINE, Box::new(Path::new()));
//!
//! // Groups come out as z-2, z-3, z-5
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 3);
//! ```

use std::fmt;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Paint priority of an SVG node.
///
/// Nodes with a higher priority are painted on top of nodes with a lower
/// one. Nodes sharing a priority keep the order in which they were added.
///
/// The associated constants name the priorities used by the stock element
/// styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZOrder(u8);

impl ZOrder {
    /// Plain patches such as signal take-off dots.
    pub const PATCH: Self = Self(1);
    /// Lines and the plain segments of connectors.
    pub const LINE: Self = Self(2);
    /// Free labels and arrow segments.
    pub const LABEL: Self = Self(3);
    /// Block frames and sum node circles.
    pub const SHAPE: Self = Self(5);
    /// Text drawn inside shapes and highlighted junction dots.
    pub const OVERLAY: Self = Self(10);

    /// Creates a priority from its raw value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw priority value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the name used for the `data-layer` attribute of the layer group.
    pub fn name(self) -> String {
        format!("z-{}", self.0)
    }
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::LINE
    }
}

impl fmt::Display for ZOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SVG nodes grouped by paint priority.
///
/// When rendered, nodes are emitted in priority order (bottom to top). The
/// sort is stable, so insertion order decides among equal priorities.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(ZOrder, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node with the given priority.
    pub fn add_to_layer(&mut self, z_order: ZOrder, node: SvgNode) {
        self.items.push((z_order, node));
    }

    /// Appends all nodes of another `LayeredOutput` after the nodes of this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of collected nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the distinct priorities present, lowest first.
    pub fn z_orders(&self) -> Vec<ZOrder> {
        let mut z_orders: Vec<ZOrder> = self.items.iter().map(|(z, _)| *z).collect();
        z_orders.sort();
        z_orders.dedup();
        z_orders
    }

    /// Renders all nodes to SVG groups, consuming the output.
    ///
    /// Each distinct priority becomes an SVG `<g>` element with a
    /// `data-layer` attribute such as `z-5`. Groups are returned from the
    /// lowest to the highest priority.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(z_order, _)| *z_order);

        let mut result = Vec::new();
        let mut current_z = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_z.name());

        for (z_order, node) in self.items {
            if z_order != current_z {
                result.push(Box::new(current_group) as SvgNode);

                current_z = z_order;
                current_group = svg_element::Group::new().set("data-layer", z_order.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Rectangle};

    #[test]
    fn test_z_order_ordering() {
        assert!(ZOrder::PATCH < ZOrder::LINE);
        assert!(ZOrder::LINE < ZOrder::LABEL);
        assert!(ZOrder::LABEL < ZOrder::SHAPE);
        assert!(ZOrder::SHAPE < ZOrder::OVERLAY);
        assert_eq!(ZOrder::new(5), ZOrder::SHAPE);
        assert_eq!(ZOrder::SHAPE.value(), 5);
        assert_eq!(ZOrder::OVERLAY.name(), "z-10");
    }

    #[test]
    fn test_layered_output_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_priority() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(ZOrder::OVERLAY, Box::new(Rectangle::new()));
        output.add_to_layer(ZOrder::SHAPE, Box::new(Rectangle::new()));
        output.add_to_layer(ZOrder::OVERLAY, Box::new(Rectangle::new()));

        assert_eq!(output.len(), 3);
        assert_eq!(output.z_orders(), vec![ZOrder::SHAPE, ZOrder::OVERLAY]);

        let groups = output.render();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].to_string().contains("data-layer=\"z-5\""));
        assert!(groups[1].to_string().contains("data-layer=\"z-10\""));
    }

    #[test]
    fn test_layered_output_stable_within_priority() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(ZOrder::SHAPE, Box::new(Circle::new().set("id", "first")));
        output.add_to_layer(ZOrder::LINE, Box::new(Rectangle::new()));
        output.add_to_layer(ZOrder::SHAPE, Box::new(Circle::new().set("id", "second")));

        let groups = output.render();
        let shape_group = groups[1].to_string();
        let first = shape_group.find("first").expect("first circle rendered");
        let second = shape_group.find("second").expect("second circle rendered");
        assert!(first < second);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(ZOrder::SHAPE, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(ZOrder::LINE, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].to_string().contains("z-2"));
    }
}
