//! Named node placements.
//!
//! A [`Layout`] records where every block and sum node of a scene sits, keyed
//! by name and kept in insertion order. Connection anchors are answered from
//! the layout, so connectors can be written in terms of node names instead of
//! repeating literal coordinates.
//!
//! # Example
//!
//! ```
//! # use blockwire::layout::{Layout, Placement};
//! # use blockwire::geometry::{Point, Size};
//! let mut layout = Layout::new();
//! layout
//!     .insert("G11", Placement::block(Point::new(11.0, 8.0), Size::new(1.6, 1.0)))
//!     .unwrap();
//!
//! let output = layout.right_center("G11").unwrap();
//! assert_eq!(output, Point::new(12.6, 8.5));
//! assert!(layout.right_center("G99").is_err());
//! ```

use indexmap::IndexMap;

use blockwire_core::geometry::{Bounds, Point, Size};

use crate::error::BlockwireError;

/// Where a node sits in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// A block, positioned by its lower-left corner.
    Block { lower_left: Point, size: Size },
    /// A sum node, positioned by its center.
    Sum { center: Point, radius: f32 },
}

impl Placement {
    pub fn block(lower_left: Point, size: Size) -> Self {
        Self::Block { lower_left, size }
    }

    pub fn sum(center: Point, radius: f32) -> Self {
        Self::Sum { center, radius }
    }

    /// Returns the area covered by the node.
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Block { lower_left, size } => Bounds::new_from_min_point(lower_left, size),
            Self::Sum { center, radius } => {
                Bounds::new_from_center(center, Size::new(radius * 2.0, radius * 2.0))
            }
        }
    }

    pub fn center(&self) -> Point {
        match *self {
            Self::Block { .. } => self.bounds().center(),
            Self::Sum { center, .. } => center,
        }
    }

    pub fn right_center(&self) -> Point {
        self.center().with_x(self.bounds().max_x())
    }

    pub fn left_center(&self) -> Point {
        self.center().with_x(self.bounds().min_x())
    }

    pub fn top_center(&self) -> Point {
        self.center().with_y(self.bounds().max_y())
    }

    pub fn bottom_center(&self) -> Point {
        self.center().with_y(self.bounds().min_y())
    }
}

/// Insertion-ordered map from node name to [`Placement`].
#[derive(Debug, Clone, Default)]
pub struct Layout {
    nodes: IndexMap<String, Placement>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] if the name is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        placement: Placement,
    ) -> Result<(), BlockwireError> {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return Err(BlockwireError::Layout(format!("duplicate node `{name}`")));
        }
        self.nodes.insert(name, placement);
        Ok(())
    }

    /// Looks up a node.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Layout`] if no node has this name.
    pub fn get(&self, name: &str) -> Result<&Placement, BlockwireError> {
        self.nodes
            .get(name)
            .ok_or_else(|| BlockwireError::Layout(format!("unknown node `{name}`")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.nodes.iter().map(|(name, placement)| (name.as_str(), placement))
    }

    pub fn center(&self, name: &str) -> Result<Point, BlockwireError> {
        self.get(name).map(Placement::center)
    }

    pub fn right_center(&self, name: &str) -> Result<Point, BlockwireError> {
        self.get(name).map(Placement::right_center)
    }

    pub fn left_center(&self, name: &str) -> Result<Point, BlockwireError> {
        self.get(name).map(Placement::left_center)
    }

    pub fn top_center(&self, name: &str) -> Result<Point, BlockwireError> {
        self.get(name).map(Placement::top_center)
    }

    pub fn bottom_center(&self, name: &str) -> Result<Point, BlockwireError> {
        self.get(name).map(Placement::bottom_center)
    }
}
