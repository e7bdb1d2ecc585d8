//! Scenes: an ordered list of draw commands on a canvas.
//!
//! A [`Scene`] is assembled with a [`SceneBuilder`] and is immutable
//! afterwards. Commands keep the order in which they were added; what ends up
//! on top is decided by each command's [`ZOrder`] priority, not by that order.

mod builder;
mod styles;

pub use builder::SceneBuilder;
pub use styles::Styles;

use blockwire_core::{
    draw::{
        Block, Connector, ConnectorKind, Dot, LayeredOutput, MarkerRegistry, PositionedDrawable,
        SumNode, Text, ZOrder,
    },
    geometry::{Bounds, Viewport},
};

use crate::{canvas::Canvas, layout::Layout};

/// One element of a scene.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Block(PositionedDrawable<Block>),
    SumNode(PositionedDrawable<SumNode>),
    Dot(PositionedDrawable<Dot>),
    Label(PositionedDrawable<Text>),
    Connector(Connector),
}

impl DrawCommand {
    /// Returns the priority of the command's main shape.
    ///
    /// Composite elements may paint parts at other priorities: a block label
    /// sits above its frame and arrowed connector segments above plain ones.
    pub fn priority(&self) -> ZOrder {
        match self {
            Self::Block(block) => block.inner().definition().z_order(),
            Self::SumNode(sum) => sum.inner().definition().z_order(),
            Self::Dot(dot) => dot.inner().definition().z_order(),
            Self::Label(label) => label.inner().definition().z_order(),
            Self::Connector(connector) => connector.definition().line_z_order(),
        }
    }

    /// Returns the data-space area covered by the command.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Block(block) => block.bounds(),
            Self::SumNode(sum) => sum.bounds(),
            Self::Dot(dot) => dot.bounds(),
            Self::Label(label) => label.bounds(),
            Self::Connector(connector) => connector.bounds(),
        }
    }

    /// Renders the command. Arrowheads are registered with `markers`.
    pub fn render_to_layers(
        &self,
        viewport: &Viewport,
        markers: &mut MarkerRegistry,
    ) -> LayeredOutput {
        match self {
            Self::Block(block) => block.render_to_layers(viewport),
            Self::SumNode(sum) => sum.render_to_layers(viewport),
            Self::Dot(dot) => dot.render_to_layers(viewport),
            Self::Label(label) => label.render_to_layers(viewport),
            Self::Connector(connector) => connector.render_to_layers(viewport, markers),
        }
    }
}

/// Element counts of a scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneSummary {
    pub blocks: usize,
    pub sum_nodes: usize,
    pub dots: usize,
    pub labels: usize,
    pub connectors: usize,
    /// Connectors whose last segment ends in an arrowhead.
    pub arrows: usize,
}

/// A complete, immutable figure description.
#[derive(Debug, Clone)]
pub struct Scene {
    canvas: Canvas,
    layout: Layout,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub(crate) fn new(canvas: Canvas, layout: Layout, commands: Vec<DrawCommand>) -> Self {
        Self {
            canvas,
            layout,
            commands,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns the named node placements.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the commands in insertion order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn blocks(&self) -> impl Iterator<Item = &PositionedDrawable<Block>> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Block(block) => Some(block),
            _ => None,
        })
    }

    pub fn sum_nodes(&self) -> impl Iterator<Item = &PositionedDrawable<SumNode>> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::SumNode(sum) => Some(sum),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = &PositionedDrawable<Dot>> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Dot(dot) => Some(dot),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &PositionedDrawable<Text>> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Connector(connector) => Some(connector),
            _ => None,
        })
    }

    /// Returns the multi-segment routes, such as feedback loops.
    pub fn routes(&self) -> impl Iterator<Item = &Connector> {
        self.connectors()
            .filter(|connector| matches!(connector.kind(), ConnectorKind::Route { .. }))
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            blocks: self.blocks().count(),
            sum_nodes: self.sum_nodes().count(),
            dots: self.dots().count(),
            labels: self.labels().count(),
            connectors: self.connectors().count(),
            arrows: self
                .connectors()
                .filter(|connector| connector.has_arrowhead())
                .count(),
        }
    }
}
