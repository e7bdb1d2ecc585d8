//! Blockwire - static control-system block diagrams.
//!
//! A figure is described as a [`scene::Scene`]: a canvas, a layout of named
//! blocks and sum nodes, and an ordered list of draw commands, each with an
//! explicit paint priority. The [`Renderer`] turns a scene into an SVG
//! [`Figure`] that can be saved as SVG or, with the `png` feature, as PNG.
//!
//! # Examples
//!
//! ```rust,no_run
//! let figure = blockwire::render().expect("Failed to render");
//! figure
//!     .save(std::path::Path::new("decoupled.svg"))
//!     .expect("Failed to save");
//! ```

pub mod canvas;
pub mod config;
pub mod export;
pub mod figures;
pub mod layout;
pub mod scene;

mod error;
mod figure;

pub use blockwire_core::{color, draw, geometry};

pub use error::BlockwireError;
pub use figure::Figure;

use log::{debug, info};

use blockwire_core::draw::{LayeredOutput, MarkerRegistry};

use config::AppConfig;
use export::svg::SvgBuilder;
use scene::{Scene, Styles};

/// Renders the built-in decoupled control figure with the default configuration.
///
/// # Errors
///
/// Returns `BlockwireError` if the scene cannot be built or rendered.
pub fn render() -> Result<Figure, BlockwireError> {
    let renderer = Renderer::default();
    let scene = renderer.decoupled_control()?;
    renderer.render(&scene)
}

/// Renders scenes to SVG figures.
///
/// # Examples
///
/// ```rust
/// use blockwire::{Renderer, config::AppConfig};
///
/// let renderer = Renderer::new(AppConfig::default());
/// let scene = renderer.decoupled_control().expect("Failed to build scene");
/// let figure = renderer.render(&scene).expect("Failed to render");
///
/// assert!(figure.to_svg_string().starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Element styles derived from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Config`] for invalid style values.
    pub fn styles(&self) -> Result<Styles, BlockwireError> {
        Styles::from_config(self.config.style())
    }

    /// Builds the built-in decoupled control scene with the configured styles.
    ///
    /// # Errors
    ///
    /// Returns `BlockwireError` for invalid style values.
    pub fn decoupled_control(&self) -> Result<Scene, BlockwireError> {
        figures::decoupled_control(self.styles()?)
    }

    /// Render a scene to an SVG figure.
    ///
    /// Every command is rendered into a single layered output, which is then
    /// emitted in ascending priority order.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Config`] for an invalid canvas or background
    /// configuration.
    pub fn render(&self, scene: &Scene) -> Result<Figure, BlockwireError> {
        let canvas_config = self.config.canvas();
        canvas_config.validate().map_err(BlockwireError::Config)?;
        let background = self
            .config
            .style()
            .background_color()
            .map_err(BlockwireError::Config)?;
        let background = (background.alpha() > 0.0).then_some(background);

        let viewport = scene.canvas().viewport(canvas_config);
        let size = viewport.total_size();
        info!(
            width = size.width(),
            height = size.height(),
            commands = scene.commands().len();
            "Rendering scene"
        );

        let mut markers = MarkerRegistry::new();
        let mut layers = LayeredOutput::new();
        for command in scene.commands() {
            layers.merge(command.render_to_layers(&viewport, &mut markers));
        }
        debug!(
            nodes = layers.len(),
            priorities:? = layers.z_orders();
            "Scene rendered to layers"
        );

        let document = SvgBuilder::new(size)
            .with_background(background)
            .build(layers, &markers);

        let summary = scene.summary();
        info!(
            blocks = summary.blocks,
            sum_nodes = summary.sum_nodes,
            connectors = summary.connectors,
            labels = summary.labels;
            "Figure rendered"
        );

        Ok(Figure::new(document, size, summary))
    }
}
