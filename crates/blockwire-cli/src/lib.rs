//! CLI logic for the Blockwire renderer.
//!
//! The binary renders the built-in decoupled control figure and writes it
//! to the requested output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::Path;

use log::info;

use blockwire::{BlockwireError, Renderer};

/// Run the Blockwire CLI application
///
/// Loads the configuration, renders the decoupled control figure and saves
/// it in the format implied by the output extension.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BlockwireError` for:
/// - Configuration loading errors
/// - Layout errors
/// - Rendering and export errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), BlockwireError> {
    info!(output_path = args.output; "Rendering decoupled control figure");

    let app_config = config::load_config(args.config.as_ref())?;

    let renderer = Renderer::new(app_config);
    let scene = renderer.decoupled_control()?;
    let figure = renderer.render(&scene)?;

    figure.save_with_scale(Path::new(&args.output), args.scale)?;

    let summary = figure.summary();
    info!(
        output_file = args.output,
        blocks = summary.blocks,
        connectors = summary.connectors;
        "Figure exported successfully"
    );

    Ok(())
}
