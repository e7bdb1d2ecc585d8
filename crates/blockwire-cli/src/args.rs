//! Command-line argument definitions for the Blockwire CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, raster scale, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Blockwire renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file (`.svg` or `.png`)
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Scale factor applied to raster output
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,
}
