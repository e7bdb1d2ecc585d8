//! Export functionality for Blockwire figures.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a finished SVG document to an output file. It is the final stage
//! of the rendering pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! SceneBuilder
//!     ↓ build
//! Scene (draw commands + layout)
//!     ↓ render
//! Figure (SVG document)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::Svg`]; document assembly via [`svg::SvgBuilder`]
//! - `png`: raster output via `resvg`, available with the `png` feature
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`BlockwireError::Export`] at the crate
//! boundary.
//!
//! [`BlockwireError::Export`]: crate::BlockwireError::Export

/// SVG export backend.
pub mod svg;

/// PNG export backend.
#[cfg(feature = "png")]
pub mod png;

use std::path::Path;

use ::svg::Document;

/// Abstraction for figure export backends.
pub trait Exporter {
    /// Writes the document in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_document(&mut self, document: &Document) -> Result<(), Error>;
}

/// Output file formats, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            Some(other) => Err(Error::Render(format!(
                "unsupported output extension `.{other}`, expected .svg or .png"
            ))),
            None => Err(Error::Render(format!(
                "cannot infer output format of `{}`, expected a .svg or .png extension",
                path.display()
            ))),
        }
    }
}

/// Errors that can occur during figure export.
///
/// This type is converted into [`BlockwireError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`BlockwireError::Export`]: crate::BlockwireError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.svg")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("figures/loop.PNG")).unwrap(),
            OutputFormat::Png
        );
    }

    #[test]
    fn test_output_format_rejects_unknown_extension() {
        let err = OutputFormat::from_path(Path::new("out.pdf")).unwrap_err();
        assert!(err.to_string().contains("unsupported output extension `.pdf`"));

        let err = OutputFormat::from_path(Path::new("out")).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
