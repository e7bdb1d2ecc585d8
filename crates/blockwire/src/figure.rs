//! Rendered figures.

use std::path::Path;

use log::info;
use svg::Document;

use blockwire_core::geometry::Size;

use crate::{
    error::BlockwireError,
    export::{self, Exporter, OutputFormat},
    scene::SceneSummary,
};

/// A finished SVG document together with its pixel size and element counts.
#[derive(Debug, Clone)]
pub struct Figure {
    document: Document,
    size: Size,
    summary: SceneSummary,
}

impl Figure {
    pub(crate) fn new(document: Document, size: Size, summary: SceneSummary) -> Self {
        Self {
            document,
            size,
            summary,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the pixel size of the document, margins included.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the element counts of the rendered scene.
    pub fn summary(&self) -> SceneSummary {
        self.summary
    }

    /// Serialises the document.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Writes the figure to `path` at the native resolution.
    ///
    /// # Errors
    ///
    /// See [`Figure::save_with_scale`].
    pub fn save(&self, path: &Path) -> Result<(), BlockwireError> {
        self.save_with_scale(path, 1.0)
    }

    /// Writes the figure to `path`, choosing the format from its extension.
    ///
    /// `scale` only affects raster output.
    ///
    /// # Errors
    ///
    /// Returns [`BlockwireError::Export`] for an unsupported extension, a
    /// PNG request without the `png` feature, or a failed write.
    pub fn save_with_scale(&self, path: &Path, scale: f32) -> Result<(), BlockwireError> {
        let format = OutputFormat::from_path(path)?;
        info!(path = path.display().to_string(), output_format:? = format; "Saving figure");

        let mut exporter = Self::exporter(format, path, scale)?;
        exporter.export_document(&self.document)?;
        Ok(())
    }

    fn exporter(
        format: OutputFormat,
        path: &Path,
        scale: f32,
    ) -> Result<Box<dyn Exporter>, export::Error> {
        match format {
            OutputFormat::Svg => Ok(Box::new(export::svg::Svg::new(path))),
            #[cfg(feature = "png")]
            OutputFormat::Png => Ok(Box::new(export::png::Png::new(path).with_scale(scale))),
            #[cfg(not(feature = "png"))]
            OutputFormat::Png => {
                let _ = scale;
                Err(export::Error::Render(
                    "PNG output requires the `png` feature".to_string(),
                ))
            }
        }
    }
}
