//! SVG document assembly and file output.

use std::{fs::File, io::Write, path::PathBuf};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use blockwire_core::{
    color::Color,
    draw::{LayeredOutput, MarkerRegistry},
    geometry::Size,
};

use crate::export;

/// Assembles the final SVG document from rendered layers.
///
/// The document is sized in pixels, carries an optional background
/// rectangle, the arrowhead marker definitions and one group per paint
/// priority.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    size: Size,
    background: Option<Color>,
}

impl SvgBuilder {
    /// Creates a builder for a document of the given pixel size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
        }
    }

    /// Sets the background color. `None` leaves the document transparent.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Builds the document.
    pub fn build(self, layers: LayeredOutput, markers: &MarkerRegistry) -> Document {
        let width = self.size.width();
        let height = self.size.height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = self.background {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            doc = doc.add(background);
        }

        if !markers.is_empty() {
            doc = doc.add(markers.draw_marker_definitions());
        }

        let groups = layers.render();
        debug!(layers = groups.len(), markers = markers.len(); "SVG layers assembled");

        groups.into_iter().fold(doc, |doc, group| doc.add(group))
    }
}

/// SVG file exporter.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: PathBuf,
}

impl Svg {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let file_name = self.file_name.display().to_string();
        info!(file_name = file_name; "Creating SVG file");

        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name = file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_document(&mut self, document: &Document) -> Result<(), export::Error> {
        self.write_document(document)
    }
}
