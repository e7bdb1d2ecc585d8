//! PNG rasterisation through `resvg`.

use std::path::PathBuf;

use log::{debug, error, info};
use svg::Document;

use crate::export;

/// Rasterises an SVG string to PNG bytes.
///
/// The image is `scale` times the pixel size of the SVG document. Labels are
/// drawn with the system fonts.
///
/// # Errors
///
/// Returns [`export::Error::Render`] if the scale is not positive, the SVG
/// cannot be parsed, or the image cannot be allocated or encoded.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, export::Error> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(export::Error::Render(format!(
            "raster scale must be positive, got {scale}"
        )));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|err| export::Error::Render(format!("failed to parse SVG: {err}")))?;

    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;
    debug!(width = width_px, height = height_px; "Rasterising SVG");

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or_else(|| {
        export::Error::Render(format!(
            "failed to allocate a {width_px}x{height_px} pixmap"
        ))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| export::Error::Render(format!("failed to encode PNG: {err}")))
}

/// PNG file exporter.
#[derive(Debug, Clone)]
pub struct Png {
    file_name: PathBuf,
    scale: f32,
}

impl Png {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            scale: 1.0,
        }
    }

    /// Sets the raster scale (builder style).
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl export::Exporter for Png {
    fn export_document(&mut self, document: &Document) -> Result<(), export::Error> {
        let file_name = self.file_name.display().to_string();
        info!(file_name = file_name, scale = self.scale; "Creating PNG file");

        let bytes = svg_to_png(&document.to_string(), self.scale)?;
        if let Err(err) = std::fs::write(&self.file_name, bytes) {
            error!(file_name = file_name, err:err; "Failed to write PNG file");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Exporter;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn small_svg() -> String {
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10" width="20" height="10"><rect x="0" y="0" width="20" height="10" fill="white"/></svg>"#
            .to_string()
    }

    #[test]
    fn test_svg_to_png_signature() {
        let bytes = svg_to_png(&small_svg(), 2.0).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_svg_to_png_rejects_bad_scale() {
        let result = svg_to_png(&small_svg(), 0.0);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_svg_to_png_rejects_invalid_svg() {
        let result = svg_to_png("not svg", 1.0);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_png_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");

        let document = Document::new()
            .set("viewBox", "0 0 8 8")
            .set("width", 8)
            .set("height", 8);
        Png::new(&path).with_scale(1.5).export_document(&document).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }
}
