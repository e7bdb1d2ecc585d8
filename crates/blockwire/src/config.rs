//! Configuration types for Blockwire rendering.
//!
//! This module provides configuration structures that control how figures
//! are rasterised and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Controls the pixel resolution and margin of the output.
//! - [`StyleConfig`] - Controls visual styling options such as background color and line width.
//!
//! # Example
//!
//! ```
//! # use blockwire::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.canvas().dpi(), 100.0);
//! ```

use serde::Deserialize;

use blockwire_core::{
    color::Color,
    draw::{StrokeCap, StrokeJoin},
};

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks both sections.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        self.canvas.validate()?;
        self.style.validate()
    }
}

/// Output resolution settings.
///
/// The figure size itself belongs to the scene; this section only decides
/// how many pixels an inch of figure becomes and how much blank space
/// surrounds the plot area.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Pixels per inch.
    dpi: f32,

    /// Pixel margin around the plot area.
    margin: f32,
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`].
    ///
    /// # Arguments
    ///
    /// * `dpi` - Pixels per inch of figure.
    /// * `margin` - Blank pixels on each side of the plot area.
    pub fn new(dpi: f32, margin: f32) -> Self {
        Self { dpi, margin }
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Checks that the resolution is positive and the margin is not negative.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(format!("dpi must be positive, got {}", self.dpi));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(format!("margin must not be negative, got {}", self.margin));
        }
        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            margin: 20.0,
        }
    }
}

/// Visual styling configuration for rendered figures.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the figure, as a color string. Defaults to white.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used by every label.
    #[serde(default)]
    font_family: Option<String>,

    /// Width of outlines and connectors, in points.
    #[serde(default)]
    line_width: Option<f32>,

    /// Connector line cap: `butt`, `round` or `square`.
    #[serde(default)]
    line_cap: Option<String>,

    /// Connector line join: `miter`, `round` or `bevel`.
    #[serde(default)]
    line_join: Option<String>,
}

impl StyleConfig {
    /// Default figure background.
    pub const DEFAULT_BACKGROUND_COLOR: &'static str = "white";

    /// Default label font family.
    pub const DEFAULT_FONT_FAMILY: &'static str = "DejaVu Sans";

    /// Default outline and connector width in points.
    pub const DEFAULT_LINE_WIDTH: f32 = 1.5;

    /// Returns the parsed background [`Color`].
    ///
    /// A fully transparent color such as `"transparent"` leaves the figure
    /// without a background.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        let color = self
            .background_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_BACKGROUND_COLOR);
        Color::new(color).map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        self.font_family
            .as_deref()
            .unwrap_or(Self::DEFAULT_FONT_FAMILY)
    }

    /// Returns the configured line width in points.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is not a positive number.
    pub fn line_width(&self) -> Result<f32, String> {
        let width = self.line_width.unwrap_or(Self::DEFAULT_LINE_WIDTH);
        if !width.is_finite() || width <= 0.0 {
            return Err(format!("Invalid line width in config: {width}"));
        }
        Ok(width)
    }

    /// Returns the configured line cap.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown cap names.
    pub fn line_cap(&self) -> Result<StrokeCap, String> {
        self.line_cap
            .as_deref()
            .map_or(Ok(StrokeCap::default()), str::parse)
            .map_err(|err| format!("Invalid line cap in config: {err}"))
    }

    /// Returns the configured line join.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown join names.
    pub fn line_join(&self) -> Result<StrokeJoin, String> {
        self.line_join
            .as_deref()
            .map_or(Ok(StrokeJoin::default()), str::parse)
            .map_err(|err| format!("Invalid line join in config: {err}"))
    }

    /// Checks every configured value.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        self.background_color()?;
        self.line_width()?;
        self.line_cap()?;
        self.line_join()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.canvas().dpi(), 100.0);
        assert_eq!(config.canvas().margin(), 20.0);
        assert!(config.canvas().validate().is_ok());
        assert!(config.validate().is_ok());

        let style = config.style();
        assert_eq!(style.background_color().unwrap(), Color::white());
        assert_eq!(style.font_family(), "DejaVu Sans");
        assert_eq!(style.line_width().unwrap(), 1.5);
        assert_eq!(style.line_cap().unwrap(), StrokeCap::Butt);
        assert_eq!(style.line_join().unwrap(), StrokeJoin::Miter);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            dpi = 150.0

            [style]
            background_color = "white"
            line_cap = "round"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas().dpi(), 150.0);
        assert_eq!(config.canvas().margin(), 20.0);
        assert_eq!(
            config.style().background_color().unwrap(),
            Color::white()
        );
        assert_eq!(config.style().line_cap().unwrap(), StrokeCap::Round);
        assert_eq!(config.style().line_width().unwrap(), 1.5);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            dpi = 0.0

            [style]
            background_color = "not-a-color"
            line_width = -1.0
            line_join = "sharp"
            "#,
        )
        .unwrap();

        assert!(config.canvas().validate().unwrap_err().contains("dpi"));
        assert!(
            config
                .style()
                .background_color()
                .unwrap_err()
                .contains("Invalid background color")
        );
        assert!(config.style().line_width().is_err());
        assert!(config.style().validate().is_err());
        assert!(config.validate().unwrap_err().contains("dpi"));
        assert!(
            config
                .style()
                .line_join()
                .unwrap_err()
                .contains("invalid stroke join")
        );
    }

    #[test]
    fn test_style_validate_reports_each_field() {
        let cases = [
            ("line_cap = \"x\"", "line cap"),
            ("line_join = \"sharp\"", "line join"),
            ("line_width = 0.0", "line width"),
            ("background_color = \"nope\"", "background color"),
        ];
        for (line, field) in cases {
            let config: AppConfig = toml::from_str(&format!("[style]\n{line}\n")).unwrap();
            let err = config.validate().unwrap_err();
            assert!(err.contains(field), "{line}: {err}");
        }
    }

    #[test]
    fn test_transparent_background() {
        let config: AppConfig =
            toml::from_str("[style]\nbackground_color = \"transparent\"\n").unwrap();
        assert_eq!(config.style().background_color().unwrap().alpha(), 0.0);
    }
}
