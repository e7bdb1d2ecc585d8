//! Color handling for Blockwire diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in SVG output.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#b22222", "rgb(255, 0, 0)", "darkred", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwire_core::color::Color;
    ///
    /// let firebrick = Color::new("#b22222").unwrap();
    /// let dark_red = Color::new("darkred").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Plain white, the default fill of blocks and sum nodes.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result is used to name per-color arrowhead markers and contains
    /// only alphanumeric characters and underscores, starting with a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwire_core::color::Color;
    ///
    /// let color = Color::new("#ff8000").unwrap();
    /// let id_str = color.to_id_safe_string();
    /// assert!(id_str.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// assert!(!id_str.contains('#'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        // SVG ids must not start with a digit
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#b22222").is_ok());
        assert!(Color::new("darkred").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_white() {
        assert_eq!(Color::white().to_string(), "white");
        assert!((Color::white().alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let safe_id = Color::new("#b22222").unwrap().to_id_safe_string();
        assert!(safe_id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(safe_id.starts_with(|c: char| c.is_ascii_alphabetic()));

        let named = Color::new("darkred").unwrap().to_id_safe_string();
        assert_eq!(named, "darkred");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let red1 = Color::new("red").unwrap();
        let red2 = Color::new("red").unwrap();
        let blue = Color::new("blue").unwrap();

        assert_eq!(red1, red2);
        assert_ne!(red1, blue);

        let mut set = HashSet::new();
        set.insert(red1);
        assert!(set.contains(&red2));
        assert!(!set.contains(&blue));
    }
}
