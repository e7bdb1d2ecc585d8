//! Error types for Blockwire operations.
//!
//! This module provides the main error type [`BlockwireError`] which wraps
//! the error conditions that can occur while building or rendering a scene.

use std::io;

use thiserror::Error;

/// The main error type for Blockwire operations.
#[derive(Debug, Error)]
pub enum BlockwireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for BlockwireError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_conversion() {
        let error: BlockwireError = crate::export::Error::Render("bad scale".to_string()).into();
        assert!(matches!(error, BlockwireError::Export(_)));
        assert_eq!(error.to_string(), "Export error: Render error: bad scale");
    }

    #[test]
    fn test_layout_error_message() {
        let error = BlockwireError::Layout("unknown node `G99`".to_string());
        assert_eq!(error.to_string(), "Layout error: unknown node `G99`");
    }
}
