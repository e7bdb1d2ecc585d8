//! Error adapter for converting BlockwireError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use blockwire::BlockwireError;

/// Adapter giving each [`BlockwireError`] variant a diagnostic code and help.
pub struct ErrorAdapter<'a>(pub &'a BlockwireError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BlockwireError::Io(_) => "blockwire::io",
            BlockwireError::Config(_) => "blockwire::config",
            BlockwireError::Layout(_) => "blockwire::layout",
            BlockwireError::Export(_) => "blockwire::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BlockwireError::Config(_) => "check the [canvas] and [style] tables of the config file",
            BlockwireError::Export(_) => "supported output extensions are .svg and .png",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`BlockwireError`] so that miette can render it.
pub fn to_reportable(err: &BlockwireError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
