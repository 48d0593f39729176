//! Error adapter for converting QuiltError to miette diagnostics.
//!
//! Quilt errors carry no source spans, so this adapter only supplies an
//! error code and help text for miette's graphical rendering.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use quilt::QuiltError;

/// Adapter wrapping a [`QuiltError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a QuiltError);

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
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            QuiltError::Io(_) => "quilt::io",
            QuiltError::MalformedLayout { .. } => "quilt::layout",
            QuiltError::Resources(_) => "quilt::resources",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            QuiltError::MalformedLayout { .. } => Some(Box::new(
                "layout files must be JSON objects with a string `type` tag",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
