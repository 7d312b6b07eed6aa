//! Crate-level error types.

use std::fmt;

/// Errors produced by the camview crate.
///
/// The transform math and gizmo generators never fail; these only come
/// from loading, saving and validating options.
#[derive(Debug)]
pub enum CamviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value violates a camera or projection precondition.
    InvalidOption(String),
}

impl fmt::Display for CamviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for CamviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
