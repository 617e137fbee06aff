use std::fmt;

/// Errors returned by graphics operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A canvas must have a positive edge length.
    ZeroCanvas,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCanvas => write!(f, "canvas size must be positive"),
        }
    }
}

impl std::error::Error for GraphicsError {}
