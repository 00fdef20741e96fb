//! Error types for prismview

use thiserror::Error;

/// Main error type for prismview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("a prism needs at least 3 sides, got {sides}")]
    InvalidSides { sides: usize },

    #[error("a prism with {sides} sides has more vertices than one draw call can cover")]
    TooManySides { sides: usize },

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for prismview operations
pub type Result<T> = std::result::Result<T, Error>;
