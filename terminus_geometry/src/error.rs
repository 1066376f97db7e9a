//! Error types for terminus_geometry operations.

use thiserror::Error;

/// Errors returned when constructing geometry from invalid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Circle radius was negative or NaN.
    #[error("invalid radius {radius}: circle radius must be a non-negative number")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
}
