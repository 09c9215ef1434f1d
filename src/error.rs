//! Error types for cloth construction and grid lookups.

use core::fmt;

/// Errors raised while building or addressing a cloth.
///
/// Stepping never fails; only configuration and checked lookups do.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must be at least 2x2 and small enough to allocate.
    InvalidGridSize { size: usize },
    /// Spacing must be positive and finite.
    InvalidSpacing,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Gravity must be finite.
    InvalidGravity,
    /// Handle radius must be non-negative and finite.
    InvalidHandleRadius,
    /// Frame rate must be at least 1.
    InvalidFrameRate,
    /// Grid coordinate is out of bounds.
    ParticleOutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridSize { size } => {
                write!(f, "grid must be at least 2x2 and fit in memory (got {}x{})", size, size)
            }
            ClothError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            ClothError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            ClothError::InvalidGravity => write!(f, "gravity must be finite"),
            ClothError::InvalidHandleRadius => {
                write!(f, "handle radius must be non-negative and finite")
            }
            ClothError::InvalidFrameRate => write!(f, "frame rate must be at least 1"),
            ClothError::ParticleOutOfBounds { row, col, size } => {
                write!(f, "particle ({}, {}) out of bounds (grid: {}x{})", row, col, size, size)
            }
        }
    }
}
