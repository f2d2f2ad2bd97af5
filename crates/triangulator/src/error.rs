//! Errors surfaced by hole cutting and triangulation.
//!
//! Near-collinear corners are not errors: ear clipping drops them locally
//! (logged at trace level) instead of emitting zero-area triangles.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Too few vertices, non-finite coordinates, zero area, or (when checked) a self-intersection.
    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },
    /// The hole is not strictly inside the source, or no bridge vertex is visible.
    #[error("hole not enclosed by source polygon: {reason}")]
    HoleNotEnclosed { reason: String },
    /// Ear clipping stalled; the ring is malformed or self-intersecting.
    #[error("no ear found with {remaining} vertices left in the ring")]
    NoEarFound { remaining: usize },
}

impl GeometryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn not_enclosed(reason: impl Into<String>) -> Self {
        Self::HoleNotEnclosed {
            reason: reason.into(),
        }
    }

    /// Prefix the reason with the index of the hole being cut.
    pub(crate) fn for_hole(self, k: usize) -> Self {
        match self {
            Self::InvalidPolygon { reason } => Self::InvalidPolygon {
                reason: format!("hole {k}: {reason}"),
            },
            Self::HoleNotEnclosed { reason } => Self::HoleNotEnclosed {
                reason: format!("hole {k}: {reason}"),
            },
            other => other,
        }
    }
}
