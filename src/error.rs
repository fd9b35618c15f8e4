//! Structured error types for sheetview.
//!
//! Every failure in the core is one of three programming-error kinds;
//! there is no partial success or retry semantics. Callers treat these
//! as preconditions, not transient failures.

use crate::point::Point;

/// All errors that can occur in sheetview geometry and grid operations.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// An argument was neither a point nor a 2-element coordinate.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// A point or frame is not contained by the bounds that must hold it.
    /// Signaled on reads and on bulk-load preflight; a failing bulk load
    /// writes nothing.
    #[error("{location} is outside {bounds}")]
    OutOfBounds {
        /// Display form of the offending point or frame.
        location: String,
        /// Display form of the containing frame.
        bounds: String,
    },

    /// Origin is not the top-left of corner. Signaled only at frame
    /// construction; no repair is attempted.
    #[error("invalid geometry: origin {origin} must be top-left of corner {corner}")]
    InvalidGeometry {
        /// The rejected origin.
        origin: Point,
        /// The rejected corner.
        corner: Point,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetError>;
