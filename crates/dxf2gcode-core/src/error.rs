//! Error handling for dxf2gcode
//!
//! Provides the error taxonomy shared by the geometry model and its
//! consumers:
//! missing fields, absent geometry, unsupported operations and invalid
//! geometry.
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::point::EntityKind;
use thiserror::Error;

/// Entity error type
///
/// Represents failures raised by drawing primitives while being built,
/// measured or emitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityError {
    /// A field the primitive does not define was required
    #[error("No member \"{name}\" contained in {kind}")]
    MissingAttribute {
        /// The primitive that lacks the field.
        kind: EntityKind,
        /// The requested field name.
        name: String,
    },

    /// The primitive carries no geometry to start from
    #[error("No geometry: {entity}")]
    NoGeometry {
        /// Description of the primitive.
        entity: String,
    },

    /// The operation is not available for this primitive
    #[error("{operation} not implemented for {entity}")]
    NotImplemented {
        /// Description of the primitive.
        entity: String,
        /// Name of the unavailable operation.
        operation: &'static str,
    },

    /// Geometry is degenerate or cannot be used
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },
}

impl EntityError {
    /// Shorthand for an `InvalidGeometry` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Check if this error marks an unsupported operation
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

/// Result type alias for entity operations.
pub type EntityResult<T> = std::result::Result<T, EntityError>;
