//! Per-field access with a lenient missing-field path.
//!
//! Asking a primitive for a field it does not define is not an error: the
//! lookup logs a warning and yields [`Attribute::Missing`], which renders as
//! an empty string. Callers that cannot proceed without the value turn the
//! sentinel into [`EntityError::MissingAttribute`] with
//! [`Attribute::require`].

use dxf2gcode_core::{EntityError, EntityKind, EntityResult, Point};
use std::fmt;
use tracing::warn;

/// Value of a defined primitive field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Point(Point),
    Scalar(f64),
    Count(usize),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{}", p),
            Self::Scalar(v) => write!(f, "{:.2}", v),
            Self::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Result of a field lookup on a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Present(AttributeValue),
    Missing { kind: EntityKind, name: String },
}

impl Attribute {
    /// Builds the missing-field sentinel, logging the lookup.
    pub(crate) fn missing(kind: EntityKind, name: &str) -> Self {
        warn!("No member \"{}\" contained in {}", name, kind);
        Self::Missing {
            kind,
            name: name.to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn value(&self) -> Option<AttributeValue> {
        match self {
            Self::Present(v) => Some(*v),
            Self::Missing { .. } => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Present(AttributeValue::Point(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Present(AttributeValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Converts the missing sentinel into a hard error.
    pub fn require(self) -> EntityResult<AttributeValue> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Missing { kind, name } => Err(EntityError::MissingAttribute { kind, name }),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(v) => write!(f, "{}", v),
            Self::Missing { .. } => Ok(()),
        }
    }
}
