//! # dxf2gcode Core
//!
//! Core types shared by every dxf2gcode crate: planar points, the tag enum
//! naming each drawing primitive, measurement units and the error taxonomy
//! used across geometry, emission and import.

pub mod error;
pub mod point;
pub mod units;

pub use error::{EntityError, EntityResult};
pub use point::{EntityKind, Point};
pub use units::MeasurementSystem;
