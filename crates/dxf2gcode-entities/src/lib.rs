//! # dxf2gcode Entities
//!
//! The primitive geometry model: five drawing primitives (line, circle, arc,
//! ellipse, polyline) behind one closed [`Entity`] sum type, and the
//! [`MotionContext`] trait they emit motion commands into.
//!
//! Every primitive can report its starting point, measure the distance to
//! another primitive and append its G-code fragment to a context. Emission
//! always leaves the tool disengaged.

pub mod attribute;
pub mod context;
pub mod model;
pub mod ordering;

pub use attribute::{Attribute, AttributeValue};
pub use context::MotionContext;
pub use dxf2gcode_core::{EntityError, EntityKind, EntityResult, Point};
pub use model::{Arc, ArcDirection, Circle, Ellipse, Entity, Line, PolyLine};
pub use ordering::order_by_proximity;
