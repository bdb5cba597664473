//! # dxf2gcode Import
//!
//! Reads DXF drawings into the primitive model. Lines, circles, arcs,
//! ellipses and (lightweight) polylines are converted; anything else is
//! skipped and counted.

pub mod dxf_import;
pub mod error;

pub use dxf_import::{DxfImporter, ImportReport};
pub use error::{ImportError, ImportResult};
