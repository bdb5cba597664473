//! # dxf2gcode G-code
//!
//! Turns an ordered list of drawing primitives into a G-code program.
//!
//! - [`GcodeContext`]: the motion context primitives emit into; renders
//!   positioning, drawing and engage/disengage calls in the configured
//!   machine dialect and tracks the tool position.
//! - [`ProgramCompiler`]: drives emission in order and wraps the body in a
//!   preamble and postscript.

pub mod compiler;
pub mod context;
pub mod error;

pub use compiler::{Program, ProgramCompiler};
pub use context::GcodeContext;
pub use error::{CompileError, CompileResult};
