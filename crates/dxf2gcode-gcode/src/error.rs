//! Error types for program compilation.

use dxf2gcode_core::EntityError;
use dxf2gcode_settings::ConfigError;
use thiserror::Error;

/// Errors that can occur while compiling primitives into a program.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A primitive failed to emit.
    #[error("Entity #{index} ({entity}) failed: {source}")]
    Entity {
        /// Position of the primitive in the emitted order.
        index: usize,
        /// Description of the primitive.
        entity: String,
        #[source]
        source: EntityError,
    },

    /// The machine configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
