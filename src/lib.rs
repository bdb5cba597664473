//! # dxf2gcode
//!
//! Compiles planar drawings into G-code motion programs for plotters, laser
//! cutters and routers.
//!
//! ## Architecture
//!
//! dxf2gcode is organized as a workspace with multiple crates:
//!
//! 1. **dxf2gcode-core** - Points, units, error taxonomy
//! 2. **dxf2gcode-entities** - Line, Circle, Arc, Ellipse and PolyLine
//!    primitives and the motion context they emit into
//! 3. **dxf2gcode-settings** - Machine dialect and output configuration
//! 4. **dxf2gcode-gcode** - G-code context and program compiler
//! 5. **dxf2gcode-import** - DXF drawing import
//! 6. **dxf2gcode** - This crate: logging setup, file conversion and the CLI

use std::path::Path;

use anyhow::Context;

pub use dxf2gcode_core::{EntityError, EntityKind, MeasurementSystem, Point};
pub use dxf2gcode_entities::{
    order_by_proximity, Arc, ArcDirection, Attribute, AttributeValue, Circle, Ellipse, Entity,
    Line, MotionContext, PolyLine,
};
pub use dxf2gcode_gcode::{CompileError, GcodeContext, Program, ProgramCompiler};
pub use dxf2gcode_import::{DxfImporter, ImportError, ImportReport};
pub use dxf2gcode_settings::{Config, MachineSettings, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout free for the program
/// - RUST_LOG environment variable support (default level INFO)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Imports a DXF file and compiles it into a program.
pub fn convert_file(input: &Path, config: Config, include_blocks: bool) -> anyhow::Result<Program> {
    let report = DxfImporter::new()
        .with_blocks(include_blocks)
        .load_file(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            "some drawing entities were not converted"
        );
    }

    let compiler = ProgramCompiler::new(config).context("Invalid configuration")?;
    let program = compiler
        .compile(&report.entities)
        .with_context(|| format!("Failed to compile {}", input.display()))?;

    Ok(program)
}
