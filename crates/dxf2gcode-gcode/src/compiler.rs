//! Program compilation from primitives.

use std::borrow::Cow;

use dxf2gcode_core::Point;
use dxf2gcode_entities::{order_by_proximity, Entity, MotionContext};
use dxf2gcode_settings::Config;
use tracing::{info, warn};

use crate::context::GcodeContext;
use crate::error::{CompileError, CompileResult};

/// A compiled G-code program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    preamble: Vec<String>,
    body: Vec<String>,
    postscript: Vec<String>,
    emitted: usize,
    skipped: usize,
    last: Option<Point>,
}

impl Program {
    /// Lines produced by the primitives, without preamble or postscript.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn postscript(&self) -> &[String] {
        &self.postscript
    }

    /// Number of primitives that contributed to the body.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Number of unsupported primitives left out.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Tracked tool position after the last primitive.
    pub fn last_position(&self) -> Option<Point> {
        self.last
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.preamble
            .iter()
            .chain(&self.body)
            .chain(&self.postscript)
            .map(String::as_str)
    }

    /// Serializes the whole program, one line per command.
    pub fn to_gcode(&self) -> String {
        let mut gcode = String::new();
        for line in self.lines() {
            gcode.push_str(line);
            gcode.push('\n');
        }
        gcode
    }
}

/// Compiles ordered primitives into a [`Program`].
pub struct ProgramCompiler {
    config: Config,
}

impl ProgramCompiler {
    /// Creates a compiler, rejecting an invalid configuration.
    pub fn new(config: Config) -> CompileResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emits every primitive, in order, into a fresh context.
    ///
    /// A primitive that cannot be emitted aborts compilation unless
    /// `skip_unsupported` is set and the failure is an unsupported
    /// operation.
    pub fn compile(&self, entities: &[Entity]) -> CompileResult<Program> {
        let output = &self.config.output;
        let entities: Cow<'_, [Entity]> = if output.optimize_order {
            let origin = output.home.unwrap_or_default();
            Cow::Owned(order_by_proximity(entities.to_vec(), origin))
        } else {
            Cow::Borrowed(entities)
        };

        let mut ctx = GcodeContext::new(self.config.machine.clone());
        let mut emitted = 0;
        let mut skipped = 0;

        for (index, entity) in entities.iter().enumerate() {
            match entity.emit(&mut ctx) {
                Ok(()) => emitted += 1,
                Err(err) if err.is_not_implemented() && output.skip_unsupported => {
                    warn!("Skipping unsupported entity #{}: {}", index, err);
                    skipped += 1;
                }
                Err(source) => {
                    return Err(CompileError::Entity {
                        index,
                        entity: entity.describe(),
                        source,
                    })
                }
            }
        }

        info!(emitted, skipped, lines = ctx.codes().len(), "compiled program");

        let last = ctx.last();
        Ok(Program {
            preamble: self.preamble(),
            body: ctx.into_codes(),
            postscript: self.postscript(),
            emitted,
            skipped,
            last,
        })
    }

    fn preamble(&self) -> Vec<String> {
        vec![
            format!("(Generated by dxf2gcode {})", env!("CARGO_PKG_VERSION")),
            self.config.output.units.gcode().to_string(),
            "G90".to_string(),
            String::new(),
        ]
    }

    fn postscript(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "(end of program)".to_string(),
            self.config.machine.spindle_off.clone(),
        ];
        if let Some(home) = self.config.output.home {
            lines.push(format!("G0 X{:.2} Y{:.2}", home.x, home.y));
        }
        lines.push("M2".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxf2gcode_entities::Line;

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::new();
        config.machine.xy_feedrate = -1.0;
        assert!(matches!(
            ProgramCompiler::new(config),
            Err(CompileError::Config(_))
        ));
    }

    #[test]
    fn test_empty_input_has_frame_only() {
        let compiler = ProgramCompiler::new(Config::new()).unwrap();
        let program = compiler.compile(&[]).unwrap();
        assert!(program.body().is_empty());
        assert_eq!(program.preamble()[1], "G21");
        assert_eq!(program.postscript().last().map(String::as_str), Some("M2"));
    }

    #[test]
    fn test_to_gcode_joins_lines() {
        let compiler = ProgramCompiler::new(Config::new()).unwrap();
        let line: Entity = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).into();
        let program = compiler.compile(&[line]).unwrap();

        let gcode = program.to_gcode();
        assert!(gcode.contains("G0 X0.00 Y0.00\nM3\nG1 X3.00 Y4.00 F1000.00\n"));
        assert!(gcode.ends_with("M2\n"));
        assert_eq!(gcode.lines().count(), program.lines().count());
    }
}
