//! G-code motion context.

use dxf2gcode_core::Point;
use dxf2gcode_entities::MotionContext;
use dxf2gcode_settings::MachineSettings;
use tracing::{debug, trace};

/// Accumulates program lines and the tool state for one program run.
#[derive(Debug, Clone)]
pub struct GcodeContext {
    settings: MachineSettings,
    codes: Vec<String>,
    last: Option<Point>,
    engaged: bool,
}

impl GcodeContext {
    pub fn new(settings: MachineSettings) -> Self {
        Self {
            settings,
            codes: Vec::new(),
            last: None,
            engaged: false,
        }
    }

    /// Program lines emitted so far.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn into_codes(self) -> Vec<String> {
        self.codes
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    fn dwell(&mut self, delay_ms: u32) {
        if delay_ms > 0 {
            self.codes.push(format!("G4 P{}", delay_ms));
        }
    }
}

impl MotionContext for GcodeContext {
    fn push_code(&mut self, code: String) {
        self.codes.push(code);
    }

    /// Rapid move. Lifts the tool first if it is engaged.
    fn go_to_point(&mut self, x: f64, y: f64) {
        if self.engaged {
            self.stop();
        }
        self.codes.push(format!("G0 X{:.2} Y{:.2}", x, y));
        self.last = Some(Point::new(x, y));
    }

    /// Cutting move. Engages the tool first if it is lifted.
    fn draw_to_point(&mut self, x: f64, y: f64) {
        if !self.engaged {
            self.start();
        }
        self.codes.push(format!(
            "G1 X{:.2} Y{:.2} F{:.2}",
            x, y, self.settings.xy_feedrate
        ));
        self.last = Some(Point::new(x, y));
    }

    fn start(&mut self) {
        if self.engaged {
            debug!("tool engaged while already engaged");
        }
        trace!("engage");
        self.codes.push(self.settings.spindle_on.clone());
        self.dwell(self.settings.start_delay_ms);
        self.engaged = true;
    }

    fn stop(&mut self) {
        trace!("disengage");
        self.codes.push(self.settings.spindle_off.clone());
        self.dwell(self.settings.stop_delay_ms);
        self.engaged = false;
    }

    fn xy_feedrate(&self) -> f64 {
        self.settings.xy_feedrate
    }

    fn last(&self) -> Option<Point> {
        self.last
    }

    fn set_last(&mut self, point: Point) {
        self.last = Some(point);
    }
}
