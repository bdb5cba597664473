//! The motion-program context primitives emit into.

use dxf2gcode_core::Point;

/// An ordered, append-only motion program with a tracked tool position.
///
/// Implementations own the dialect (which words a positioning move, a
/// drawing move or an engage produce); primitives only decide the order of
/// calls. Emissions against one context must not interleave because each
/// one both reads and writes the tracked position.
pub trait MotionContext {
    /// Append one program line.
    fn push_code(&mut self, code: String);

    /// Non-drawing positioning move. Updates the tracked position.
    fn go_to_point(&mut self, x: f64, y: f64);

    /// Drawing (cutting) move. Updates the tracked position.
    fn draw_to_point(&mut self, x: f64, y: f64);

    /// Engage the tool.
    fn start(&mut self);

    /// Disengage the tool.
    fn stop(&mut self);

    /// Feed rate used verbatim in arc commands.
    fn xy_feedrate(&self) -> f64;

    /// Tracked tool position, `None` before the first move.
    fn last(&self) -> Option<Point>;

    /// Overwrite the tracked position without emitting a move.
    ///
    /// Arc emission uses this to record the end point its arc command
    /// already encodes.
    fn set_last(&mut self, point: Point);

    /// Append a `(comment)` line.
    fn comment(&mut self, text: &str) {
        self.push_code(format!("({})", text));
    }

    /// Append a blank separator line.
    fn separator(&mut self) {
        self.push_code(String::new());
    }
}
