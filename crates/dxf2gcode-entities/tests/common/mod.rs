use dxf2gcode_entities::{MotionContext, Point};

/// A context call, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Code(String),
    GoTo(Point),
    DrawTo(Point),
    Start,
    Stop,
    SetLast(Point),
}

/// Context that records every call and renders moves as plain G-code.
pub struct Recorder {
    pub calls: Vec<Call>,
    pub codes: Vec<String>,
    pub last: Option<Point>,
    pub feed: f64,
    pub engaged: bool,
}

impl Recorder {
    pub fn new(feed: f64) -> Self {
        Self {
            calls: Vec::new(),
            codes: Vec::new(),
            last: None,
            feed,
            engaged: false,
        }
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::DrawTo(_)))
            .count()
    }
}

impl MotionContext for Recorder {
    fn push_code(&mut self, code: String) {
        self.calls.push(Call::Code(code.clone()));
        self.codes.push(code);
    }

    fn go_to_point(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.calls.push(Call::GoTo(p));
        self.codes.push(format!("G0 X{:.2} Y{:.2}", x, y));
        self.last = Some(p);
    }

    fn draw_to_point(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.calls.push(Call::DrawTo(p));
        self.codes
            .push(format!("G1 X{:.2} Y{:.2} F{:.2}", x, y, self.feed));
        self.last = Some(p);
    }

    fn start(&mut self) {
        self.calls.push(Call::Start);
        self.codes.push("M3".to_string());
        self.engaged = true;
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.codes.push("M5".to_string());
        self.engaged = false;
    }

    fn xy_feedrate(&self) -> f64 {
        self.feed
    }

    fn last(&self) -> Option<Point> {
        self.last
    }

    fn set_last(&mut self, point: Point) {
        self.calls.push(Call::SetLast(point));
        self.last = Some(point);
    }
}
