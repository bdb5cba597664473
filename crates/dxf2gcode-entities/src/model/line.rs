use std::fmt;

use dxf2gcode_core::Point;

use crate::attribute::AttributeValue;
use crate::context::MotionContext;

/// Straight segment from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn starting_point(&self) -> Point {
        self.start
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "start" => Some(AttributeValue::Point(self.start)),
            "end" => Some(AttributeValue::Point(self.end)),
            _ => None,
        }
    }

    /// Positions at `start` and draws to `end`. The tool engagement is left
    /// to the context's move semantics.
    pub fn emit<C: MotionContext + ?Sized>(&self, ctx: &mut C) {
        ctx.comment(&self.to_string());
        ctx.go_to_point(self.start.x, self.start.y);
        ctx.draw_to_point(self.end.x, self.end.y);
        ctx.separator();
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line from {} to {}", self.start, self.end)
    }
}
