use std::fmt;

use dxf2gcode_core::{EntityError, EntityResult, Point};
use tracing::trace;

use super::circle::validate_radius;
use crate::attribute::AttributeValue;
use crate::context::MotionContext;

/// Sweep direction implied by the sign of `end_angle - start_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

/// Circular arc swept from `start_angle` to `end_angle` (radians).
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> EntityResult<Self> {
        if !center.is_finite() {
            return Err(EntityError::invalid("arc center must be finite"));
        }
        validate_radius(radius)?;
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(EntityError::invalid("arc angles must be finite"));
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn direction(&self) -> ArcDirection {
        if self.end_angle - self.start_angle < 0.0 {
            ArcDirection::Clockwise
        } else {
            ArcDirection::CounterClockwise
        }
    }

    /// Point at `proportion` (0 = start, 1 = end) along the arc.
    pub fn find_point(&self, proportion: f64) -> Point {
        let delta = self.end_angle - self.start_angle;
        let angle = self.start_angle + delta * proportion;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn starting_point(&self) -> Point {
        self.find_point(0.0)
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "center" => Some(AttributeValue::Point(self.center)),
            "radius" => Some(AttributeValue::Scalar(self.radius)),
            "start_angle" => Some(AttributeValue::Scalar(self.start_angle)),
            "end_angle" => Some(AttributeValue::Scalar(self.end_angle)),
            _ => None,
        }
    }

    /// Emits a single arc command with absolute end point and center offsets
    /// relative to the start point.
    ///
    /// The tracked position is forced to the end point before the tool is
    /// engaged, since the arc command itself carries the end coordinates.
    /// Both sweep directions are written as `G3`.
    pub fn emit<C: MotionContext + ?Sized>(&self, ctx: &mut C) {
        let start = self.find_point(0.0);
        let end = self.find_point(1.0);
        let direction = self.direction();
        trace!(?direction, "emitting arc");

        let arc_code = format!(
            "G3 X{:.2} Y{:.2} I{:.2} J{:.2} F{:.2}",
            end.x,
            end.y,
            self.center.x - start.x,
            self.center.y - start.y,
            ctx.xy_feedrate()
        );

        ctx.comment(&self.to_string());
        ctx.go_to_point(start.x, start.y);
        ctx.set_last(end);
        ctx.start();
        ctx.push_code(arc_code);
        ctx.stop();
        ctx.separator();
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc at {}, radius {:.2}, from {:.2} to {:.2}",
            self.center, self.radius, self.start_angle, self.end_angle
        )
    }
}
