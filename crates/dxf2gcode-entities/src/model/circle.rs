use std::fmt;

use dxf2gcode_core::{EntityError, EntityResult, Point};

use crate::attribute::AttributeValue;
use crate::context::MotionContext;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> EntityResult<Self> {
        if !center.is_finite() {
            return Err(EntityError::invalid("circle center must be finite"));
        }
        validate_radius(radius)?;
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Leftmost point of the circle; the full-circle command starts and ends
    /// here with its center directly to the right.
    pub fn starting_point(&self) -> Point {
        Point::new(self.center.x - self.radius, self.center.y)
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "center" => Some(AttributeValue::Point(self.center)),
            "radius" => Some(AttributeValue::Scalar(self.radius)),
            _ => None,
        }
    }

    /// Emits one full revolution as a single `G3` with a relative center
    /// offset. The tracked position stays at the start point.
    pub fn emit<C: MotionContext + ?Sized>(&self, ctx: &mut C) {
        let start = self.starting_point();
        let arc_code = format!("G3 I{:.2} J0 F{:.2}", self.radius, ctx.xy_feedrate());

        ctx.comment(&self.to_string());
        ctx.go_to_point(start.x, start.y);
        ctx.start();
        ctx.push_code(arc_code);
        ctx.stop();
        ctx.separator();
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle at [{:.2},{:.2}], radius {:.2}",
            self.center.x, self.center.y, self.radius
        )
    }
}

pub(crate) fn validate_radius(radius: f64) -> EntityResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(EntityError::invalid(format!(
            "radius must be positive, got {}",
            radius
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_point_is_leftmost() {
        let circle = Circle::new(Point::new(5.0, 5.0), 2.0).unwrap();
        assert_eq!(circle.starting_point(), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert!(Circle::new(Point::new(0.0, 0.0), 0.0).is_err());
        assert!(Circle::new(Point::new(0.0, 0.0), -1.0).is_err());
        assert!(Circle::new(Point::new(0.0, 0.0), f64::NAN).is_err());
    }

    #[test]
    fn test_describe() {
        let circle = Circle::new(Point::new(5.0, 5.0), 2.0).unwrap();
        assert_eq!(circle.to_string(), "Circle at [5.00,5.00], radius 2.00");
    }
}
