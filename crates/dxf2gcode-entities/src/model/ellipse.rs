use std::fmt;

use dxf2gcode_core::{EntityError, EntityResult, Point};

use crate::attribute::AttributeValue;

/// Elliptical arc. Only described for now; it has no starting point and
/// cannot be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point,
    /// Vector from the center to the major-axis endpoint.
    major: Point,
    minor_to_major: f64,
    start_param: f64,
    end_param: f64,
}

impl Ellipse {
    pub fn new(
        center: Point,
        major: Point,
        minor_to_major: f64,
        start_param: f64,
        end_param: f64,
    ) -> EntityResult<Self> {
        if !center.is_finite() || !major.is_finite() {
            return Err(EntityError::invalid("ellipse center and axis must be finite"));
        }
        if !(minor_to_major > 0.0 && minor_to_major <= 1.0) {
            return Err(EntityError::invalid(format!(
                "minor/major ratio must be in (0, 1], got {}",
                minor_to_major
            )));
        }
        if !start_param.is_finite() || !end_param.is_finite() {
            return Err(EntityError::invalid("ellipse parameters must be finite"));
        }
        Ok(Self {
            center,
            major,
            minor_to_major,
            start_param,
            end_param,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn major(&self) -> Point {
        self.major
    }

    pub fn minor_to_major(&self) -> f64 {
        self.minor_to_major
    }

    pub fn start_param(&self) -> f64 {
        self.start_param
    }

    pub fn end_param(&self) -> f64 {
        self.end_param
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "center" => Some(AttributeValue::Point(self.center)),
            "major" => Some(AttributeValue::Point(self.major)),
            "minor_to_major" => Some(AttributeValue::Scalar(self.minor_to_major)),
            "start_param" => Some(AttributeValue::Scalar(self.start_param)),
            "end_param" => Some(AttributeValue::Scalar(self.end_param)),
            _ => None,
        }
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ellipse at {}, major {}, minor/major {:.2} start {:.2} end {:.2}",
            self.center, self.major, self.minor_to_major, self.start_param, self.end_param
        )
    }
}
