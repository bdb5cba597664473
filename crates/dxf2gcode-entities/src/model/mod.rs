use std::fmt;

use dxf2gcode_core::{EntityError, EntityKind, EntityResult, Point};
use tracing::debug;

use crate::attribute::Attribute;
use crate::context::MotionContext;

mod arc;
mod circle;
mod ellipse;
mod line;
mod polyline;

pub use arc::{Arc, ArcDirection};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polyline::PolyLine;

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    PolyLine(PolyLine),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Line(_) => EntityKind::Line,
            Entity::Circle(_) => EntityKind::Circle,
            Entity::Arc(_) => EntityKind::Arc,
            Entity::Ellipse(_) => EntityKind::Ellipse,
            Entity::PolyLine(_) => EntityKind::PolyLine,
        }
    }

    /// Human-readable label, also written as the program comment.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Where the tool first touches this primitive.
    ///
    /// Fails with `NoGeometry` for a polyline without chains and with
    /// `NotImplemented` for an ellipse.
    pub fn starting_point(&self) -> EntityResult<Point> {
        match self {
            Entity::Line(line) => Ok(line.starting_point()),
            Entity::Circle(circle) => Ok(circle.starting_point()),
            Entity::Arc(arc) => Ok(arc.starting_point()),
            Entity::Ellipse(ellipse) => Err(EntityError::NotImplemented {
                entity: ellipse.to_string(),
                operation: "starting_point",
            }),
            Entity::PolyLine(polyline) => {
                polyline
                    .starting_point()
                    .ok_or_else(|| EntityError::NoGeometry {
                        entity: polyline.to_string(),
                    })
            }
        }
    }

    /// Euclidean distance between the starting points of two primitives.
    pub fn distance_to(&self, other: &Entity) -> EntityResult<f64> {
        let from = self.measurable_start()?;
        let to = other.measurable_start()?;
        Ok(from.distance_to(&to))
    }

    fn measurable_start(&self) -> EntityResult<Point> {
        self.starting_point().map_err(|err| {
            EntityError::invalid(format!("cannot measure distance from {}: {}", self, err))
        })
    }

    /// Appends this primitive's motion commands to `ctx`.
    pub fn emit<C: MotionContext + ?Sized>(&self, ctx: &mut C) -> EntityResult<()> {
        debug!(kind = %self.kind(), "emitting {}", self);
        match self {
            Entity::Line(line) => line.emit(ctx),
            Entity::Circle(circle) => circle.emit(ctx),
            Entity::Arc(arc) => arc.emit(ctx),
            Entity::Ellipse(ellipse) => {
                return Err(EntityError::NotImplemented {
                    entity: ellipse.to_string(),
                    operation: "emit",
                })
            }
            Entity::PolyLine(polyline) => polyline.emit(ctx),
        }
        Ok(())
    }

    /// Looks up a named field. Unknown fields yield the missing sentinel and
    /// a logged warning instead of an error.
    pub fn attribute(&self, name: &str) -> Attribute {
        let value = match self {
            Entity::Line(line) => line.attribute(name),
            Entity::Circle(circle) => circle.attribute(name),
            Entity::Arc(arc) => arc.attribute(name),
            Entity::Ellipse(ellipse) => ellipse.attribute(name),
            Entity::PolyLine(polyline) => polyline.attribute(name),
        };
        match value {
            Some(value) => Attribute::Present(value),
            None => Attribute::missing(self.kind(), name),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Line(line) => fmt::Display::fmt(line, f),
            Entity::Circle(circle) => fmt::Display::fmt(circle, f),
            Entity::Arc(arc) => fmt::Display::fmt(arc, f),
            Entity::Ellipse(ellipse) => fmt::Display::fmt(ellipse, f),
            Entity::PolyLine(polyline) => fmt::Display::fmt(polyline, f),
        }
    }
}

impl From<Line> for Entity {
    fn from(line: Line) -> Self {
        Entity::Line(line)
    }
}

impl From<Circle> for Entity {
    fn from(circle: Circle) -> Self {
        Entity::Circle(circle)
    }
}

impl From<Arc> for Entity {
    fn from(arc: Arc) -> Self {
        Entity::Arc(arc)
    }
}

impl From<Ellipse> for Entity {
    fn from(ellipse: Ellipse) -> Self {
        Entity::Ellipse(ellipse)
    }
}

impl From<PolyLine> for Entity {
    fn from(polyline: PolyLine) -> Self {
        Entity::PolyLine(polyline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;

    fn line(x: f64, y: f64) -> Entity {
        Line::new(Point::new(x, y), Point::new(x + 1.0, y)).into()
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(line(0.0, 0.0).kind(), EntityKind::Line);
        let empty: Entity = PolyLine::new(Vec::new()).unwrap().into();
        assert_eq!(empty.kind(), EntityKind::PolyLine);
    }

    #[test]
    fn test_distance_between_lines() {
        let a = line(0.0, 0.0);
        let b = line(3.0, 4.0);
        assert_eq!(a.distance_to(&b).unwrap(), 5.0);
        assert_eq!(b.distance_to(&a).unwrap(), 5.0);
    }

    #[test]
    fn test_distance_without_start_is_invalid_geometry() {
        let empty: Entity = PolyLine::new(Vec::new()).unwrap().into();
        let err = line(0.0, 0.0).distance_to(&empty).unwrap_err();
        assert!(matches!(err, EntityError::InvalidGeometry { .. }));
        assert!(err.to_string().contains("Polyline consisting of 0 segments."));
    }

    #[test]
    fn test_attribute_lookup() {
        let entity = line(1.0, 2.0);
        assert_eq!(
            entity.attribute("start"),
            Attribute::Present(AttributeValue::Point(Point::new(1.0, 2.0)))
        );
        let missing = entity.attribute("radius");
        assert!(missing.is_missing());
        assert_eq!(missing.to_string(), "");
    }

    #[test]
    fn test_describe_idempotent() {
        let entity: Entity = Circle::new(Point::new(1.0, 1.0), 0.5).unwrap().into();
        assert_eq!(entity.describe(), entity.describe());
    }
}
