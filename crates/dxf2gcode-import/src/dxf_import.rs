//! DXF to primitive conversion.

use std::path::Path;

use dxf::entities::EntityType;
use dxf::Drawing;
use dxf2gcode_core::{EntityResult, Point};
use dxf2gcode_entities::{Arc, Circle, Ellipse, Entity, Line, PolyLine};
use tracing::{info, warn};

use crate::error::{ImportError, ImportResult};

/// Primitives read from a drawing, in drawing order.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub entities: Vec<Entity>,
    /// Unsupported or degenerate DXF entities that were left out.
    pub skipped: usize,
}

/// Converts DXF drawings into primitives.
#[derive(Debug, Clone, Default)]
pub struct DxfImporter {
    include_blocks: bool,
}

impl DxfImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also convert entities found in block definitions, in block-local
    /// coordinates.
    pub fn with_blocks(mut self, include: bool) -> Self {
        self.include_blocks = include;
        self
    }

    /// Load and convert a `.dxf` file.
    pub fn load_file(&self, path: &Path) -> ImportResult<ImportReport> {
        let is_dxf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dxf"));
        if !is_dxf {
            return Err(ImportError::UnsupportedFormat(path.display().to_string()));
        }

        let mut file = std::fs::File::open(path)?;
        let drawing =
            Drawing::load(&mut file).map_err(|e| ImportError::DxfParseError(e.to_string()))?;

        let report = self.import(&drawing);
        info!(
            path = %path.display(),
            entities = report.entities.len(),
            skipped = report.skipped,
            "imported drawing"
        );
        Ok(report)
    }

    /// Convert every supported entity of an in-memory drawing.
    pub fn import(&self, drawing: &Drawing) -> ImportReport {
        let mut report = ImportReport::default();

        for entity in drawing.entities() {
            push_converted(&mut report, &entity.specific);
        }

        if self.include_blocks {
            for block in drawing.blocks() {
                for entity in &block.entities {
                    push_converted(&mut report, &entity.specific);
                }
            }
        }

        report
    }
}

fn push_converted(report: &mut ImportReport, specific: &EntityType) {
    match convert(specific) {
        Some(Ok(entity)) => report.entities.push(entity),
        Some(Err(err)) => {
            warn!("Skipping degenerate DXF entity: {}", err);
            report.skipped += 1;
        }
        None => {
            warn!("Skipping unsupported DXF entity: {}", entity_name(specific));
            report.skipped += 1;
        }
    }
}

/// `None` for entity types with no primitive counterpart.
fn convert(specific: &EntityType) -> Option<EntityResult<Entity>> {
    let converted = match specific {
        EntityType::Line(line) => Ok(Line::new(
            Point::new(line.p1.x, line.p1.y),
            Point::new(line.p2.x, line.p2.y),
        )
        .into()),
        EntityType::Circle(circle) => {
            Circle::new(Point::new(circle.center.x, circle.center.y), circle.radius)
                .map(Entity::from)
        }
        EntityType::Arc(arc) => {
            let (start, end) = ccw_sweep(arc.start_angle, arc.end_angle);
            Arc::new(Point::new(arc.center.x, arc.center.y), arc.radius, start, end)
                .map(Entity::from)
        }
        EntityType::Ellipse(ellipse) => Ellipse::new(
            Point::new(ellipse.center.x, ellipse.center.y),
            Point::new(ellipse.major_axis.x, ellipse.major_axis.y),
            ellipse.minor_axis_ratio,
            ellipse.start_parameter,
            ellipse.end_parameter,
        )
        .map(Entity::from),
        EntityType::LwPolyline(polyline) => {
            let points = polyline
                .vertices
                .iter()
                .map(|v| Point::new(v.x, v.y))
                .collect();
            // Bit 0 (value 1) indicates closed
            chain_to_polyline(points, polyline.flags & 1 != 0)
        }
        EntityType::Polyline(polyline) => {
            let points = polyline
                .vertices()
                .map(|v| Point::new(v.location.x, v.location.y))
                .collect();
            chain_to_polyline(points, polyline.flags & 1 != 0)
        }
        _ => return None,
    };
    Some(converted)
}

/// DXF arcs run counter-clockwise with angles in degrees. Returns radians
/// with `end >= start` so an arc crossing 0° keeps a positive sweep.
fn ccw_sweep(start_deg: f64, end_deg: f64) -> (f64, f64) {
    let start = start_deg.to_radians();
    let mut end = end_deg.to_radians();
    if end < start {
        end += std::f64::consts::TAU;
    }
    (start, end)
}

fn chain_to_polyline(mut points: Vec<Point>, closed: bool) -> EntityResult<Entity> {
    if closed {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
    }
    PolyLine::new(vec![points]).map(Entity::from)
}

fn entity_name(specific: &EntityType) -> &'static str {
    match specific {
        EntityType::Text(_) => "TEXT",
        EntityType::MText(_) => "MTEXT",
        EntityType::Spline(_) => "SPLINE",
        EntityType::Insert(_) => "INSERT",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxf2gcode_entities::ArcDirection;

    #[test]
    fn test_closed_chain_repeats_first_point() {
        let entity = chain_to_polyline(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
            true,
        )
        .unwrap();
        match entity {
            Entity::PolyLine(poly) => {
                assert_eq!(poly.segments()[0].len(), 4);
                assert_eq!(poly.segments()[0][3], Point::new(0.0, 0.0));
            }
            other => panic!("expected polyline, got {other}"),
        }
    }

    #[test]
    fn test_already_closed_chain_untouched() {
        let entity = chain_to_polyline(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 0.0),
            ],
            true,
        )
        .unwrap();
        if let Entity::PolyLine(poly) = entity {
            assert_eq!(poly.segments()[0].len(), 3);
        }
    }

    #[test]
    fn test_arc_crossing_zero_stays_counter_clockwise() {
        let arc = dxf::entities::Arc::new(dxf::Point::new(0.0, 0.0, 0.0), 1.0, 350.0, 10.0);
        let entity = convert(&EntityType::Arc(arc)).unwrap().unwrap();
        let Entity::Arc(arc) = entity else {
            panic!("expected arc, got {entity}");
        };

        assert_eq!(arc.direction(), ArcDirection::CounterClockwise);
        let mid = arc.find_point(0.5);
        assert!((mid.x - 1.0).abs() < 1e-9);
        assert!(mid.y.abs() < 1e-9);
    }

    #[test]
    fn test_ccw_sweep_keeps_ordered_angles() {
        let (start, end) = ccw_sweep(0.0, 90.0);
        assert_eq!(start, 0.0);
        assert!((end - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_single_vertex_chain_is_degenerate() {
        assert!(chain_to_polyline(vec![Point::new(0.0, 0.0)], false).is_err());
    }
}
