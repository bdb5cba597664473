use std::fmt;

use dxf2gcode_core::{EntityError, EntityResult, Point};
use tracing::warn;

use crate::attribute::AttributeValue;
use crate::context::MotionContext;

/// A set of chains, each drawn as one connected run of straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyLine {
    segments: Vec<Vec<Point>>,
}

impl PolyLine {
    /// Builds a polyline from its chains. Every chain needs at least two
    /// points; an empty chain list is accepted and carries no geometry.
    pub fn new(segments: Vec<Vec<Point>>) -> EntityResult<Self> {
        for (index, chain) in segments.iter().enumerate() {
            if chain.len() < 2 {
                return Err(EntityError::invalid(format!(
                    "polyline chain {} has {} point(s), at least 2 required",
                    index,
                    chain.len()
                )));
            }
            if chain.iter().any(|p| !p.is_finite()) {
                return Err(EntityError::invalid(format!(
                    "polyline chain {} contains a non-finite point",
                    index
                )));
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Vec<Point>] {
        &self.segments
    }

    pub fn chain_count(&self) -> usize {
        self.segments.len()
    }

    /// First point of the first chain, `None` without chains.
    pub fn starting_point(&self) -> Option<Point> {
        self.segments.first().and_then(|chain| chain.first()).copied()
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "segments" => Some(AttributeValue::Count(self.segments.len())),
            _ => None,
        }
    }

    /// Emits every chain as its own engage/disengage block, in order.
    pub fn emit<C: MotionContext + ?Sized>(&self, ctx: &mut C) {
        if self.segments.is_empty() {
            warn!("Skipping polyline without segments");
            return;
        }

        let label = self.to_string();
        for chain in &self.segments {
            let (first, rest) = match chain.split_first() {
                Some(split) => split,
                None => continue,
            };

            ctx.comment(&label);
            ctx.go_to_point(first.x, first.y);
            ctx.start();
            for point in rest {
                ctx.draw_to_point(point.x, point.y);
                ctx.set_last(*point);
            }
            ctx.stop();
            ctx.separator();
        }
    }
}

impl fmt::Display for PolyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polyline consisting of {} segments.", self.segments.len())
    }
}
