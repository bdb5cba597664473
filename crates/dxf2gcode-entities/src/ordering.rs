//! Travel ordering of primitives.

use dxf2gcode_core::Point;
use tracing::debug;

use crate::model::Entity;

/// Reorders `entities` greedily by proximity of their starting points.
///
/// The first pick is the entity starting closest to `origin`; each further
/// pick is the remaining entity closest to the previous one. Entities with
/// no starting point keep their relative order and go last. Ties keep the
/// input order.
pub fn order_by_proximity(entities: Vec<Entity>, origin: Point) -> Vec<Entity> {
    let (mut pending, unplaced): (Vec<Entity>, Vec<Entity>) = entities
        .into_iter()
        .partition(|entity| entity.starting_point().is_ok());

    let mut ordered = Vec::with_capacity(pending.len() + unplaced.len());

    let mut next = nearest(&pending, |entity| {
        entity
            .starting_point()
            .map(|start| origin.distance_to(&start))
            .ok()
    });

    while let Some(index) = next {
        let current = pending.remove(index);
        next = nearest(&pending, |entity| current.distance_to(entity).ok());
        ordered.push(current);
    }

    if !unplaced.is_empty() {
        debug!(
            count = unplaced.len(),
            "appending entities without a starting point"
        );
    }
    ordered.extend(unplaced);
    ordered
}

fn nearest<F>(candidates: &[Entity], distance: F) -> Option<usize>
where
    F: Fn(&Entity) -> Option<f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, entity) in candidates.iter().enumerate() {
        let Some(d) = distance(entity) else {
            continue;
        };
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}
