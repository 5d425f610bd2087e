//! Hierarchical layout — levels from a BFS, then centered coordinates.

pub mod graph;
pub mod levels;
pub mod types;

pub use graph::GraphIR;
pub use levels::LevelAssignment;
pub use types::{CompiledDiagram, Point, PositionedNode};

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::style::assign_colors;
use crate::syntax::types::{Direction, Graph};

/// Position of the `index`-th of `count` nodes, centered on `center`.
fn spread(center: f64, spacing: f64, count: usize, index: usize) -> f64 {
    center - ((count as f64 - 1.0) * spacing) / 2.0 + index as f64 * spacing
}

/// Coordinates for every node, keyed by id.
pub fn assign_coordinates(
    levels: &LevelAssignment,
    direction: Direction,
    config: &LayoutConfig,
) -> HashMap<String, Point> {
    let deepest = levels.level_count().saturating_sub(1);
    let mut coords: HashMap<String, Point> = HashMap::new();

    for (level, ids) in levels.groups() {
        // Mirrored directions count levels from the far end.
        let rank = match direction {
            Direction::TD | Direction::LR => level,
            Direction::BT | Direction::RL => deepest - level,
        };
        let along = config.base_offset + rank as f64 * config.v_spacing;
        for (index, id) in ids.iter().enumerate() {
            let across = spread(config.center_x, config.h_spacing, ids.len(), index);
            let point = if direction.is_horizontal() {
                Point::new(along, across)
            } else {
                Point::new(across, along)
            };
            coords.insert(id.clone(), point);
        }
    }
    coords
}

/// Run levels, coordinates and colors over a built graph.
pub fn full_layout(graph: &Graph, config: &LayoutConfig) -> CompiledDiagram {
    let direction = config.direction_override.unwrap_or(graph.direction);
    let gir = GraphIR::from_graph(graph);
    let levels = LevelAssignment::assign(&gir);
    let coords = assign_coordinates(&levels, direction, config);
    let colors = assign_colors(graph.nodes.len());

    let nodes = graph
        .nodes
        .iter()
        .zip(colors)
        .map(|(decl, colors)| {
            let level = levels.level(&decl.id).unwrap_or(0);
            let at = coords
                .get(&decl.id)
                .copied()
                .unwrap_or(Point::new(config.center_x, config.base_offset));
            PositionedNode::new(decl, level, at, colors)
        })
        .collect();

    CompiledDiagram {
        direction,
        nodes,
        edges: graph.edges.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
