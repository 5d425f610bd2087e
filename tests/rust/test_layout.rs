use super::*;
use crate::style::PALETTE;
use crate::syntax::types::{EdgeDecl, NodeDecl, NodeShape};

fn make_graph(direction: Direction, nodes: Vec<&str>, edges: Vec<(&str, &str)>) -> Graph {
    Graph {
        direction,
        nodes: nodes
            .into_iter()
            .map(|id| NodeDecl::new(id, id, NodeShape::Rectangle))
            .collect(),
        edges: edges
            .into_iter()
            .map(|(a, b)| EdgeDecl::new(a, b))
            .collect(),
    }
}

fn layout(graph: &Graph) -> CompiledDiagram {
    full_layout(graph, &LayoutConfig::default())
}

fn pos(d: &CompiledDiagram, id: &str) -> (f64, f64) {
    let n = d.node(id).unwrap();
    (n.x, n.y)
}

// ── Spread ────────────────────────────────────────────────────────────────

#[test]
fn test_spread_centers_level() {
    assert_eq!(spread(400.0, 200.0, 1, 0), 400.0);
    assert_eq!(spread(400.0, 200.0, 2, 0), 300.0);
    assert_eq!(spread(400.0, 200.0, 2, 1), 500.0);
    assert_eq!(spread(400.0, 200.0, 3, 0), 200.0);
    assert_eq!(spread(400.0, 200.0, 3, 2), 600.0);
}

// ── Top-down ──────────────────────────────────────────────────────────────

#[test]
fn test_chain_top_down() {
    let d = layout(&make_graph(Direction::TD, vec!["A", "B", "C"], vec![("A", "B"), ("B", "C")]));
    assert_eq!(pos(&d, "A"), (400.0, 50.0));
    assert_eq!(pos(&d, "B"), (400.0, 170.0));
    assert_eq!(pos(&d, "C"), (400.0, 290.0));
}

#[test]
fn test_branch_centered_and_sorted() {
    let d = layout(&make_graph(
        Direction::TD,
        vec!["R", "Y", "X"],
        vec![("R", "Y"), ("R", "X")],
    ));
    assert_eq!(pos(&d, "X"), (300.0, 170.0));
    assert_eq!(pos(&d, "Y"), (500.0, 170.0));
}

#[test]
fn test_unreached_nodes_share_level_zero() {
    let d = layout(&make_graph(
        Direction::TD,
        vec!["A", "B", "C"],
        vec![("A", "B"), ("C", "C")],
    ));
    assert_eq!(d.node("C").unwrap().level, 0);
    // Level 0 holds A and C side by side.
    assert_eq!(pos(&d, "A"), (300.0, 50.0));
    assert_eq!(pos(&d, "C"), (500.0, 50.0));
}

#[test]
fn test_nodes_keep_declaration_order_and_colors() {
    let d = layout(&make_graph(Direction::TD, vec!["C", "B", "A"], vec![("A", "B"), ("B", "C")]));
    let ids: Vec<&str> = d.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "B", "A"]);
    assert_eq!(d.nodes[0].colors, PALETTE[0]);
    assert_eq!(d.nodes[2].colors, PALETTE[2]);
}

#[test]
fn test_layout_colors_follow_palette_cycle() {
    let ids: Vec<String> = (0..10).map(|i| format!("N{i}")).collect();
    let g = make_graph(Direction::TD, ids.iter().map(String::as_str).collect(), vec![]);
    let d = layout(&g);
    let colors: Vec<_> = d.nodes.iter().map(|n| n.colors).collect();
    assert_eq!(colors, crate::style::assign_colors(10));
    assert_eq!(d.nodes[8].colors, PALETTE[0]);
}

#[test]
fn test_dangling_edges_passed_through() {
    let d = layout(&make_graph(Direction::TD, vec!["A"], vec![("A", "Ghost")]));
    assert_eq!(d.edges, vec![EdgeDecl::new("A", "Ghost")]);
    assert_eq!(pos(&d, "A"), (400.0, 50.0));
}

// ── Other directions ──────────────────────────────────────────────────────

#[test]
fn test_bottom_up_mirrors_levels() {
    let d = layout(&make_graph(Direction::BT, vec!["A", "B", "C"], vec![("A", "B"), ("B", "C")]));
    assert_eq!(pos(&d, "A"), (400.0, 290.0));
    assert_eq!(pos(&d, "C"), (400.0, 50.0));
}

#[test]
fn test_left_right_swaps_axes() {
    let d = layout(&make_graph(
        Direction::LR,
        vec!["R", "X", "Y"],
        vec![("R", "X"), ("R", "Y")],
    ));
    assert_eq!(pos(&d, "R"), (50.0, 400.0));
    assert_eq!(pos(&d, "X"), (170.0, 300.0));
    assert_eq!(pos(&d, "Y"), (170.0, 500.0));
}

#[test]
fn test_right_left_mirrors() {
    let d = layout(&make_graph(Direction::RL, vec!["A", "B"], vec![("A", "B")]));
    assert_eq!(pos(&d, "A"), (170.0, 400.0));
    assert_eq!(pos(&d, "B"), (50.0, 400.0));
}

#[test]
fn test_config_override_beats_header() {
    let g = make_graph(Direction::LR, vec!["A", "B"], vec![("A", "B")]);
    let d = full_layout(&g, &LayoutConfig {
        direction_override: Some(Direction::TD),
        ..LayoutConfig::default()
    });
    assert_eq!(d.direction, Direction::TD);
    assert_eq!(pos(&d, "B"), (400.0, 170.0));
}

#[test]
fn test_custom_spacing() {
    let config = LayoutConfig {
        center_x: 0.0,
        h_spacing: 10.0,
        base_offset: 0.0,
        v_spacing: 5.0,
        direction_override: None,
    };
    let d = full_layout(
        &make_graph(Direction::TD, vec!["R", "A", "B"], vec![("R", "A"), ("R", "B")]),
        &config,
    );
    assert_eq!(pos(&d, "R"), (0.0, 0.0));
    assert_eq!(pos(&d, "A"), (-5.0, 5.0));
    assert_eq!(pos(&d, "B"), (5.0, 5.0));
}
