use advent_lib::{
    build_grid_graph, build_oriented_graph, Edge, Grid, Heading, Pose, Position, TURN_COST,
};

fn corridor() -> Grid {
    Grid::parse("#####\n#S.E#\n#####").unwrap()
}

#[test]
fn grid_graph_links_open_neighbours() {
    let graph = build_grid_graph(&corridor());

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 4);
    let mut middle: Vec<_> = graph.neighbours(Position::new(2, 1)).to_vec();
    middle.sort_by_key(|edge| edge.target);
    assert_eq!(
        middle,
        vec![
            Edge { target: Position::new(1, 1), weight: 1 },
            Edge { target: Position::new(3, 1), weight: 1 },
        ]
    );
    assert!(!graph.contains(Position::new(0, 1)), "walls are not nodes");
}

#[test]
fn oriented_graph_charges_turns() {
    let graph = build_oriented_graph(&corridor(), TURN_COST);
    let pose = Pose::new(Position::new(2, 1), Heading::East);

    assert_eq!(graph.len(), 3 * Heading::ALL.len());
    let weight_to = |target: Pose| {
        graph
            .neighbours(pose)
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    };
    assert_eq!(weight_to(pose.forward()), Some(1));
    assert_eq!(weight_to(Pose::new(pose.position, Heading::South)), Some(TURN_COST));
    assert_eq!(weight_to(Pose::new(pose.position, Heading::North)), Some(TURN_COST));
    assert_eq!(weight_to(Pose::new(pose.position, Heading::West)), Some(2 * TURN_COST));
}

#[test]
fn oriented_graph_has_no_move_into_walls() {
    let graph = build_oriented_graph(&corridor(), TURN_COST);
    let facing_wall = Pose::new(Position::new(1, 1), Heading::North);

    assert!(graph
        .neighbours(facing_wall)
        .iter()
        .all(|edge| edge.target.position == facing_wall.position));
}

#[test]
fn custom_turn_cost_is_respected() {
    let graph = build_oriented_graph(&corridor(), 7);
    let pose = Pose::new(Position::new(1, 1), Heading::East);

    assert!(graph
        .neighbours(pose)
        .iter()
        .any(|edge| edge.target.heading == Heading::South && edge.weight == 7));
}
