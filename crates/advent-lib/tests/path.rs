use std::collections::HashSet;

use advent_lib::{
    build_grid_graph, build_oriented_graph, shortest_distances, shortest_path_members, Distance,
    Graph, Grid, Heading, Pose, Position, TURN_COST,
};

fn triangle() -> Graph<char> {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B', 1);
    graph.add_edge('B', 'C', 1);
    graph.add_edge('A', 'C', 5);
    graph
}

#[test]
fn indirect_route_beats_expensive_direct_edge() {
    let distances = shortest_distances(&triangle(), 'A');

    assert_eq!(distances.source(), 'A');
    assert_eq!(distances.get('A'), Distance::Finite(0));
    assert_eq!(distances.get('B'), Distance::Finite(1));
    assert_eq!(distances.get('C'), Distance::Finite(2));
    assert_eq!(distances.len(), 3);
}

#[test]
fn distances_satisfy_edge_relaxation() {
    let grid = Grid::parse(
        "#######\n\
         #S....#\n\
         #.##..#\n\
         #..#.##\n\
         ##...E#\n\
         #######",
    )
    .unwrap();
    let graph = build_oriented_graph(&grid, TURN_COST);
    let start = Pose::new(grid.require(b'S').unwrap(), Heading::East);
    let distances = shortest_distances(&graph, start);

    for node in graph.nodes() {
        let Some(cost) = distances.get(node).finite() else {
            continue;
        };
        for edge in graph.neighbours(node) {
            let next = distances
                .get(edge.target)
                .finite()
                .expect("neighbour of a reachable node is reachable");
            assert!(next <= cost + edge.weight, "{:?} -> {:?}", node, edge.target);
        }
    }
}

#[test]
fn every_reachable_node_is_explained_by_a_tight_edge() {
    let grid = Grid::parse(
        "#######\n\
         #S....#\n\
         #.##..#\n\
         #..#.##\n\
         ##...E#\n\
         #######",
    )
    .unwrap();
    let graph = build_oriented_graph(&grid, TURN_COST);
    let reversed = graph.transpose();
    let start = Pose::new(grid.require(b'S').unwrap(), Heading::East);
    let distances = shortest_distances(&graph, start);

    assert_eq!(distances.get(start), Distance::Finite(0));
    let mut reachable = 0;
    for (node, cost) in distances.reachable() {
        reachable += 1;
        if node == start {
            continue;
        }
        let tight = reversed.neighbours(node).iter().any(|edge| {
            distances
                .get(edge.target)
                .finite()
                .is_some_and(|previous| previous + edge.weight == cost)
        });
        assert!(tight, "{:?} at {} has no predecessor on a shortest path", node, cost);
    }
    assert_eq!(reachable, graph.len(), "every pose of a connected maze is reachable");
}

#[test]
fn repeated_searches_agree() {
    let graph = triangle();
    assert_eq!(shortest_distances(&graph, 'A'), shortest_distances(&graph, 'A'));
}

#[test]
fn disconnected_nodes_are_unreachable() {
    let mut graph = triangle();
    graph.add_edge('X', 'Y', 1);
    let distances = shortest_distances(&graph, 'A');

    assert_eq!(distances.get('X'), Distance::Unreachable);
    assert_eq!(distances.get('Y'), Distance::Unreachable);
    assert_eq!(distances.get('Z'), Distance::Unreachable, "unknown node");
    assert_eq!(distances.reachable().count(), 3);
    assert!(shortest_path_members(&graph.transpose(), &distances, ['Y']).is_empty());
}

#[test]
fn single_turn_costs_one_turn_penalty() {
    let grid = Grid::parse("#####\n#S..#\n###.#\n###E#\n#####").unwrap();
    let graph = build_oriented_graph(&grid, TURN_COST);
    let start = Pose::new(grid.require(b'S').unwrap(), Heading::East);
    let end = grid.require(b'E').unwrap();

    let distances = shortest_distances(&graph, start);
    let best = distances.min_over(Heading::ALL.map(|heading| Pose::new(end, heading)));

    assert_eq!(best, Distance::Finite(4 + TURN_COST));
}

#[test]
fn both_equal_paths_are_members() {
    let grid = Grid::parse("#####\n#S..#\n#.#.#\n#..E#\n#####").unwrap();
    let graph = build_grid_graph(&grid);
    let start = grid.require(b'S').unwrap();
    let end = grid.require(b'E').unwrap();

    let distances = shortest_distances(&graph, start);
    assert_eq!(distances.get(end), Distance::Finite(4));

    let members = shortest_path_members(&graph.transpose(), &distances, [end]);
    assert_eq!(members.len(), 8);
    assert!(members.contains(&Position::new(2, 1)));
    assert!(members.contains(&Position::new(1, 2)));
}

#[test]
fn only_the_cheapest_targets_seed_membership() {
    let mut graph = Graph::new();
    graph.add_edge('S', 'a', 1);
    graph.add_edge('a', 'T', 1);
    graph.add_edge('S', 'b', 5);
    graph.add_edge('b', 'U', 1);
    let distances = shortest_distances(&graph, 'S');

    let members = shortest_path_members(&graph.transpose(), &distances, ['T', 'U']);
    assert_eq!(members, HashSet::from(['S', 'a', 'T']));
}
