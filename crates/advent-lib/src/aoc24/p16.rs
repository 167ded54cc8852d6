//! Reindeer Maze: lowest score through an orientation-aware maze.
//!
//! Each open cell becomes four [`Pose`] nodes, one per heading. Stepping
//! forward costs 1 and every quarter turn costs [`TURN_COST`]. The reindeer
//! starts on `S` facing east and may finish on `E` facing any way.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_oriented_graph, Graph, TURN_COST};
use crate::grid::{Grid, Heading, Pose, Position};
use crate::path::{shortest_distances, shortest_path_members, DistanceMap};

const PUZZLE: &str = "aoc24:p16";

struct Solved {
    graph: Graph<Pose>,
    distances: DistanceMap<Pose>,
    targets: [Pose; 4],
}

fn solve(grid: &Grid) -> Result<Solved> {
    let start = Pose::new(grid.require(b'S')?, Heading::East);
    let end = grid.require(b'E')?;
    let graph = build_oriented_graph(grid, TURN_COST);
    let distances = shortest_distances(&graph, start);
    debug!(poses = graph.len(), edges = graph.edge_count(), "maze graph built");
    Ok(Solved {
        graph,
        distances,
        targets: Heading::ALL.map(|heading| Pose::new(end, heading)),
    })
}

/// Lowest possible score from `S` to `E`.
pub fn part_a(input: &str) -> Result<u64> {
    let grid = Grid::parse(input)?;
    let solved = solve(&grid)?;
    solved
        .distances
        .min_over(solved.targets)
        .finite()
        .ok_or_else(|| Error::no_solution(PUZZLE, "the end tile is unreachable"))
}

/// Number of tiles on at least one best path.
pub fn part_b(input: &str) -> Result<usize> {
    let grid = Grid::parse(input)?;
    let solved = solve(&grid)?;
    let reversed = solved.graph.transpose();
    let members = shortest_path_members(&reversed, &solved.distances, solved.targets);
    if members.is_empty() {
        return Err(Error::no_solution(PUZZLE, "the end tile is unreachable"));
    }
    let tiles: HashSet<Position> = members.iter().map(|pose| pose.position).collect();
    Ok(tiles.len())
}
