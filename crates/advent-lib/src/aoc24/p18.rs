//! RAM Run: bytes falling onto a square memory grid.
//!
//! The grid is as large as the largest coordinate requires. The walk goes
//! from the top-left corner to the bottom-right one.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_grid_graph, Graph};
use crate::grid::{Grid, Position, WALL};
use crate::parse::{integers, lines};
use crate::path::{shortest_distances, shortest_path_members};

const PUZZLE: &str = "aoc24:p18";

/// Bytes that have fallen when part one is measured.
pub const DEFAULT_BYTES: usize = 1024;

fn falling_bytes(input: &str) -> Result<Vec<Position>> {
    lines(input)
        .map(|line| match integers(line)[..] {
            [x, y] if x >= 0 && y >= 0 => Ok(Position::new(x, y)),
            _ => Err(Error::parse(PUZZLE, format!("bad coordinate '{}'", line))),
        })
        .collect()
}

fn memory_space(bytes: &[Position]) -> Grid {
    let size = bytes.iter().map(|p| p.x.max(p.y)).max().unwrap_or(0) as usize + 1;
    Grid::filled(size, size, b'.')
}

fn exit_of(grid: &Grid) -> Position {
    Position::new(grid.width() as i64 - 1, grid.height() as i64 - 1)
}

/// Fewest steps to the exit once the first `fallen` bytes have landed.
pub fn part_a(input: &str, fallen: usize) -> Result<u64> {
    let bytes = falling_bytes(input)?;
    let mut grid = memory_space(&bytes);
    for &byte in bytes.iter().take(fallen) {
        grid.set(byte, WALL);
    }

    let graph = build_grid_graph(&grid);
    let distances = shortest_distances(&graph, Position::new(0, 0));
    distances
        .get(exit_of(&grid))
        .finite()
        .ok_or_else(|| Error::no_solution(PUZZLE, "the exit is cut off"))
}

/// Coordinates of the first byte that cuts the start off from the exit.
///
/// The search is only rerun when a byte lands on a cell that lies on some
/// current shortest path; any other byte leaves the exit distance unchanged.
pub fn part_b(input: &str) -> Result<String> {
    let bytes = falling_bytes(input)?;
    let grid = memory_space(&bytes);
    let (start, exit) = (Position::new(0, 0), exit_of(&grid));
    let mut graph = build_grid_graph(&grid);
    let mut on_best_paths = best_path_cells(&graph, start, exit);
    let mut searches = 1;

    for byte in bytes {
        graph.remove_node(byte);
        if !on_best_paths.contains(&byte) {
            continue;
        }
        on_best_paths = best_path_cells(&graph, start, exit);
        searches += 1;
        if on_best_paths.is_empty() {
            debug!(searches, "exit cut off");
            return Ok(byte.to_string());
        }
    }

    Err(Error::no_solution(PUZZLE, "the exit is never cut off"))
}

fn best_path_cells(graph: &Graph<Position>, start: Position, exit: Position) -> HashSet<Position> {
    let distances = shortest_distances(graph, start);
    shortest_path_members(&graph.transpose(), &distances, [exit])
}
