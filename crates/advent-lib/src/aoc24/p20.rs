//! Race Condition: shortcuts through the walls of a single-track race.

use crate::error::{Error, Result};
use crate::graph::build_grid_graph;
use crate::grid::Grid;
use crate::path::shortest_distances;

const PUZZLE: &str = "aoc24:p20";

/// Picoseconds a cheat must save to be counted.
pub const DEFAULT_MIN_SAVING: u64 = 100;

/// Count cheats of at most `max_cheat` steps saving at least `min_saving`.
///
/// A cheat jumps between two track cells within taxicab distance
/// `max_cheat`; its saving is the track distance skipped minus the steps
/// the jump takes.
pub fn count_cheats(input: &str, max_cheat: i64, min_saving: u64) -> Result<usize> {
    let grid = Grid::parse(input)?;
    let start = grid.require(b'S')?;
    let graph = build_grid_graph(&grid);
    let distances = shortest_distances(&graph, start);
    if !distances.get(grid.require(b'E')?).is_reachable() {
        return Err(Error::no_solution(PUZZLE, "the race has no finish"));
    }

    let mut cheats = 0;
    for (from, from_cost) in distances.reachable() {
        for dy in -max_cheat..=max_cheat {
            let span = max_cheat - dy.abs();
            for dx in -span..=span {
                let to = from.offset(dx, dy);
                let jump = from.manhattan(to);
                if jump == 0 {
                    continue;
                }
                let Some(to_cost) = distances.get(to).finite() else {
                    continue;
                };
                if to_cost >= from_cost + jump + min_saving {
                    cheats += 1;
                }
            }
        }
    }
    Ok(cheats)
}

pub fn part_a(input: &str, min_saving: u64) -> Result<usize> {
    count_cheats(input, 2, min_saving)
}

pub fn part_b(input: &str, min_saving: u64) -> Result<usize> {
    count_cheats(input, 20, min_saving)
}
