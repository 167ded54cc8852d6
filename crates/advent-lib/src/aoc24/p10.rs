//! Hoof It: hiking trails climbing from 0 to 9.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::grid::{Grid, Position};

const PUZZLE: &str = "aoc24:p10";

/// For each trailhead, the number of distinct trails ending at each summit.
fn trail_counts(input: &str) -> Result<Vec<HashMap<Position, u64>>> {
    let grid = Grid::parse(input)?;
    if let Some((pos, cell)) = grid.iter().find(|(_, cell)| !cell.is_ascii_digit()) {
        return Err(Error::parse(
            PUZZLE,
            format!("non-digit '{}' at {}", cell as char, pos),
        ));
    }

    let trailheads = grid.iter().filter(|&(_, cell)| cell == b'0');
    Ok(trailheads
        .map(|(start, _)| {
            let mut frontier = HashMap::from([(start, 1u64)]);
            for height in b'1'..=b'9' {
                let mut next: HashMap<Position, u64> = HashMap::new();
                for (&pos, &paths) in &frontier {
                    for step in pos.orthogonal() {
                        if grid.get(step) == Some(height) {
                            *next.entry(step).or_default() += paths;
                        }
                    }
                }
                frontier = next;
            }
            frontier
        })
        .collect())
}

/// Sum of trailhead scores: reachable summits.
pub fn part_a(input: &str) -> Result<usize> {
    Ok(trail_counts(input)?.iter().map(HashMap::len).sum())
}

/// Sum of trailhead ratings: distinct trails.
pub fn part_b(input: &str) -> Result<u64> {
    Ok(trail_counts(input)?
        .iter()
        .flat_map(HashMap::values)
        .sum())
}
