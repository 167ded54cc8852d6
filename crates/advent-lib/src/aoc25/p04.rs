//! Printing Department: paper rolls reachable by forklift.

use std::collections::HashSet;

use crate::error::Result;
use crate::grid::{Grid, Position};

const ROLL: u8 = b'@';

/// A roll is accessible when fewer than this many rolls surround it.
const CROWD: usize = 4;

fn rolls(input: &str) -> Result<HashSet<Position>> {
    let grid = Grid::parse(input)?;
    Ok(grid
        .iter()
        .filter(|&(_, cell)| cell == ROLL)
        .map(|(pos, _)| pos)
        .collect())
}

fn accessible(rolls: &HashSet<Position>) -> Vec<Position> {
    rolls
        .iter()
        .copied()
        .filter(|pos| {
            pos.surrounding()
                .iter()
                .filter(|next| rolls.contains(next))
                .count()
                < CROWD
        })
        .collect()
}

pub fn part_a(input: &str) -> Result<usize> {
    Ok(accessible(&rolls(input)?).len())
}

/// Total rolls removed when accessible rolls are taken away until none remain.
pub fn part_b(input: &str) -> Result<usize> {
    let mut rolls = rolls(input)?;
    let mut removed = 0;
    loop {
        let batch = accessible(&rolls);
        if batch.is_empty() {
            return Ok(removed);
        }
        removed += batch.len();
        for pos in batch {
            rolls.remove(&pos);
        }
    }
}
