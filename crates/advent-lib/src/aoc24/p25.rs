//! Code Chronicle: which keys fit which locks.

use crate::error::Result;
use crate::grid::{Grid, WALL};
use crate::parse::blocks;

/// Pairs of a lock and a key whose pin heights never overlap.
pub fn part_a(input: &str) -> Result<usize> {
    let mut locks: Vec<Vec<usize>> = Vec::new();
    let mut keys: Vec<Vec<usize>> = Vec::new();
    let mut space = 0;

    for block in blocks(input) {
        let grid = Grid::parse(&block)?;
        let heights: Vec<usize> = (0..grid.width())
            .map(|x| {
                (0..grid.height())
                    .filter(|&y| grid.row(y)[x] == WALL)
                    .count()
                    .saturating_sub(1)
            })
            .collect();
        space = grid.height().saturating_sub(2);
        if grid.row(0).iter().all(|&cell| cell == WALL) {
            locks.push(heights);
        } else {
            keys.push(heights);
        }
    }

    Ok(locks
        .iter()
        .map(|lock| {
            keys.iter()
                .filter(|key| lock.iter().zip(key.iter()).all(|(l, k)| l + k <= space))
                .count()
        })
        .sum())
}
