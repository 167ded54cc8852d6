//! Laboratories: a tachyon beam split by a manifold of splitters.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::grid::Grid;

const SPLITTER: u8 = b'^';

struct Beams {
    splits: u64,
    timelines: u64,
}

/// Follow the beam down from `S`, merging beams that share a column.
fn trace(input: &str) -> Result<Beams> {
    let grid = Grid::parse(input)?;
    let start = grid.require(b'S')?;

    // Column -> number of timelines whose beam is in that column.
    let mut beams: BTreeMap<i64, u64> = BTreeMap::from([(start.x, 1)]);
    let mut splits = 0;
    for y in (start.y + 1) as usize..grid.height() {
        let row = grid.row(y);
        let mut next: BTreeMap<i64, u64> = BTreeMap::new();
        for (&x, &count) in &beams {
            if row.get(x as usize) == Some(&SPLITTER) {
                splits += 1;
                *next.entry(x - 1).or_default() += count;
                *next.entry(x + 1).or_default() += count;
            } else {
                *next.entry(x).or_default() += count;
            }
        }
        beams = next;
    }

    Ok(Beams {
        splits,
        timelines: beams.values().sum(),
    })
}

/// Number of times the beam is split.
pub fn part_a(input: &str) -> Result<u64> {
    Ok(trace(input)?.splits)
}

/// Number of timelines a single particle ends up in.
pub fn part_b(input: &str) -> Result<u64> {
    Ok(trace(input)?.timelines)
}
