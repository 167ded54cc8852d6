//! Resonant Collinearity: antinodes of same-frequency antennas.

use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::grid::{Grid, Position};

fn antennas(grid: &Grid) -> BTreeMap<u8, Vec<Position>> {
    let mut by_frequency: BTreeMap<u8, Vec<Position>> = BTreeMap::new();
    for (pos, cell) in grid.iter().filter(|&(_, cell)| cell != b'.') {
        by_frequency.entry(cell).or_default().push(pos);
    }
    by_frequency
}

fn count_antinodes(input: &str, resonant: bool) -> Result<usize> {
    let grid = Grid::parse(input)?;
    let mut antinodes: HashSet<Position> = HashSet::new();

    for positions in antennas(&grid).values() {
        for (i, &a) in positions.iter().enumerate() {
            for &b in &positions[i + 1..] {
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                for (origin, sign) in [(a, 1), (b, -1)] {
                    if resonant {
                        let mut current = origin;
                        while grid.contains(current) {
                            antinodes.insert(current);
                            current = current.offset(sign * dx, sign * dy);
                        }
                    } else {
                        let node = origin.offset(sign * dx, sign * dy);
                        if grid.contains(node) {
                            antinodes.insert(node);
                        }
                    }
                }
            }
        }
    }

    Ok(antinodes.len())
}

pub fn part_a(input: &str) -> Result<usize> {
    count_antinodes(input, false)
}

pub fn part_b(input: &str) -> Result<usize> {
    count_antinodes(input, true)
}
