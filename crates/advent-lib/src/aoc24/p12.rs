//! Garden Groups: fence pricing for plant regions.

use std::collections::HashSet;

use crate::error::Result;
use crate::grid::{Grid, Heading, Position};

/// One unit of fence: the cell it bounds and the side it faces.
type Fence = (Position, Heading);

struct Region {
    area: usize,
    fences: HashSet<Fence>,
}

impl Region {
    fn perimeter(&self) -> usize {
        self.fences.len()
    }

    /// A fence starts a new side unless its neighbour along the side (west
    /// for horizontal fences, north for vertical ones) has the same fence.
    fn sides(&self) -> usize {
        self.fences
            .iter()
            .filter(|&&(pos, facing)| {
                let along = if facing.is_vertical() {
                    pos.offset(-1, 0)
                } else {
                    pos.offset(0, -1)
                };
                !self.fences.contains(&(along, facing))
            })
            .count()
    }
}

fn regions(grid: &Grid) -> Vec<Region> {
    let mut seen: HashSet<Position> = HashSet::new();
    let mut regions = Vec::new();

    for (start, plant) in grid.iter() {
        if !seen.insert(start) {
            continue;
        }
        let mut members = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            for next in pos.orthogonal() {
                if grid.get(next) == Some(plant) && seen.insert(next) {
                    members.insert(next);
                    stack.push(next);
                }
            }
        }

        let fences = members
            .iter()
            .flat_map(|&pos| Heading::ALL.map(|facing| (pos, facing)))
            .filter(|&(pos, facing)| !members.contains(&pos.step(facing)))
            .collect();
        regions.push(Region {
            area: members.len(),
            fences,
        });
    }

    regions
}

pub fn part_a(input: &str) -> Result<usize> {
    let grid = Grid::parse(input)?;
    Ok(regions(&grid).iter().map(|r| r.area * r.perimeter()).sum())
}

/// Bulk discount: price by number of straight sides.
pub fn part_b(input: &str) -> Result<usize> {
    let grid = Grid::parse(input)?;
    Ok(regions(&grid).iter().map(|r| r.area * r.sides()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_garden() {
        let garden = "AAAA\nBBCD\nBBCC\nEEEC\n";
        assert_eq!(part_a(garden).unwrap(), 140);
        assert_eq!(part_b(garden).unwrap(), 80);
    }
}
