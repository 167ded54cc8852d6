//! Ceres Search: word search over a letter grid.

use crate::error::Result;
use crate::grid::{Grid, Position};

const WORD: &[u8] = b"XMAS";

/// Every straight-line direction, diagonals included.
const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
];

fn spells_word(grid: &Grid, start: Position, (dx, dy): (i64, i64)) -> bool {
    WORD.iter().enumerate().all(|(i, &letter)| {
        let i = i as i64;
        grid.get(start.offset(dx * i, dy * i)) == Some(letter)
    })
}

/// Count `XMAS` in all eight directions.
pub fn part_a(input: &str) -> Result<usize> {
    let grid = Grid::parse(input)?;
    Ok(grid
        .positions()
        .map(|pos| {
            DIRECTIONS
                .iter()
                .filter(|&&dir| spells_word(&grid, pos, dir))
                .count()
        })
        .sum())
}

fn is_mas(ends: (Option<u8>, Option<u8>)) -> bool {
    matches!(ends, (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
}

/// Count `A` cells crossed by two diagonal `MAS`.
pub fn part_b(input: &str) -> Result<usize> {
    let grid = Grid::parse(input)?;
    Ok(grid
        .iter()
        .filter(|&(pos, cell)| {
            cell == b'A'
                && is_mas((grid.get(pos.offset(-1, -1)), grid.get(pos.offset(1, 1))))
                && is_mas((grid.get(pos.offset(1, -1)), grid.get(pos.offset(-1, 1))))
        })
        .count())
}
