//! Movie Theater: the largest rectangle spanned by two red tiles.
//!
//! In part two the red tiles, taken in order, are the corners of a closed
//! rectilinear loop and the rectangle must stay within it.

use crate::error::{Error, Result};
use crate::parse::{integers, lines};

const PUZZLE: &str = "aoc25:p09";

type Tile = (i64, i64);

fn red_tiles(input: &str) -> Result<Vec<Tile>> {
    lines(input)
        .map(|line| match integers(line)[..] {
            [x, y] => Ok((x, y)),
            _ => Err(Error::parse(PUZZLE, format!("bad tile '{}'", line))),
        })
        .collect()
}

fn area(a: Tile, b: Tile) -> u64 {
    (a.0.abs_diff(b.0) + 1) * (a.1.abs_diff(b.1) + 1)
}

fn edges(loop_tiles: &[Tile]) -> impl Iterator<Item = (Tile, Tile)> + '_ {
    loop_tiles
        .iter()
        .zip(loop_tiles.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
}

/// True when some loop edge passes through the open interior of the
/// rectangle with opposite corners `a` and `b`.
fn interior_crossed(loop_tiles: &[Tile], a: Tile, b: Tile) -> bool {
    let (low_x, high_x) = (a.0.min(b.0), a.0.max(b.0));
    let (low_y, high_y) = (a.1.min(b.1), a.1.max(b.1));
    edges(loop_tiles).any(|(p, q)| {
        p.0.min(q.0) < high_x
            && p.0.max(q.0) > low_x
            && p.1.min(q.1) < high_y
            && p.1.max(q.1) > low_y
    })
}

/// Point-in-loop test on doubled coordinates so that rectangle centres
/// stay integral. Points on the loop count as inside.
fn inside_doubled(loop_tiles: &[Tile], point: Tile) -> bool {
    let (px, py) = point;
    let mut inside = false;
    for (p, q) in edges(loop_tiles) {
        let (ax, ay, bx, by) = (2 * p.0, 2 * p.1, 2 * q.0, 2 * q.1);
        let on_edge =
            (ax.min(bx)..=ax.max(bx)).contains(&px) && (ay.min(by)..=ay.max(by)).contains(&py);
        if on_edge {
            return true;
        }
        if (ay > py) != (by > py) && ax > px {
            inside = !inside;
        }
    }
    inside
}

fn largest(tiles: &[Tile], allowed: impl Fn(Tile, Tile) -> bool) -> u64 {
    let mut best = 0;
    for (i, &a) in tiles.iter().enumerate() {
        for &b in &tiles[i + 1..] {
            let candidate = area(a, b);
            if candidate > best && allowed(a, b) {
                best = candidate;
            }
        }
    }
    best
}

pub fn part_a(input: &str) -> Result<u64> {
    let tiles = red_tiles(input)?;
    Ok(largest(&tiles, |_, _| true))
}

pub fn part_b(input: &str) -> Result<u64> {
    let tiles = red_tiles(input)?;
    Ok(largest(&tiles, |a, b| {
        !interior_crossed(&tiles, a, b) && inside_doubled(&tiles, (a.0 + b.0, a.1 + b.1))
    }))
}
