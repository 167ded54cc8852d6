//! Restroom Redoubt: robots wrapping around a toroidal room.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::{integers, lines};

const PUZZLE: &str = "aoc24:p14";

/// Seconds simulated before the safety factor is taken.
pub const DEFAULT_SECONDS: usize = 100;

#[derive(Debug, Clone, Copy)]
struct Robot {
    position: (i64, i64),
    velocity: (i64, i64),
}

struct Room {
    width: i64,
    height: i64,
    robots: Vec<Robot>,
}

impl Room {
    /// The room is as large as the furthest robot position requires.
    fn parse(input: &str) -> Result<Self> {
        let robots = lines(input)
            .map(|line| match integers(line)[..] {
                [px, py, vx, vy] => Ok(Robot {
                    position: (px, py),
                    velocity: (vx, vy),
                }),
                _ => Err(Error::parse(PUZZLE, format!("bad robot '{}'", line))),
            })
            .collect::<Result<Vec<_>>>()?;

        let width = robots.iter().map(|r| r.position.0).max().unwrap_or(0) + 1;
        let height = robots.iter().map(|r| r.position.1).max().unwrap_or(0) + 1;
        Ok(Self {
            width,
            height,
            robots,
        })
    }

    fn positions_at(&self, seconds: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.robots.iter().map(move |robot| {
            (
                (robot.position.0 + robot.velocity.0 * seconds).rem_euclid(self.width),
                (robot.position.1 + robot.velocity.1 * seconds).rem_euclid(self.height),
            )
        })
    }
}

/// Product of robot counts per quadrant; the middle row and column count for none.
pub fn part_a(input: &str, seconds: usize) -> Result<u64> {
    let room = Room::parse(input)?;
    let (mid_x, mid_y) = (room.width / 2, room.height / 2);
    let mut quadrants = [0u64; 4];
    for (x, y) in room.positions_at(seconds as i64) {
        if x == mid_x || y == mid_y {
            continue;
        }
        let index = usize::from(x > mid_x) * 2 + usize::from(y > mid_y);
        quadrants[index] += 1;
    }
    Ok(quadrants.iter().product())
}

/// First second (after the start) at which no two robots share a tile.
///
/// Positions repeat after `width * height` seconds, which bounds the search.
pub fn part_b(input: &str) -> Result<usize> {
    let room = Room::parse(input)?;
    let limit = (room.width * room.height) as usize;
    for second in 1..=limit {
        let mut occupied = HashSet::with_capacity(room.robots.len());
        if room.positions_at(second as i64).all(|pos| occupied.insert(pos)) {
            debug!(second, "robots spread out");
            return Ok(second);
        }
    }
    Err(Error::IterationLimit {
        puzzle: PUZZLE,
        limit,
    })
}
