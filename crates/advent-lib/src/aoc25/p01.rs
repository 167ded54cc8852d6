//! Secret Entrance: a 100-position dial turned left and right.

use crate::error::{Error, Result};
use crate::parse::{lines, number};

const PUZZLE: &str = "aoc25:p01";

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

/// Signed rotations; left turns are negative.
fn rotations(input: &str) -> Result<Vec<i64>> {
    lines(input)
        .map(|line| {
            let line = line.trim();
            let mut chars = line.chars();
            let direction = chars.next();
            let clicks: i64 = number(PUZZLE, chars.as_str())?;
            match direction {
                Some('L') => Ok(-clicks),
                Some('R') => Ok(clicks),
                _ => Err(Error::parse(PUZZLE, format!("bad rotation '{}'", line))),
            }
        })
        .collect()
}

/// Rotations that leave the dial pointing at zero.
pub fn part_a(input: &str) -> Result<usize> {
    let mut position = START;
    let mut zeros = 0;
    for turn in rotations(input)? {
        position = (position + turn).rem_euclid(DIAL_SIZE);
        if position == 0 {
            zeros += 1;
        }
    }
    Ok(zeros)
}

/// Clicks that pass over zero, including those that stop there.
pub fn part_b(input: &str) -> Result<i64> {
    let mut position = START;
    let mut zeros = 0;
    for turn in rotations(input)? {
        // Distance to the first zero in the direction of travel.
        let first = match (turn >= 0, position) {
            (_, 0) => DIAL_SIZE,
            (true, _) => DIAL_SIZE - position,
            (false, _) => position,
        };
        if turn.abs() >= first {
            zeros += 1 + (turn.abs() - first) / DIAL_SIZE;
        }
        position = (position + turn).rem_euclid(DIAL_SIZE);
    }
    Ok(zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_turns_cross_zero_repeatedly() {
        assert_eq!(part_b("R1000\n").unwrap(), 10);
        assert_eq!(part_b("L50\nL100\n").unwrap(), 2);
        assert_eq!(part_b("L49\n").unwrap(), 0);
    }
}
