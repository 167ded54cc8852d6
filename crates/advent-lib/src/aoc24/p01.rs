//! Historian Hysteria: pair up two columns of location ids.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parse::{lines, numbers};

const PUZZLE: &str = "aoc24:p01";

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in lines(input) {
        let values: Vec<i64> = numbers(PUZZLE, line)?;
        let [l, r] = values[..] else {
            return Err(Error::parse(PUZZLE, format!("expected two ids in '{}'", line)));
        };
        left.push(l);
        right.push(r);
    }
    Ok((left, right))
}

/// Total distance between the sorted columns.
pub fn part_a(input: &str) -> Result<u64> {
    let (mut left, mut right) = parse(input)?;
    left.sort_unstable();
    right.sort_unstable();
    Ok(left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum())
}

/// Similarity score: each left id weighted by how often it appears on the right.
pub fn part_b(input: &str) -> Result<i64> {
    let (left, right) = parse(input)?;
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for id in right {
        *counts.entry(id).or_default() += 1;
    }
    Ok(left
        .iter()
        .map(|id| id * counts.get(id).copied().unwrap_or(0))
        .sum())
}
