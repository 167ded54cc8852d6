//! Red-Nosed Reports: count safe level sequences.

use crate::error::Result;
use crate::parse::{lines, numbers};

const PUZZLE: &str = "aoc24:p02";

fn reports(input: &str) -> Result<Vec<Vec<i64>>> {
    lines(input).map(|line| numbers(PUZZLE, line)).collect()
}

/// Strictly monotone with every step between 1 and 3.
fn is_safe(levels: &[i64]) -> bool {
    let steps: Vec<i64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
    steps.iter().all(|d| (1..=3).contains(d)) || steps.iter().all(|d| (-3..=-1).contains(d))
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let trimmed: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &level)| level)
                .collect();
            is_safe(&trimmed)
        })
}

pub fn part_a(input: &str) -> Result<usize> {
    Ok(reports(input)?.iter().filter(|r| is_safe(r)).count())
}

pub fn part_b(input: &str) -> Result<usize> {
    Ok(reports(input)?.iter().filter(|r| is_safe_dampened(r)).count())
}
