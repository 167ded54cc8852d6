//! Lobby: largest joltage from a bank of battery digits.

use crate::error::{Error, Result};
use crate::parse::lines;

const PUZZLE: &str = "aoc25:p03";

/// Largest number formed by picking `count` digits of `bank` in order.
///
/// Each digit is the largest one that still leaves enough digits after it;
/// ties go to the leftmost.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }
    let mut value = 0;
    let mut start = 0;
    for remaining in (1..=count).rev() {
        let window = &bank[start..bank.len() - remaining + 1];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| *digit)?;
        value = value * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(value)
}

fn total(input: &str, count: usize) -> Result<u64> {
    lines(input)
        .map(|line| {
            let line = line.trim();
            if !line.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::parse(PUZZLE, format!("bad bank '{}'", line)));
            }
            let digits: Vec<u8> = line.bytes().map(|b| b - b'0').collect();
            max_joltage(&digits, count).ok_or_else(|| {
                Error::parse(PUZZLE, format!("bank '{}' has fewer than {} batteries", line, count))
            })
        })
        .sum()
}

pub fn part_a(input: &str) -> Result<u64> {
    total(input, 2)
}

pub fn part_b(input: &str) -> Result<u64> {
    total(input, 12)
}
