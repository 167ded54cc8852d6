//! Cafeteria: fresh ingredient id ranges.

use crate::error::{Error, Result};
use crate::parse::{blocks, lines, number};

const PUZZLE: &str = "aoc25:p05";

struct Inventory {
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

fn parse(input: &str) -> Result<Inventory> {
    let sections = blocks(input);
    let [fresh, available] = sections.as_slice() else {
        return Err(Error::parse(PUZZLE, "expected ranges and ids sections"));
    };
    let fresh = lines(fresh)
        .map(|line| {
            let (low, high) = line
                .split_once('-')
                .ok_or_else(|| Error::parse(PUZZLE, format!("bad range '{}'", line)))?;
            let (low, high): (u64, u64) = (number(PUZZLE, low)?, number(PUZZLE, high)?);
            if high < low {
                return Err(Error::parse(PUZZLE, format!("range '{}' is reversed", line)));
            }
            Ok((low, high))
        })
        .collect::<Result<Vec<_>>>()?;
    let available = lines(available)
        .map(|line| number(PUZZLE, line))
        .collect::<Result<Vec<_>>>()?;
    Ok(Inventory { fresh, available })
}

/// Sort and coalesce overlapping or touching ranges.
fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if low <= last.1.saturating_add(1) => last.1 = last.1.max(high),
            _ => merged.push((low, high)),
        }
    }
    merged
}

/// Available ids that fall in some fresh range.
pub fn part_a(input: &str) -> Result<usize> {
    let inventory = parse(input)?;
    Ok(inventory
        .available
        .iter()
        .filter(|&&id| inventory.fresh.iter().any(|&(low, high)| (low..=high).contains(&id)))
        .count())
}

/// Count of distinct ids covered by the fresh ranges.
pub fn part_b(input: &str) -> Result<u64> {
    let inventory = parse(input)?;
    Ok(merge(inventory.fresh)
        .iter()
        .map(|&(low, high)| high - low + 1)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_overlapping_and_adjacent_ranges() {
        let ranges = vec![(10, 14), (3, 5), (16, 20), (12, 18), (6, 7)];
        assert_eq!(merge(ranges), vec![(3, 7), (10, 20)]);
    }
}
