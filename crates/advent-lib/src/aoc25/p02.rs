//! Gift Shop: invalid product ids made of a repeated digit sequence.

use crate::error::{Error, Result};
use crate::parse::number;

const PUZZLE: &str = "aoc25:p02";

fn ranges(input: &str) -> Result<Vec<(u64, u64)>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|range| !range.is_empty())
        .map(|range| {
            let (low, high) = range
                .split_once('-')
                .ok_or_else(|| Error::parse(PUZZLE, format!("bad range '{}'", range)))?;
            Ok((number(PUZZLE, low)?, number(PUZZLE, high)?))
        })
        .collect()
}

/// True when `id` is some digit block repeated exactly `times` times.
fn repeats(id: &str, times: usize) -> bool {
    let len = id.len();
    if times < 2 || !len.is_multiple_of(times) {
        return false;
    }
    let block = &id[..len / times];
    id.as_bytes()
        .chunks(block.len())
        .all(|chunk| chunk == block.as_bytes())
}

fn sum_invalid(input: &str, invalid: impl Fn(&str) -> bool) -> Result<u64> {
    let mut total = 0;
    for (low, high) in ranges(input)? {
        total += (low..=high).filter(|id| invalid(&id.to_string())).sum::<u64>();
    }
    Ok(total)
}

/// Ids made of one block written twice.
pub fn part_a(input: &str) -> Result<u64> {
    sum_invalid(input, |id| repeats(id, 2))
}

/// Ids made of one block written at least twice.
pub fn part_b(input: &str) -> Result<u64> {
    sum_invalid(input, |id| (2..=id.len()).any(|times| repeats(id, times)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_blocks() {
        assert!(repeats("6464", 2));
        assert!(repeats("111", 3));
        assert!(!repeats("111", 2));
        assert!(repeats("824824824", 3));
        assert!(!repeats("1", 1));
    }
}
