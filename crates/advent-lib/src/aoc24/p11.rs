//! Plutonian Pebbles: stones that split when blinked at.
//!
//! Order never matters for the final count, so stones are tracked as a
//! multiset of engraved values.

use std::collections::HashMap;

use crate::error::Result;
use crate::parse::numbers;

const PUZZLE: &str = "aoc24:p11";

/// Blinks applied in part one.
pub const SHORT_BLINKS: usize = 25;
/// Blinks applied in part two.
pub const LONG_BLINKS: usize = 75;

fn blink(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let text = stone.to_string();
    if text.len().is_multiple_of(2) {
        let divisor = 10u64.pow(text.len() as u32 / 2);
        (stone / divisor, Some(stone % divisor))
    } else {
        (stone * 2024, None)
    }
}

pub fn stones_after(input: &str, blinks: usize) -> Result<u64> {
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for stone in numbers::<u64>(PUZZLE, input.trim())? {
        *counts.entry(stone).or_default() += 1;
    }

    for _ in 0..blinks {
        let mut next: HashMap<u64, u64> = HashMap::with_capacity(counts.len());
        for (stone, count) in counts {
            let (first, second) = blink(stone);
            *next.entry(first).or_default() += count;
            if let Some(second) = second {
                *next.entry(second).or_default() += count;
            }
        }
        counts = next;
    }

    Ok(counts.values().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_digit_stones_split_without_leading_zeros() {
        assert_eq!(blink(1000), (10, Some(0)));
        assert_eq!(blink(0), (1, None));
        assert_eq!(blink(1), (2024, None));
    }

    #[test]
    fn six_blinks_over_the_short_example() {
        assert_eq!(stones_after("125 17", 6).unwrap(), 22);
    }
}
