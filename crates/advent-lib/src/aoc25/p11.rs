//! Reactor: counting paths through a directed network of devices.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parse::lines;

const PUZZLE: &str = "aoc25:p11";

const OUT: &str = "out";

type Wiring<'a> = HashMap<&'a str, Vec<&'a str>>;

fn wiring(input: &str) -> Result<Wiring<'_>> {
    lines(input)
        .map(|line| {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| Error::parse(PUZZLE, format!("bad device '{}'", line)))?;
            Ok((device.trim(), outputs.split_whitespace().collect()))
        })
        .collect()
}

/// Devices a path must visit to count, tracked as a bitmask.
struct Checkpoints<'a> {
    names: &'a [&'a str],
}

impl Checkpoints<'_> {
    fn mark(&self, device: &str, seen: u8) -> u8 {
        self.names
            .iter()
            .position(|&name| name == device)
            .map_or(seen, |i| seen | (1 << i))
    }

    fn all(&self) -> u8 {
        (1u8 << self.names.len()) - 1
    }
}

/// Paths from `device` to `out` that visit every checkpoint.
///
/// The memo, keyed on device and checkpoints seen so far, is owned by the
/// caller. The wiring is assumed to be acyclic.
fn count_paths<'a>(
    wiring: &Wiring<'a>,
    checkpoints: &Checkpoints<'_>,
    device: &'a str,
    seen: u8,
    memo: &mut HashMap<(&'a str, u8), u64>,
) -> u64 {
    let seen = checkpoints.mark(device, seen);
    if device == OUT {
        return u64::from(seen == checkpoints.all());
    }
    if let Some(&known) = memo.get(&(device, seen)) {
        return known;
    }
    let total: u64 = wiring
        .get(device)
        .map_or(0, |outputs| {
            outputs
                .iter()
                .map(|&next| count_paths(wiring, checkpoints, next, seen, memo))
                .sum()
        });
    memo.insert((device, seen), total);
    total
}

fn paths(input: &str, start: &str, required: &[&str]) -> Result<u64> {
    let wiring = wiring(input)?;
    let Some((&start, _)) = wiring.get_key_value(start) else {
        return Err(Error::parse(PUZZLE, format!("no device named '{}'", start)));
    };
    let checkpoints = Checkpoints { names: required };
    let mut memo = HashMap::new();
    Ok(count_paths(&wiring, &checkpoints, start, 0, &mut memo))
}

/// Paths from `you` to `out`.
pub fn part_a(input: &str) -> Result<u64> {
    paths(input, "you", &[])
}

/// Paths from `svr` to `out` passing through both `dac` and `fft`.
pub fn part_b(input: &str) -> Result<u64> {
    paths(input, "svr", &["dac", "fft"])
}
