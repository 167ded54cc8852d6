//! Linen Layout: build towel designs from a set of stripe patterns.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parse::{blocks, lines};

const PUZZLE: &str = "aoc24:p19";

struct Onsen<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
}

fn parse(sections: &[String]) -> Result<Onsen<'_>> {
    let [patterns, designs] = sections else {
        return Err(Error::parse(PUZZLE, "expected patterns and designs sections"));
    };
    Ok(Onsen {
        patterns: patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect(),
        designs: lines(designs).collect(),
    })
}

/// Number of ways to assemble `design`, memoized on the remaining suffix.
///
/// The memo is owned by the caller so it can be shared across designs.
fn arrangements<'a>(design: &'a str, patterns: &[&str], memo: &mut HashMap<&'a str, u64>) -> u64 {
    if design.is_empty() {
        return 1;
    }
    if let Some(&known) = memo.get(design) {
        return known;
    }
    let total: u64 = patterns
        .iter()
        .filter_map(|pattern| design.strip_prefix(pattern))
        .map(|rest| arrangements(rest, patterns, memo))
        .sum();
    memo.insert(design, total);
    total
}

fn counts(input: &str) -> Result<Vec<u64>> {
    let sections = blocks(input);
    let onsen = parse(&sections)?;
    let mut memo = HashMap::new();
    Ok(onsen
        .designs
        .iter()
        .map(|&design| arrangements(design, &onsen.patterns, &mut memo))
        .collect())
}

/// Designs that can be made at all.
pub fn part_a(input: &str) -> Result<usize> {
    Ok(counts(input)?.iter().filter(|&&ways| ways > 0).count())
}

/// Total number of arrangements across every design.
pub fn part_b(input: &str) -> Result<u64> {
    Ok(counts(input)?.iter().sum())
}
