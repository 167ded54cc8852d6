//! Print Queue: page ordering rules.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::parse::{blocks, lines, number};

const PUZZLE: &str = "aoc24:p05";

struct Manual {
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Manual {
    fn parse(input: &str) -> Result<Self> {
        let sections = blocks(input);
        let [rules, updates] = sections.as_slice() else {
            return Err(Error::parse(PUZZLE, "expected rules and updates sections"));
        };

        let rules = lines(rules)
            .map(|line| {
                let (before, after) = line
                    .split_once('|')
                    .ok_or_else(|| Error::parse(PUZZLE, format!("bad rule '{}'", line)))?;
                Ok((number(PUZZLE, before)?, number(PUZZLE, after)?))
            })
            .collect::<Result<HashSet<_>>>()?;

        let updates = lines(updates)
            .map(|line| line.split(',').map(|page| number(PUZZLE, page)).collect())
            .collect::<Result<Vec<Vec<u32>>>>()?;

        Ok(Self { rules, updates })
    }

    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Sum of middle pages, over updates that were already ordered
    /// (`want_ordered`) or over the others after reordering them.
    fn middle_sum(&self, want_ordered: bool) -> u32 {
        self.updates
            .iter()
            .filter_map(|update| {
                let mut sorted = update.clone();
                sorted.sort_by(|&a, &b| self.compare(a, b));
                ((sorted == *update) == want_ordered).then(|| sorted[sorted.len() / 2])
            })
            .sum()
    }
}

pub fn part_a(input: &str) -> Result<u32> {
    Ok(Manual::parse(input)?.middle_sum(true))
}

pub fn part_b(input: &str) -> Result<u32> {
    Ok(Manual::parse(input)?.middle_sum(false))
}
