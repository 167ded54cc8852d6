//! Bridge Repair: insert operators to reach a calibration target.

use crate::error::{Error, Result};
use crate::parse::{lines, number, numbers};

const PUZZLE: &str = "aoc24:p07";

struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn parse(input: &str) -> Result<Vec<Equation>> {
    lines(input)
        .map(|line| {
            let (target, operands) = line
                .split_once(':')
                .ok_or_else(|| Error::parse(PUZZLE, format!("missing ':' in '{}'", line)))?;
            let operands: Vec<u64> = numbers(PUZZLE, operands)?;
            if operands.is_empty() {
                return Err(Error::parse(PUZZLE, format!("no operands in '{}'", line)));
            }
            Ok(Equation {
                target: number(PUZZLE, target)?,
                operands,
            })
        })
        .collect()
}

/// Works right to left, undoing each operator so that impossible branches
/// are cut as soon as a division or suffix strip fails.
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    if target >= last && solvable(target - last, rest, concat) {
        return true;
    }
    if last != 0 && target.is_multiple_of(last) && solvable(target / last, rest, concat) {
        return true;
    }
    if concat {
        let scale = 10u64.pow(digits(last));
        if target > last && (target - last).is_multiple_of(scale) {
            return solvable((target - last) / scale, rest, concat);
        }
    }
    false
}

fn digits(mut value: u64) -> u32 {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

fn calibration(input: &str, concat: bool) -> Result<u64> {
    Ok(parse(input)?
        .iter()
        .filter(|eq| solvable(eq.target, &eq.operands, concat))
        .map(|eq| eq.target)
        .sum())
}

pub fn part_a(input: &str) -> Result<u64> {
    calibration(input, false)
}

/// Also allows `||`, which concatenates the decimal digits.
pub fn part_b(input: &str) -> Result<u64> {
    calibration(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenation_undoes_suffix() {
        assert!(!solvable(156, &[15, 6], false));
        assert!(solvable(156, &[15, 6], true));
        assert!(solvable(7290, &[6, 8, 6, 15], true));
    }
}
