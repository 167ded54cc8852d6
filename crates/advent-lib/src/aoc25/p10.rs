//! Factory: configuring machines by pressing wiring buttons.
//!
//! Part two is an integer program: press counts `x >= 0` with `A x = b`
//! where column `j` of `A` marks the counters button `j` increments. The
//! system is brought to reduced row echelon form in exact integer
//! arithmetic, after which only the free columns need enumerating. Each
//! free button is bounded by the smallest target among the counters it
//! touches.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::{lines, number};

const PUZZLE: &str = "aoc25:p10";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Machine {
    lights: Vec<bool>,
    buttons: Vec<Vec<usize>>,
    joltage: Vec<i64>,
}

fn bracketed(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn list<T: std::str::FromStr>(text: &str) -> Result<Vec<T>> {
    text.split(',').map(|item| number(PUZZLE, item)).collect()
}

impl Machine {
    fn parse(line: &str) -> Result<Self> {
        let mut lights = None;
        let mut buttons = Vec::new();
        let mut joltage = None;
        for token in line.split_whitespace() {
            if let Some(diagram) = bracketed(token, '[', ']') {
                lights = Some(diagram.bytes().map(|b| b == b'#').collect());
            } else if let Some(wiring) = bracketed(token, '(', ')') {
                buttons.push(list(wiring)?);
            } else if let Some(levels) = bracketed(token, '{', '}') {
                joltage = Some(list(levels)?);
            } else {
                return Err(Error::parse(PUZZLE, format!("unexpected token '{}'", token)));
            }
        }

        let (Some(lights), Some(joltage)) = (lights, joltage) else {
            return Err(Error::parse(PUZZLE, format!("incomplete machine '{}'", line)));
        };
        let machine = Machine {
            lights,
            buttons,
            joltage,
        };
        // Every button must address both a light and a joltage counter.
        let counters = machine.lights.len().min(machine.joltage.len());
        if machine.buttons.iter().flatten().any(|&counter| counter >= counters) {
            return Err(Error::parse(PUZZLE, format!("button out of range in '{}'", line)));
        }
        if machine.lights.len() > 64 || machine.buttons.len() >= 64 {
            return Err(Error::parse(PUZZLE, format!("machine too large in '{}'", line)));
        }
        Ok(machine)
    }

    /// Fewest presses to match the light diagram. Pressing twice cancels
    /// out, so only subsets of buttons matter.
    fn fewest_for_lights(&self) -> Option<u32> {
        let target: u64 = self
            .lights
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| 1u64 << i)
            .sum();
        let masks: Vec<u64> = self
            .buttons
            .iter()
            .map(|wiring| wiring.iter().fold(0u64, |mask, &i| mask ^ (1 << i)))
            .collect();

        (0u64..1 << masks.len())
            .filter(|subset| {
                let lit = masks
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| subset & (1 << i) != 0)
                    .fold(0, |acc, (_, &mask)| acc ^ mask);
                lit == target
            })
            .map(|subset| subset.count_ones())
            .min()
    }

    /// Fewest presses to bring every counter to its joltage level.
    fn fewest_for_joltage(&self) -> Option<i64> {
        let system = System::reduce(&self.buttons, &self.joltage)?;
        let bounds: Vec<i64> = system
            .free
            .iter()
            .map(|&button| {
                self.buttons[button]
                    .iter()
                    .map(|&counter| self.joltage[counter])
                    .min()
                    .unwrap_or(0)
            })
            .collect();

        let mut best = None;
        let mut assignment = vec![0; system.free.len()];
        system.search(&bounds, &mut assignment, 0, 0, &mut best);
        best
    }
}

/// Reduced row echelon form of `[A | b]`.
struct System {
    rows: Vec<Vec<i64>>,
    /// `(row, column)` of every pivot.
    pivots: Vec<(usize, usize)>,
    free: Vec<usize>,
}

impl System {
    /// `None` when the equations are inconsistent.
    fn reduce(buttons: &[Vec<usize>], targets: &[i64]) -> Option<Self> {
        let columns = buttons.len();
        let mut rows: Vec<Vec<i64>> = targets
            .iter()
            .enumerate()
            .map(|(counter, &target)| {
                let mut row: Vec<i64> = buttons
                    .iter()
                    .map(|wiring| i64::from(wiring.contains(&counter)))
                    .collect();
                row.push(target);
                row
            })
            .collect();

        let mut pivots = Vec::new();
        let mut next_row = 0;
        for column in 0..columns {
            let Some(found) = (next_row..rows.len()).find(|&r| rows[r][column] != 0) else {
                continue;
            };
            rows.swap(next_row, found);
            if rows[next_row][column] < 0 {
                rows[next_row].iter_mut().for_each(|v| *v = -*v);
            }
            let pivot_row = rows[next_row].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                let factor = row[column];
                if r == next_row || factor == 0 {
                    continue;
                }
                for (value, &pivot_value) in row.iter_mut().zip(&pivot_row) {
                    *value = *value * pivot_row[column] - pivot_value * factor;
                }
                normalize(row);
            }
            pivots.push((next_row, column));
            next_row += 1;
        }

        // Rows past the pivots have no coefficients left.
        if rows[next_row..].iter().any(|row| row[columns] != 0) {
            return None;
        }

        let free = (0..columns)
            .filter(|c| !pivots.iter().any(|&(_, pc)| pc == *c))
            .collect();
        Some(Self { rows, pivots, free })
    }

    /// Total presses for a full free-variable assignment, or `None` if a
    /// pivot variable would be fractional or negative.
    fn presses(&self, assignment: &[i64]) -> Option<i64> {
        let rhs = self.rows.first().map_or(0, |row| row.len() - 1);
        let mut total: i64 = assignment.iter().sum();
        for &(r, pc) in &self.pivots {
            let row = &self.rows[r];
            let mut value = row[rhs];
            for (&fc, &x) in self.free.iter().zip(assignment) {
                value -= row[fc] * x;
            }
            if value % row[pc] != 0 || value / row[pc] < 0 {
                return None;
            }
            total += value / row[pc];
        }
        Some(total)
    }

    fn search(
        &self,
        bounds: &[i64],
        assignment: &mut Vec<i64>,
        depth: usize,
        partial: i64,
        best: &mut Option<i64>,
    ) {
        if best.is_some_and(|b| partial >= b) {
            return;
        }
        if depth == bounds.len() {
            if let Some(total) = self.presses(assignment) {
                if best.is_none_or(|b| total < b) {
                    *best = Some(total);
                }
            }
            return;
        }
        for value in 0..=bounds[depth] {
            assignment[depth] = value;
            self.search(bounds, assignment, depth + 1, partial + value, best);
        }
        assignment[depth] = 0;
    }
}

/// Divide a row by the gcd of its entries.
fn normalize(row: &mut [i64]) {
    let divisor = row.iter().fold(0, |g, &v| gcd(g, v.abs()));
    if divisor > 1 {
        row.iter_mut().for_each(|v| *v /= divisor);
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn machines(input: &str) -> Result<Vec<Machine>> {
    lines(input).map(Machine::parse).collect()
}

pub fn part_a(input: &str) -> Result<u64> {
    let mut total = 0;
    for machine in machines(input)? {
        let presses = machine
            .fewest_for_lights()
            .ok_or_else(|| Error::no_solution(PUZZLE, "a light diagram cannot be matched"))?;
        total += u64::from(presses);
    }
    Ok(total)
}

pub fn part_b(input: &str) -> Result<i64> {
    let mut total = 0;
    for (index, machine) in machines(input)?.iter().enumerate() {
        let presses = machine.fewest_for_joltage().ok_or_else(|| {
            Error::no_solution(PUZZLE, format!("machine {} cannot reach its joltage", index + 1))
        })?;
        debug!(machine = index + 1, presses, "joltage configured");
        total += presses;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(line: &str) -> Machine {
        Machine::parse(line).unwrap()
    }

    #[test]
    fn first_example_machine() {
        let m = machine("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}");
        assert_eq!(m.fewest_for_lights(), Some(2));
        assert_eq!(m.fewest_for_joltage(), Some(10));
    }

    #[test]
    fn inconsistent_joltage_has_no_solution() {
        // One button drives both counters, which need different levels.
        let m = machine("[##] (0,1) {1,2}");
        assert_eq!(m.fewest_for_joltage(), None);
    }

    #[test]
    fn rejects_out_of_range_buttons() {
        assert!(Machine::parse("[.#] (0,5) {1,1}").is_err());
    }

    #[test]
    fn button_must_fit_the_joltage_list_too() {
        // Index 2 is a light but has no joltage counter.
        let err = part_b("[.#.] (2) (0) {1}\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(Machine::parse("[.] (0) (1) {1,1}").is_err());
    }
}
