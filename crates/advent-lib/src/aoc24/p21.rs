//! Keypad Conundrum: robots typing on keypads through other robots.
//!
//! Costs are computed bottom-up. For the keypad the human presses
//! directly, moving between any two keys and pressing costs one press per
//! key. Each keypad above it costs a move `from -> to` as the cheapest way
//! to type that move (plus the final `A`) on the keypad below.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::grid::Position;
use crate::parse::{lines, number};

const PUZZLE: &str = "aoc24:p21";

/// Keypads between the human and the door in part one (two robots plus the door).
pub const SHORT_CHAIN: usize = 3;
/// Keypads in part two.
pub const LONG_CHAIN: usize = 26;

const NUMERIC: &[&str] = &["789", "456", "123", "#0A"];
const DIRECTIONAL: &[&str] = &["#^A", "<v>"];

type PairCosts = HashMap<(u8, u8), u64>;

struct Keypad {
    keys: Vec<(u8, Position)>,
    gap: Position,
}

impl Keypad {
    fn new(rows: &[&str]) -> Self {
        let mut keys = Vec::new();
        let mut gap = Position::new(0, 0);
        for (y, row) in rows.iter().enumerate() {
            for (x, key) in row.bytes().enumerate() {
                let pos = Position::new(x as i64, y as i64);
                if key == b'#' {
                    gap = pos;
                } else {
                    keys.push((key, pos));
                }
            }
        }
        Self { keys, gap }
    }

    /// Every move sequence from `from` to `to` that never crosses the gap.
    fn routes(&self, from: Position, to: Position) -> Vec<Vec<u8>> {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let horizontal = if dx < 0 { b'<' } else { b'>' };
        let vertical = if dy < 0 { b'^' } else { b'v' };
        let mut routes = Vec::new();
        interleave(
            (horizontal, dx.unsigned_abs() as usize),
            (vertical, dy.unsigned_abs() as usize),
            &mut Vec::new(),
            &mut routes,
        );
        routes.retain(|route| {
            let mut pos = from;
            route.iter().all(|&symbol| {
                pos = step(pos, symbol);
                pos != self.gap
            })
        });
        routes
    }

    /// Costs for this keypad given the costs of the one operating it.
    fn pair_costs(&self, below: &PairCosts) -> PairCosts {
        let mut costs = PairCosts::new();
        for &(from_key, from) in &self.keys {
            for &(to_key, to) in &self.keys {
                let best = self
                    .routes(from, to)
                    .iter()
                    .map(|route| sequence_cost(route, below))
                    .min()
                    .unwrap_or(u64::MAX);
                costs.insert((from_key, to_key), best);
            }
        }
        costs
    }
}

fn step(pos: Position, symbol: u8) -> Position {
    match symbol {
        b'<' => pos.offset(-1, 0),
        b'>' => pos.offset(1, 0),
        b'^' => pos.offset(0, -1),
        _ => pos.offset(0, 1),
    }
}

/// Distinct orderings of `a.1` copies of `a.0` and `b.1` copies of `b.0`.
fn interleave(a: (u8, usize), b: (u8, usize), prefix: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
    if a.1 == 0 && b.1 == 0 {
        out.push(prefix.clone());
        return;
    }
    for (symbol, left, other) in [(a.0, a.1, b), (b.0, b.1, a)] {
        if left > 0 {
            prefix.push(symbol);
            interleave((symbol, left - 1), other, prefix, out);
            prefix.pop();
        }
    }
}

/// Cost of typing `keys` followed by `A`, starting from `A`.
fn sequence_cost(keys: &[u8], below: &PairCosts) -> u64 {
    let mut current = b'A';
    let mut total = 0;
    for &key in keys.iter().chain([b'A'].iter()) {
        total += below.get(&(current, key)).copied().unwrap_or(1);
        current = key;
    }
    total
}

/// Sum of code complexities with `chain` keypads between human and door.
pub fn complexity(input: &str, chain: usize) -> Result<u64> {
    let directional = Keypad::new(DIRECTIONAL);
    let mut costs = PairCosts::new();
    for _ in 1..chain {
        costs = directional.pair_costs(&costs);
    }
    let costs = Keypad::new(NUMERIC).pair_costs(&costs);

    let mut total = 0;
    for code in lines(input) {
        let code = code.trim();
        let Some(digits) = code.strip_suffix('A') else {
            return Err(Error::parse(PUZZLE, format!("code '{}' must end in A", code)));
        };
        let value: u64 = number(PUZZLE, digits)?;
        let mut current = b'A';
        let mut presses = 0;
        for key in code.bytes() {
            presses += costs.get(&(current, key)).copied().ok_or_else(|| {
                Error::parse(PUZZLE, format!("'{}' is not on the keypad", key as char))
            })?;
            current = key;
        }
        total += value * presses;
    }
    Ok(total)
}
