//! Claw Contraption: cheapest button presses to reach each prize.
//!
//! Button A costs 3 tokens and button B costs 1. When the buttons move the
//! claw in different directions the press counts are unique (Cramer's
//! rule). When they are parallel, every combination on the line is a
//! candidate and the cheapest one is taken.

use crate::error::{Error, Result};
use crate::parse::{blocks, integers};

const PUZZLE: &str = "aoc24:p13";

/// Prize offset applied after the unit conversion error is discovered.
pub const PRIZE_OFFSET: i64 = 10_000_000_000_000;

const PRESS_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn cross(u: (i64, i64), v: (i64, i64)) -> i128 {
    i128::from(u.0) * i128::from(v.1) - i128::from(u.1) * i128::from(v.0)
}

impl Machine {
    /// Cheapest non-negative press counts `(a, b)` reaching the prize, each
    /// at most `limit` when given.
    fn presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        let det = cross(self.a, self.b);
        if det == 0 {
            return self.parallel_presses(limit);
        }
        let a_num = cross(self.prize, self.b);
        let b_num = cross(self.a, self.prize);
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let a = i64::try_from(a_num / det).ok()?;
        let b = i64::try_from(b_num / det).ok()?;
        let limit = limit.unwrap_or(i64::MAX);
        ((0..=limit).contains(&a) && (0..=limit).contains(&b)).then_some((a, b))
    }

    /// Both buttons move along one line, so the machine reduces to
    /// `a * u + b * v = t` along an axis that line is not perpendicular to.
    fn parallel_presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        let direction = if self.a != (0, 0) { self.a } else { self.b };
        if direction == (0, 0) {
            return (self.prize == (0, 0)).then_some((0, 0));
        }
        if cross(direction, self.prize) != 0 {
            return None;
        }
        let (u, v, t) = if direction.0 != 0 {
            (self.a.0, self.b.0, self.prize.0)
        } else {
            (self.a.1, self.b.1, self.prize.1)
        };
        cheapest_on_line(u, v, t, limit.unwrap_or(i64::MAX))
    }
}

/// Minimise `3a + b` subject to `a * u + b * v = t` and `0 <= a, b <= limit`.
///
/// Solutions form `a = a0 + k * v/g`, `b = b0 - k * u/g`; the cost is
/// linear in `k`, so the optimum sits at one end of the feasible range.
fn cheapest_on_line(u: i64, v: i64, t: i64, limit: i64) -> Option<(i64, i64)> {
    let (u, v, t, limit) = (i128::from(u), i128::from(v), i128::from(t), i128::from(limit));
    let (g, x, y) = extended_gcd(u, v);
    if t % g != 0 {
        return None;
    }
    let (a0, b0) = (x * (t / g), y * (t / g));
    let (step_a, step_b) = (v / g, -u / g);

    let mut low = i128::MIN;
    let mut high = i128::MAX;
    for (start, step) in [(a0, step_a), (b0, step_b)] {
        if step == 0 {
            if !(0..=limit).contains(&start) {
                return None;
            }
            continue;
        }
        let (from, to) = if step > 0 {
            (div_ceil(-start, step), div_floor(limit - start, step))
        } else {
            (div_ceil(limit - start, step), div_floor(-start, step))
        };
        low = low.max(from);
        high = high.min(to);
    }
    if low > high {
        return None;
    }

    let at = |k: i128| (a0 + k * step_a, b0 + k * step_b);
    let cost = |(a, b): (i128, i128)| 3 * a + b;
    let best = [at(low), at(high)].into_iter().min_by_key(|&pair| cost(pair))?;
    Some((i64::try_from(best.0).ok()?, i64::try_from(best.1).ok()?))
}

/// `(g, x, y)` with `u * x + v * y = g` and `g > 0`. At least one of `u`,
/// `v` must be non-zero.
fn extended_gcd(u: i128, v: i128) -> (i128, i128, i128) {
    let (mut r0, mut r1) = (u, v);
    let (mut x0, mut x1) = (1, 0);
    let (mut y0, mut y1) = (0, 1);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    if r0 < 0 {
        (-r0, -x0, -y0)
    } else {
        (r0, x0, y0)
    }
}

fn div_floor(n: i128, d: i128) -> i128 {
    let q = n / d;
    if n % d != 0 && (n < 0) != (d < 0) {
        q - 1
    } else {
        q
    }
}

fn div_ceil(n: i128, d: i128) -> i128 {
    -div_floor(-n, d)
}

fn machines(input: &str) -> Result<Vec<Machine>> {
    blocks(input)
        .iter()
        .map(|block| match integers(block)[..] {
            [ax, ay, bx, by, px, py] => Ok(Machine {
                a: (ax, ay),
                b: (bx, by),
                prize: (px, py),
            }),
            _ => Err(Error::parse(PUZZLE, format!("bad machine block '{}'", block))),
        })
        .collect()
}

fn tokens((a, b): (i64, i64)) -> i64 {
    3 * a + b
}

pub fn part_a(input: &str) -> Result<i64> {
    Ok(machines(input)?
        .iter()
        .filter_map(|m| m.presses(Some(PRESS_LIMIT)))
        .map(tokens)
        .sum())
}

pub fn part_b(input: &str) -> Result<i64> {
    Ok(machines(input)?
        .into_iter()
        .map(|m| Machine {
            prize: (m.prize.0 + PRIZE_OFFSET, m.prize.1 + PRIZE_OFFSET),
            ..m
        })
        .filter_map(|m| m.presses(None))
        .map(tokens)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_buttons_have_one_answer() {
        let input = "Button A: X+94, Y+34\nButton B: X+22, Y+67\nPrize: X=8400, Y=5400\n";
        assert_eq!(part_a(input).unwrap(), 280);
    }

    #[test]
    fn parallel_buttons_take_the_cheapest_mix() {
        let input = "Button A: X+1, Y+1\nButton B: X+2, Y+2\nPrize: X=4, Y=4\n";
        assert_eq!(part_a(input).unwrap(), 2);

        // A covers three times B's distance for three times the tokens, so
        // every mix costs the same.
        let input = "Button A: X+3, Y+3\nButton B: X+1, Y+1\nPrize: X=7, Y=7\n";
        assert_eq!(part_a(input).unwrap(), 7);
    }

    #[test]
    fn parallel_buttons_respect_the_press_limit() {
        // B is cheaper per step but capped at 100 presses.
        let input = "Button A: X+2, Y+2\nButton B: X+1, Y+1\nPrize: X=151, Y=151\n";
        assert_eq!(part_a(input).unwrap(), 3 * 26 + 99);
        // Only B moves the claw, and 150 presses are too many.
        let input = "Button A: X+0, Y+0\nButton B: X+1, Y+1\nPrize: X=150, Y=150\n";
        assert_eq!(part_a(input).unwrap(), 0);
    }

    #[test]
    fn prize_off_the_button_line_is_unreachable() {
        let input = "Button A: X+1, Y+1\nButton B: X+2, Y+2\nPrize: X=4, Y=5\n";
        assert_eq!(part_a(input).unwrap(), 0);
    }

    #[test]
    fn parallel_buttons_scale_to_the_offset_prize() {
        let input = "Button A: X+1, Y+1\nButton B: X+2, Y+2\nPrize: X=4, Y=4\n";
        assert_eq!(part_b(input).unwrap(), (PRIZE_OFFSET + 4) / 2);
    }
}
