//! Warehouse Woes: a robot pushing boxes around a warehouse.

use crate::error::{Error, Result};
use crate::grid::{Grid, Heading, Position, WALL};
use crate::parse::blocks;

const PUZZLE: &str = "aoc24:p15";

const ROBOT: u8 = b'@';
const EMPTY: u8 = b'.';
const BOX: u8 = b'O';
const BOX_LEFT: u8 = b'[';
const BOX_RIGHT: u8 = b']';

struct Warehouse {
    grid: Grid,
    robot: Position,
}

impl Warehouse {
    /// `wide` doubles every cell horizontally, turning boxes into `[]` pairs.
    fn parse(map: &str, wide: bool) -> Result<Self> {
        let map = if wide {
            map.chars()
                .map(|c| match c {
                    '#' => "##",
                    'O' => "[]",
                    '.' => "..",
                    '@' => "@.",
                    '\n' => "\n",
                    _ => "?",
                })
                .collect()
        } else {
            map.to_string()
        };

        let grid = Grid::parse(&map)?;
        if let Some((pos, cell)) = grid
            .iter()
            .find(|&(_, cell)| ![WALL, EMPTY, ROBOT, BOX, BOX_LEFT, BOX_RIGHT].contains(&cell))
        {
            return Err(Error::parse(
                PUZZLE,
                format!("unexpected cell '{}' at {}", cell as char, pos),
            ));
        }
        let robot = grid.require(ROBOT)?;
        Ok(Self { grid, robot })
    }

    fn can_move(&self, from: Position, heading: Heading) -> bool {
        let next = from.step(heading);
        match self.grid.get(next) {
            Some(EMPTY) => true,
            Some(BOX) => self.can_move(next, heading),
            Some(half @ (BOX_LEFT | BOX_RIGHT)) => {
                if heading.is_vertical() {
                    self.can_move(next, heading) && self.can_move(partner(next, half), heading)
                } else {
                    self.can_move(next, heading)
                }
            }
            _ => false,
        }
    }

    /// Moves the contents of `from` one step, pushing whatever is ahead.
    /// Only call after [`Warehouse::can_move`] succeeded.
    fn do_move(&mut self, from: Position, heading: Heading) {
        let next = from.step(heading);
        match self.grid.get(next) {
            Some(BOX) => self.do_move(next, heading),
            Some(half @ (BOX_LEFT | BOX_RIGHT)) => {
                self.do_move(next, heading);
                if heading.is_vertical() {
                    self.do_move(partner(next, half), heading);
                }
            }
            _ => {}
        }
        let moving = self.grid.get(from).unwrap_or(EMPTY);
        self.grid.set(next, moving);
        self.grid.set(from, EMPTY);
    }

    fn push(&mut self, heading: Heading) {
        if self.can_move(self.robot, heading) {
            self.do_move(self.robot, heading);
            self.robot = self.robot.step(heading);
        }
    }

    /// Sum of `100 * y + x` over every box (left half for wide boxes).
    fn gps_sum(&self) -> i64 {
        self.grid
            .iter()
            .filter(|&(_, cell)| cell == BOX || cell == BOX_LEFT)
            .map(|(pos, _)| 100 * pos.y + pos.x)
            .sum()
    }
}

fn partner(pos: Position, half: u8) -> Position {
    if half == BOX_LEFT {
        pos.offset(1, 0)
    } else {
        pos.offset(-1, 0)
    }
}

fn run(input: &str, wide: bool) -> Result<i64> {
    let sections = blocks(input);
    let [map, moves] = sections.as_slice() else {
        return Err(Error::parse(PUZZLE, "expected a map and a move list"));
    };

    let mut warehouse = Warehouse::parse(map, wide)?;
    for symbol in moves.bytes().filter(|b| !b.is_ascii_whitespace()) {
        let heading = Heading::from_arrow(symbol).ok_or_else(|| {
            Error::parse(PUZZLE, format!("unexpected move '{}'", symbol as char))
        })?;
        warehouse.push(heading);
    }
    Ok(warehouse.gps_sum())
}

pub fn part_a(input: &str) -> Result<i64> {
    run(input, false)
}

pub fn part_b(input: &str) -> Result<i64> {
    run(input, true)
}
