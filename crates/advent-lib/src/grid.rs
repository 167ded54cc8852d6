//! Character grids and the coordinate types searches run over.
//!
//! Rows are indexed by `y` growing downwards, columns by `x` growing to the
//! right, so `Heading::North` decreases `y`.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Wall marker shared by every maze-style puzzle.
pub const WALL: u8 = b'#';

/// A cell coordinate. Signed so that stepping off an edge stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move by an arbitrary offset.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Move one cell in the given heading.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.offset(dx, dy)
    }

    /// Taxicab distance between two cells.
    pub fn manhattan(self, other: Position) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours, in [`Heading::ALL`] order.
    pub fn orthogonal(self) -> [Position; 4] {
        Heading::ALL.map(|heading| self.step(heading))
    }

    /// The eight cells around this one.
    pub fn surrounding(self) -> [Position; 8] {
        [
            self.offset(-1, -1),
            self.offset(0, -1),
            self.offset(1, -1),
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(-1, 1),
            self.offset(0, 1),
            self.offset(1, 1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Compass facing, listed in clockwise order starting east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// Unit step `(dx, dy)` for this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
            Heading::North => (0, -1),
        }
    }

    /// Rotate 90° clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            Heading::North => Heading::East,
        }
    }

    /// Rotate 90° counterclockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
            Heading::North => Heading::West,
        }
    }

    /// Rotate 180°.
    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Parse one of the arrow characters `^ > v <`.
    pub fn from_arrow(symbol: u8) -> Option<Self> {
        match symbol {
            b'>' => Some(Heading::East),
            b'v' => Some(Heading::South),
            b'<' => Some(Heading::West),
            b'^' => Some(Heading::North),
            _ => None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }
}

/// Search state for orientation-aware mazes: a cell plus the way we face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pose {
    pub position: Position,
    pub heading: Heading,
}

impl Pose {
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The pose one cell ahead, facing the same way.
    pub fn forward(self) -> Self {
        Self::new(self.position.step(self.heading), self.heading)
    }
}

/// Rectangular grid of ASCII cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse a block of text into a grid. Surrounding blank lines are
    /// ignored; every remaining row must have the same width.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&[u8]> = text
            .trim()
            .lines()
            .map(|line| line.trim_end_matches('\r').as_bytes())
            .collect();

        let Some(first) = rows.first() else {
            return Err(Error::MalformedGrid {
                message: "grid is empty".to_string(),
            });
        };
        let width = first.len();
        if width == 0 {
            return Err(Error::MalformedGrid {
                message: "grid has an empty first row".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::MalformedGrid {
                    message: format!("row {} has width {}, expected {}", y, row.len(), width),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Build a grid of the given size with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, value: u8) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell != WALL)
    }

    /// First cell (row-major) holding `marker`.
    pub fn find(&self, marker: u8) -> Option<Position> {
        self.iter()
            .find_map(|(pos, cell)| (cell == marker).then_some(pos))
    }

    /// Like [`Grid::find`], but a missing marker is an error.
    pub fn require(&self, marker: u8) -> Result<Position> {
        self.find(marker).ok_or(Error::MissingMarker {
            marker: marker as char,
        })
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Position::new(x as i64, y as i64))
        })
    }

    /// Every `(position, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row = String::from_utf8_lossy(self.row(y));
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Grid::parse("###\n#.\n###").expect_err("ragged");
        assert!(err.to_string().contains("row 1 has width 2"));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            Grid::parse("\n\n"),
            Err(Error::MalformedGrid { .. })
        ));
    }

    #[test]
    fn find_and_require_markers() {
        let grid = Grid::parse("#S#\n#.E\n").unwrap();
        assert_eq!(grid.find(b'S'), Some(Position::new(1, 0)));
        assert_eq!(grid.require(b'E').unwrap(), Position::new(2, 1));
        let err = grid.require(b'X').expect_err("no X");
        assert_eq!(err.to_string(), "grid has no 'X' marker");
    }

    #[test]
    fn bounds_and_walls() {
        let grid = Grid::parse("#.\n..").unwrap();
        assert!(!grid.is_open(Position::new(0, 0)));
        assert!(grid.is_open(Position::new(1, 0)));
        assert!(!grid.is_open(Position::new(-1, 0)));
        assert!(!grid.is_open(Position::new(2, 1)));
    }

    #[test]
    fn turning_cycles_through_all_headings() {
        let mut heading = Heading::East;
        for _ in 0..4 {
            assert_eq!(heading.turn_right().turn_left(), heading);
            heading = heading.turn_right();
        }
        assert_eq!(heading, Heading::East);
        assert_eq!(Heading::North.reverse(), Heading::South);
    }

    #[test]
    fn display_round_trips_rows() {
        let text = "#.#\n.S.\n";
        assert_eq!(Grid::parse(text).unwrap().to_string(), text);
    }
}
