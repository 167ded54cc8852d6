//! Advent of Code puzzle solvers.
//!
//! The crate exposes a generic shortest-path core (grid graph builders,
//! Dijkstra distances and best-path membership), a registry of puzzle
//! solvers keyed by identifiers such as `aoc24:p16a`, and helpers to locate
//! full puzzle inputs and run the bundled examples. Higher-level consumers
//! (the CLI) should only depend on the functions exported here.

pub mod aoc24;
pub mod aoc25;
pub mod error;
pub mod fixtures;
pub mod graph;
pub mod grid;
pub mod inputs;
pub mod params;
pub mod parse;
pub mod path;
pub mod registry;

pub use error::{Error, Result};
pub use fixtures::{Example, ExampleBook, ExampleCase};
pub use graph::{build_grid_graph, build_oriented_graph, Edge, Graph, Node, TURN_COST};
pub use grid::{Grid, Heading, Pose, Position};
pub use inputs::{default_data_dir, puzzle_input_path, read_input, resolve_data_dir};
pub use params::PuzzleParams;
pub use path::{shortest_distances, shortest_path_members, Distance, DistanceMap};
pub use registry::{lookup, puzzles, solve, Answer, Part, PuzzleEntry, PuzzleId, Year};
