//! Workspace root package. Holds workspace-level tooling only; the solvers
//! live in `crates/advent-lib` and the command-line front end in
//! `crates/advent-cli`.
