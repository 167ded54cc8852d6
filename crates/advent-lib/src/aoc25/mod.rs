//! Advent of Code 2025.

pub mod p01;
pub mod p02;
pub mod p03;
pub mod p04;
pub mod p05;
pub mod p06;
pub mod p07;
pub mod p08;
pub mod p09;
pub mod p10;
pub mod p11;
pub mod p12;

use crate::registry::{Answer, Part, PuzzleEntry, Solver, Year};

fn entry(day: u8, part: Part, description: &'static str, solver: Solver) -> PuzzleEntry {
    PuzzleEntry::new(Year::Aoc25, day, part, description, solver)
}

pub(crate) fn puzzles() -> Vec<PuzzleEntry> {
    use Part::{A, B};

    vec![
        entry(1, A, "dial rotations ending on zero", |input, _| {
            p01::part_a(input).map(Answer::from)
        }),
        entry(1, B, "dial clicks passing zero", |input, _| {
            p01::part_b(input).map(Answer::from)
        }),
        entry(2, A, "invalid ids made of a doubled sequence", |input, _| {
            p02::part_a(input).map(Answer::from)
        }),
        entry(2, B, "invalid ids made of any repeated sequence", |input, _| {
            p02::part_b(input).map(Answer::from)
        }),
        entry(3, A, "two-battery joltage per bank", |input, _| {
            p03::part_a(input).map(Answer::from)
        }),
        entry(3, B, "twelve-battery joltage per bank", |input, _| {
            p03::part_b(input).map(Answer::from)
        }),
        entry(4, A, "paper rolls reachable by forklift", |input, _| {
            p04::part_a(input).map(Answer::from)
        }),
        entry(4, B, "paper rolls removed in total", |input, _| {
            p04::part_b(input).map(Answer::from)
        }),
        entry(5, A, "fresh available ingredients", |input, _| {
            p05::part_a(input).map(Answer::from)
        }),
        entry(5, B, "ids covered by the fresh ranges", |input, _| {
            p05::part_b(input).map(Answer::from)
        }),
        entry(6, A, "worksheet grand total read by rows", |input, _| {
            p06::part_a(input).map(Answer::from)
        }),
        entry(6, B, "worksheet grand total read by columns", |input, _| {
            p06::part_b(input).map(Answer::from)
        }),
        entry(7, A, "tachyon beam splits", |input, _| {
            p07::part_a(input).map(Answer::from)
        }),
        entry(7, B, "tachyon particle timelines", |input, _| {
            p07::part_b(input).map(Answer::from)
        }),
        entry(8, A, "largest circuits after the closest connections", |input, params| {
            let connections = params.get_usize("connections", p08::DEFAULT_CONNECTIONS)?;
            p08::part_a(input, connections).map(Answer::from)
        }),
        entry(8, B, "last connection joining every box", |input, _| {
            p08::part_b(input).map(Answer::from)
        }),
        entry(9, A, "largest rectangle between red tiles", |input, _| {
            p09::part_a(input).map(Answer::from)
        }),
        entry(9, B, "largest rectangle inside the tile loop", |input, _| {
            p09::part_b(input).map(Answer::from)
        }),
        entry(10, A, "fewest presses for the indicator lights", |input, _| {
            p10::part_a(input).map(Answer::from)
        }),
        entry(10, B, "fewest presses for the joltage levels", |input, _| {
            p10::part_b(input).map(Answer::from)
        }),
        entry(11, A, "paths from you to out", |input, _| {
            p11::part_a(input).map(Answer::from)
        }),
        entry(11, B, "server paths through dac and fft", |input, _| {
            p11::part_b(input).map(Answer::from)
        }),
        entry(12, A, "regions that fit their presents", |input, _| {
            p12::part_a(input).map(Answer::from)
        }),
    ]
}
