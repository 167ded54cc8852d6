//! Advent of Code 2024.

pub mod p01;
pub mod p02;
pub mod p04;
pub mod p05;
pub mod p07;
pub mod p08;
pub mod p09;
pub mod p10;
pub mod p11;
pub mod p12;
pub mod p13;
pub mod p14;
pub mod p15;
pub mod p16;
pub mod p17;
pub mod p18;
pub mod p19;
pub mod p20;
pub mod p21;
pub mod p23;
pub mod p24;
pub mod p25;

use crate::registry::{Answer, Part, PuzzleEntry, Solver, Year};

fn entry(day: u8, part: Part, description: &'static str, solver: Solver) -> PuzzleEntry {
    PuzzleEntry::new(Year::Aoc24, day, part, description, solver)
}

pub(crate) fn puzzles() -> Vec<PuzzleEntry> {
    use Part::{A, B};

    vec![
        entry(1, A, "total distance between sorted location lists", |input, _| {
            p01::part_a(input).map(Answer::from)
        }),
        entry(1, B, "similarity score of the location lists", |input, _| {
            p01::part_b(input).map(Answer::from)
        }),
        entry(2, A, "safe reactor reports", |input, _| {
            p02::part_a(input).map(Answer::from)
        }),
        entry(2, B, "safe reports with the problem dampener", |input, _| {
            p02::part_b(input).map(Answer::from)
        }),
        entry(4, A, "XMAS occurrences in the word search", |input, _| {
            p04::part_a(input).map(Answer::from)
        }),
        entry(4, B, "X-shaped MAS occurrences", |input, _| {
            p04::part_b(input).map(Answer::from)
        }),
        entry(5, A, "middle pages of correctly ordered updates", |input, _| {
            p05::part_a(input).map(|sum| Answer::Int(i64::from(sum)))
        }),
        entry(5, B, "middle pages of reordered updates", |input, _| {
            p05::part_b(input).map(|sum| Answer::Int(i64::from(sum)))
        }),
        entry(7, A, "calibration result with + and *", |input, _| {
            p07::part_a(input).map(Answer::from)
        }),
        entry(7, B, "calibration result with concatenation", |input, _| {
            p07::part_b(input).map(Answer::from)
        }),
        entry(8, A, "antinode locations", |input, _| {
            p08::part_a(input).map(Answer::from)
        }),
        entry(8, B, "antinode locations with resonant harmonics", |input, _| {
            p08::part_b(input).map(Answer::from)
        }),
        entry(9, A, "filesystem checksum after block compaction", |input, _| {
            p09::part_a(input).map(Answer::from)
        }),
        entry(9, B, "filesystem checksum after whole-file compaction", |input, _| {
            p09::part_b(input).map(Answer::from)
        }),
        entry(10, A, "sum of trailhead scores", |input, _| {
            p10::part_a(input).map(Answer::from)
        }),
        entry(10, B, "sum of trailhead ratings", |input, _| {
            p10::part_b(input).map(Answer::from)
        }),
        entry(11, A, "stones after the short blink run", |input, params| {
            let blinks = params.get_usize("blinks", p11::SHORT_BLINKS)?;
            p11::stones_after(input, blinks).map(Answer::from)
        }),
        entry(11, B, "stones after the long blink run", |input, params| {
            let blinks = params.get_usize("blinks", p11::LONG_BLINKS)?;
            p11::stones_after(input, blinks).map(Answer::from)
        }),
        entry(12, A, "fence price by perimeter", |input, _| {
            p12::part_a(input).map(Answer::from)
        }),
        entry(12, B, "fence price by number of sides", |input, _| {
            p12::part_b(input).map(Answer::from)
        }),
        entry(13, A, "fewest tokens to win every prize", |input, _| {
            p13::part_a(input).map(Answer::from)
        }),
        entry(13, B, "fewest tokens after the prize offset", |input, _| {
            p13::part_b(input).map(Answer::from)
        }),
        entry(14, A, "safety factor of the robot quadrants", |input, params| {
            let seconds = params.get_usize("seconds", p14::DEFAULT_SECONDS)?;
            p14::part_a(input, seconds).map(Answer::from)
        }),
        entry(14, B, "first second with no overlapping robots", |input, _| {
            p14::part_b(input).map(Answer::from)
        }),
        entry(15, A, "box GPS sum in the warehouse", |input, _| {
            p15::part_a(input).map(Answer::from)
        }),
        entry(15, B, "box GPS sum in the wide warehouse", |input, _| {
            p15::part_b(input).map(Answer::from)
        }),
        entry(16, A, "lowest reindeer maze score", |input, _| {
            p16::part_a(input).map(Answer::from)
        }),
        entry(16, B, "tiles on any best maze path", |input, _| {
            p16::part_b(input).map(Answer::from)
        }),
        entry(17, A, "output of the 3-bit computer", |input, _| {
            p17::part_a(input).map(Answer::from)
        }),
        entry(17, B, "lowest register A that makes the program print itself", |input, _| {
            p17::part_b(input).map(Answer::from)
        }),
        entry(18, A, "steps to the memory exit after bytes fall", |input, params| {
            let bytes = params.get_usize("bytes", p18::DEFAULT_BYTES)?;
            p18::part_a(input, bytes).map(Answer::from)
        }),
        entry(18, B, "first byte cutting off the exit", |input, _| {
            p18::part_b(input).map(Answer::from)
        }),
        entry(19, A, "possible towel designs", |input, _| {
            p19::part_a(input).map(Answer::from)
        }),
        entry(19, B, "towel arrangements across designs", |input, _| {
            p19::part_b(input).map(Answer::from)
        }),
        entry(20, A, "two-step cheats saving enough time", |input, params| {
            let min_saving = params.get_u64("min_saving", p20::DEFAULT_MIN_SAVING)?;
            p20::part_a(input, min_saving).map(Answer::from)
        }),
        entry(20, B, "twenty-step cheats saving enough time", |input, params| {
            let min_saving = params.get_u64("min_saving", p20::DEFAULT_MIN_SAVING)?;
            p20::part_b(input, min_saving).map(Answer::from)
        }),
        entry(21, A, "code complexities through two robot keypads", |input, params| {
            let robots = params.get_usize("robots", p21::SHORT_CHAIN)?;
            p21::complexity(input, robots).map(Answer::from)
        }),
        entry(21, B, "code complexities through twenty-five robot keypads", |input, params| {
            let robots = params.get_usize("robots", p21::LONG_CHAIN)?;
            p21::complexity(input, robots).map(Answer::from)
        }),
        entry(23, A, "triangles containing a t-computer", |input, _| {
            p23::part_a(input).map(Answer::from)
        }),
        entry(23, B, "LAN party password", |input, _| {
            p23::part_b(input).map(Answer::from)
        }),
        entry(24, A, "number on the z wires", |input, _| {
            p24::part_a(input).map(Answer::from)
        }),
        entry(24, B, "wires swapped in the adder", |input, _| {
            p24::part_b(input).map(Answer::from)
        }),
        entry(25, A, "lock and key pairs that fit", |input, _| {
            p25::part_a(input).map(Answer::from)
        }),
    ]
}
