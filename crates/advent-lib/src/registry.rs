//! Puzzle identifiers, answers and the static solver catalogue.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::params::PuzzleParams;
use crate::{aoc24, aoc25};

/// Maximum number of close matches offered for an unknown puzzle.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a catalogue entry to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Event year a puzzle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
    Aoc24,
    Aoc25,
}

impl Year {
    pub fn number(self) -> u16 {
        match self {
            Year::Aoc24 => 2024,
            Year::Aoc25 => 2025,
        }
    }

    /// Short form used in identifiers and input paths, e.g. `aoc24`.
    pub fn slug(self) -> &'static str {
        match self {
            Year::Aoc24 => "aoc24",
            Year::Aoc25 => "aoc25",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "aoc24" | "2024" | "24" => Some(Year::Aoc24),
            "aoc25" | "2025" | "25" => Some(Year::Aoc25),
            _ => None,
        }
    }
}

/// Which half of a day's puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    A,
    B,
}

impl Part {
    pub fn letter(self) -> char {
        match self {
            Part::A => 'a',
            Part::B => 'b',
        }
    }
}

/// Fully qualified puzzle identifier, displayed as `aoc24:p16a`.
///
/// Parsing also accepts `aoc24/p16a` and `2024-16a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PuzzleId {
    pub year: Year,
    pub day: u8,
    pub part: Part,
}

impl PuzzleId {
    pub const fn new(year: Year, day: u8, part: Part) -> Self {
        Self { year, day, part }
    }

    /// Identifier of the same day without the part suffix, e.g. `aoc24:p16`.
    pub fn day_key(&self) -> String {
        format!("{}:p{:02}", self.year.slug(), self.day)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.day_key(), self.part.letter())
    }
}

impl FromStr for PuzzleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPuzzleId { id: s.to_string() };
        let normalized = s.trim().to_ascii_lowercase();

        let (year, rest) = normalized
            .split_once([':', '/', '-'])
            .ok_or_else(invalid)?;
        let year = Year::parse(year).ok_or_else(invalid)?;

        let rest = rest.strip_prefix('p').unwrap_or(rest);
        let part = match rest.chars().last() {
            Some('a') => Part::A,
            Some('b') => Part::B,
            _ => return Err(invalid()),
        };
        let day: u8 = rest[..rest.len() - 1].parse().map_err(|_| invalid())?;
        if !(1..=25).contains(&day) {
            return Err(invalid());
        }

        Ok(PuzzleId::new(year, day, part))
    }
}

impl TryFrom<String> for PuzzleId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PuzzleId> for String {
    fn from(id: PuzzleId) -> Self {
        id.to_string()
    }
}

/// Scalar puzzle answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(value) => write!(f, "{}", value),
            Answer::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Int(value)
    }
}

impl From<u64> for Answer {
    fn from(value: u64) -> Self {
        Answer::Int(value as i64)
    }
}

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        Answer::Int(value as i64)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

/// Entry point shared by every puzzle part.
pub type Solver = fn(&str, &PuzzleParams) -> Result<Answer>;

/// A registered puzzle part.
#[derive(Clone, Copy)]
pub struct PuzzleEntry {
    pub id: PuzzleId,
    pub description: &'static str,
    solver: Solver,
}

impl PuzzleEntry {
    pub fn new(year: Year, day: u8, part: Part, description: &'static str, solver: Solver) -> Self {
        Self {
            id: PuzzleId::new(year, day, part),
            description,
            solver,
        }
    }

    pub fn solve(&self, input: &str, params: &PuzzleParams) -> Result<Answer> {
        (self.solver)(input, params)
    }
}

impl fmt::Debug for PuzzleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleEntry")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish()
    }
}

static CATALOGUE: Lazy<BTreeMap<PuzzleId, PuzzleEntry>> = Lazy::new(|| {
    aoc24::puzzles()
        .into_iter()
        .chain(aoc25::puzzles())
        .map(|entry| (entry.id, entry))
        .collect()
});

/// Every registered puzzle part, sorted by identifier.
pub fn puzzles() -> impl Iterator<Item = &'static PuzzleEntry> {
    CATALOGUE.values()
}

/// Find the catalogue entry for an identifier string.
pub fn lookup(name: &str) -> Result<&'static PuzzleEntry> {
    let unknown = |suggestions| Error::UnknownPuzzle {
        name: name.to_string(),
        suggestions,
    };
    match name.parse::<PuzzleId>() {
        Ok(id) => CATALOGUE.get(&id).ok_or_else(|| unknown(suggest(name))),
        Err(err) => {
            // Near misses such as "aoc24:p16" still get suggestions.
            let suggestions = suggest(name);
            if suggestions.is_empty() {
                Err(err)
            } else {
                Err(unknown(suggestions))
            }
        }
    }
}

/// Solve `name` against `input`.
pub fn solve(name: &str, input: &str, params: &PuzzleParams) -> Result<Answer> {
    let entry = lookup(name)?;
    let answer = entry.solve(input, params)?;
    info!(puzzle = %entry.id, answer = %answer, "solved puzzle");
    Ok(answer)
}

fn suggest(name: &str) -> Vec<String> {
    let needle = name.trim().to_ascii_lowercase();
    let mut scored: Vec<(f64, String)> = CATALOGUE
        .keys()
        .map(|id| {
            let candidate = id.to_string();
            (strsim::jaro_winkler(&needle, &candidate), candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_identifier_form() {
        let expected = PuzzleId::new(Year::Aoc24, 16, Part::A);
        for text in ["aoc24:p16a", "aoc24/p16a", "2024-16a", "AOC24:P16A"] {
            assert_eq!(text.parse::<PuzzleId>().unwrap(), expected, "{}", text);
        }
        assert_eq!(expected.to_string(), "aoc24:p16a");
        assert_eq!("aoc25:p1b".parse::<PuzzleId>().unwrap().to_string(), "aoc25:p01b");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for text in ["aoc24", "aoc23:p01a", "aoc24:p00a", "aoc24:p26a", "aoc24:p16c", "aoc24:pa"] {
            assert!(
                matches!(text.parse::<PuzzleId>(), Err(Error::InvalidPuzzleId { .. })),
                "{}",
                text
            );
        }
    }

    #[test]
    fn answers_serialize_untagged() {
        assert_eq!(serde_json::to_string(&Answer::Int(42)).unwrap(), "42");
        let text: Answer = serde_json::from_str("\"6,1\"").unwrap();
        assert_eq!(text, Answer::Text("6,1".to_string()));
    }

    #[test]
    fn catalogue_is_sorted_and_unique() {
        let ids: Vec<PuzzleId> = puzzles().map(|entry| entry.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
