use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::params::PuzzleParams;
use crate::registry::{Answer, Part, PuzzleId};

/// Example inputs and expected answers, keyed by day (`aoc24:p16`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExampleBook {
    days: BTreeMap<String, ExampleCase>,
}

/// Example data for one puzzle day.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleCase {
    /// Input shared by both parts.
    pub input: String,
    /// Per-part input replacing `input`, for days whose examples differ.
    #[serde(default)]
    pub inputs: PartInputs,
    #[serde(default)]
    pub a: Option<Answer>,
    #[serde(default)]
    pub b: Option<Answer>,
    #[serde(default)]
    pub params: PuzzleParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartInputs {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
}

/// One runnable example: a single puzzle part with its expected answer.
#[derive(Debug, Clone)]
pub struct Example<'a> {
    pub id: PuzzleId,
    pub input: &'a str,
    pub expected: &'a Answer,
    pub params: &'a PuzzleParams,
}

impl ExampleCase {
    pub fn input_for(&self, part: Part) -> &str {
        let specific = match part {
            Part::A => self.inputs.a.as_deref(),
            Part::B => self.inputs.b.as_deref(),
        };
        specific.unwrap_or(&self.input)
    }

    pub fn expected(&self, part: Part) -> Option<&Answer> {
        match part {
            Part::A => self.a.as_ref(),
            Part::B => self.b.as_ref(),
        }
    }
}

impl ExampleBook {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let book: ExampleBook = serde_json::from_str(text)?;
        // Reject bad keys up front rather than when the case is first run.
        for key in book.days.keys() {
            format!("{}a", key).parse::<PuzzleId>()?;
        }
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every part with an expected answer, in identifier order.
    pub fn cases(&self) -> Vec<Example<'_>> {
        let mut examples = Vec::new();
        for (key, case) in &self.days {
            for part in [Part::A, Part::B] {
                let Some(expected) = case.expected(part) else {
                    continue;
                };
                let Ok(id) = format!("{}{}", key, part.letter()).parse::<PuzzleId>() else {
                    continue;
                };
                examples.push(Example {
                    id,
                    input: case.input_for(part),
                    expected,
                    params: &case.params,
                });
            }
        }
        examples
    }

    /// Look up the example day for `id`.
    pub fn case(&self, id: PuzzleId) -> Result<&ExampleCase> {
        self.days
            .get(&id.day_key())
            .ok_or_else(|| Error::UnknownPuzzle {
                name: id.day_key(),
                suggestions: Vec::new(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"{
        "aoc24:p17": {
            "input": "first",
            "inputs": { "b": "second" },
            "a": "4,6,3",
            "b": 117440
        },
        "aoc24:p25": { "input": "locks", "a": 3, "params": { "size": "5" } }
    }"#;

    #[test]
    fn expands_parts_with_expected_answers() {
        let book = ExampleBook::from_json(BOOK).unwrap();
        let cases = book.cases();
        let ids: Vec<String> = cases.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["aoc24:p17a", "aoc24:p17b", "aoc24:p25a"]);
        assert_eq!(cases[0].input, "first");
        assert_eq!(cases[1].input, "second");
        assert_eq!(cases[1].expected, &Answer::Int(117440));
        assert_eq!(cases[2].params.get("size"), Some("5"));
    }

    #[test]
    fn rejects_unparseable_day_keys() {
        let err = ExampleBook::from_json(r#"{"day17": {"input": ""}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidPuzzleId { .. }));
    }
}
