//! Output formatting for answers, the puzzle listing and example runs.

use std::time::Duration;

use advent_lib::{Answer, PuzzleEntry, PuzzleId};
use clap::ValueEnum;
use serde::Serialize;

use crate::terminal::ColorPalette;

/// How `solve` prints its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare answer, suitable for piping.
    #[default]
    Text,
    /// A JSON object with the puzzle id, answer and timing.
    Json,
}

/// Result of solving one puzzle part.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub puzzle: PuzzleId,
    pub answer: Answer,
    pub elapsed_ms: f64,
}

impl SolveReport {
    pub fn new(puzzle: PuzzleId, answer: Answer, elapsed: Duration) -> Self {
        Self {
            puzzle,
            answer,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.answer.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

/// Outcome of running one example from the fixture book.
#[derive(Debug, Clone)]
pub struct ExampleOutcome {
    pub puzzle: PuzzleId,
    pub expected: Answer,
    /// The computed answer, or the solver's error message.
    pub actual: Result<Answer, String>,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.actual.as_ref().is_ok_and(|answer| *answer == self.expected)
    }

    pub fn render(&self, palette: &ColorPalette) -> String {
        let p = palette;
        if self.passed() {
            return format!(
                "{}PASS{} {}{}{} {}",
                p.tag_pass, p.reset, p.white_bold, self.puzzle, p.reset, self.expected
            );
        }
        let detail = match &self.actual {
            Ok(answer) => format!("expected {}, got {}", self.expected, answer),
            Err(message) => format!("expected {}, error: {}", self.expected, message),
        };
        format!(
            "{}FAIL{} {}{}{} {}{}{}",
            p.tag_fail, p.reset, p.white_bold, self.puzzle, p.reset, p.red, detail, p.reset
        )
    }
}

/// Closing line of an example run.
pub fn render_summary(
    outcomes: &[ExampleOutcome],
    elapsed: Duration,
    palette: &ColorPalette,
) -> String {
    let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();
    let failed = outcomes.len() - passed;
    let color = if failed == 0 { palette.green } else { palette.red };
    format!(
        "{}{} passed, {} failed{} {}in {}{}",
        color,
        passed,
        failed,
        palette.reset,
        palette.gray,
        format_elapsed(elapsed),
        palette.reset
    )
}

/// One line per registered puzzle part.
pub fn render_listing<'a>(
    entries: impl IntoIterator<Item = &'a PuzzleEntry>,
    palette: &ColorPalette,
) -> String {
    entries
        .into_iter()
        .map(|entry| {
            format!(
                "{}{}{}  {}{}{}",
                palette.white_bold,
                entry.id,
                palette.reset,
                palette.gray,
                entry.description,
                palette.reset
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `350ms` below one second, `1.25s` above.
pub fn format_elapsed(elapsed: Duration) -> String {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_id() -> PuzzleId {
        "aoc24:p16a".parse().unwrap()
    }

    #[test]
    fn text_report_is_the_bare_answer() {
        let report = SolveReport::new(maze_id(), Answer::Int(7036), Duration::from_millis(3));
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "7036");
    }

    #[test]
    fn json_report_carries_the_puzzle_id() {
        let report = SolveReport::new(maze_id(), Answer::Text("6,1".into()), Duration::ZERO);
        let value: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["puzzle"], "aoc24:p16a");
        assert_eq!(value["answer"], "6,1");
    }

    #[test]
    fn failing_outcome_explains_the_mismatch() {
        let outcome = ExampleOutcome {
            puzzle: maze_id(),
            expected: Answer::Int(7036),
            actual: Ok(Answer::Int(7037)),
        };
        assert!(!outcome.passed());
        assert_eq!(
            outcome.render(&ColorPalette::plain()),
            "FAIL aoc24:p16a expected 7036, got 7037"
        );
    }

    #[test]
    fn summary_counts_failures() {
        let ok = ExampleOutcome {
            puzzle: maze_id(),
            expected: Answer::Int(1),
            actual: Ok(Answer::Int(1)),
        };
        let broken = ExampleOutcome {
            actual: Err("boom".into()),
            ..ok.clone()
        };
        let line = render_summary(&[ok, broken], Duration::from_millis(5), &ColorPalette::plain());
        assert_eq!(line, "1 passed, 1 failed in 5ms");
    }

    #[test]
    fn elapsed_switches_to_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(999)), "999ms");
        assert_eq!(format_elapsed(Duration::from_millis(1250)), "1.25s");
    }
}
