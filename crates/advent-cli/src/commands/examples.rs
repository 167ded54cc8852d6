use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::debug;

use advent_cli::output::{render_summary, ExampleOutcome};
use advent_cli::terminal::ColorPalette;
use advent_lib::{solve, ExampleBook};

/// Example book compiled into the binary.
const BUNDLED_EXAMPLES: &str = include_str!("../../../../docs/fixtures/examples.json");

pub fn handle_examples(fixtures: Option<&Path>, filter: Option<&str>) -> Result<()> {
    let book = match fixtures {
        Some(path) => ExampleBook::load(path)
            .with_context(|| format!("failed to load examples from {}", path.display()))?,
        None => ExampleBook::from_json(BUNDLED_EXAMPLES).context("bundled examples are invalid")?,
    };

    let filter = filter.map(str::to_ascii_lowercase);
    let cases: Vec<_> = book
        .cases()
        .into_iter()
        .filter(|case| match &filter {
            Some(needle) => case.id.to_string().contains(needle.as_str()),
            None => true,
        })
        .collect();
    if cases.is_empty() {
        bail!("no examples match {}", filter.as_deref().unwrap_or("*"));
    }

    let palette = ColorPalette::detect();
    let started = Instant::now();
    let mut outcomes = Vec::with_capacity(cases.len());
    for case in cases {
        debug!(puzzle = %case.id, "running example");
        let outcome = ExampleOutcome {
            puzzle: case.id,
            expected: case.expected.clone(),
            actual: solve(&case.id.to_string(), case.input, case.params)
                .map_err(|err| err.to_string()),
        };
        println!("{}", outcome.render(&palette));
        outcomes.push(outcome);
    }
    println!("{}", render_summary(&outcomes, started.elapsed(), &palette));

    let failed = outcomes.iter().filter(|outcome| !outcome.passed()).count();
    if failed > 0 {
        bail!("{} example(s) failed", failed);
    }
    Ok(())
}
