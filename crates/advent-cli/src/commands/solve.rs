use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use advent_cli::output::{OutputFormat, SolveReport};
use advent_lib::{lookup, puzzle_input_path, read_input, resolve_data_dir, solve, PuzzleParams};

pub fn handle_solve(
    data_dir: Option<&Path>,
    puzzle: &str,
    input: Option<&Path>,
    overrides: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<()> {
    let entry = lookup(puzzle)?;

    let text = match input {
        Some(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read puzzle input from stdin")?;
            buffer
        }
        Some(path) => read_input(path)
            .with_context(|| format!("failed to read puzzle input from {}", path.display()))?,
        None => {
            let dir = resolve_data_dir(data_dir).context("failed to locate the data directory")?;
            let path = puzzle_input_path(&dir, entry.id);
            read_input(&path).with_context(|| {
                format!("no input for {}; pass --input or add {}", entry.id, path.display())
            })?
        }
    };

    let mut params = PuzzleParams::new();
    for (key, value) in overrides {
        params.insert(key, value);
    }

    let started = Instant::now();
    let answer = solve(&entry.id.to_string(), &text, &params)
        .with_context(|| format!("failed to solve {}", entry.id))?;
    let report = SolveReport::new(entry.id, answer, started.elapsed());

    println!("{}", report.render(format)?);
    Ok(())
}
