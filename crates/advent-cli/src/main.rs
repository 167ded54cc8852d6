use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use advent_cli::logging::{init_logging, LoggingConfig};
use advent_cli::output::OutputFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Advent of Code puzzle solvers")]
struct Cli {
    /// Override the directory holding full puzzle inputs.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one puzzle part, e.g. `aoc24:p16a`.
    Solve {
        /// Puzzle identifier (`aoc24:p16a`, `aoc24/p16a` or `2024-16a`).
        puzzle: String,
        /// Input file, or `-` for stdin. Defaults to the file in the data directory.
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Parameter override such as `bytes=12`. Repeatable.
        #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List every registered puzzle part.
    List,
    /// Run the example book and compare against expected answers.
    Examples {
        /// Example book to run instead of the bundled one.
        #[arg(long)]
        fixtures: Option<PathBuf>,
        /// Only run puzzles whose identifier contains this text.
        #[arg(long)]
        puzzle: Option<String>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), advent_lib::Error> {
    advent_lib::params::parse_pair(raw)
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            puzzle,
            input,
            params,
            format,
        } => commands::solve::handle_solve(
            cli.data_dir.as_deref(),
            &puzzle,
            input.as_deref(),
            params,
            format,
        ),
        Command::List => commands::list::handle_list(),
        Command::Examples { fixtures, puzzle } => {
            commands::examples::handle_examples(fixtures.as_deref(), puzzle.as_deref())
        }
    }
}
