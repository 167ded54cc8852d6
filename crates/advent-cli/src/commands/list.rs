use anyhow::Result;

use advent_cli::output::render_listing;
use advent_cli::terminal::ColorPalette;

pub fn handle_list() -> Result<()> {
    println!("{}", render_listing(advent_lib::puzzles(), &ColorPalette::detect()));
    Ok(())
}
