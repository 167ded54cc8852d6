use std::path::PathBuf;

use advent_lib::ExampleBook;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn example_book() -> ExampleBook {
    let path = fixtures_dir().join("examples.json");
    ExampleBook::load(&path).expect("load fixture examples.json")
}
