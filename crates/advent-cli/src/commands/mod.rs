// One module per subcommand; main.rs only parses arguments and dispatches.

pub mod examples;
pub mod list;
pub mod solve;
