use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::PuzzleId;

/// Environment variable overriding where full puzzle inputs are stored.
pub const DATA_DIR_ENV: &str = "ADVENT_DATA_DIR";

/// Resolve the default input directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "advent", "advent").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the directory holding full puzzle inputs.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `ADVENT_DATA_DIR` environment variable.
/// 3. XDG/Platform-specific project directories.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Path of the input file for a puzzle, e.g. `<data>/aoc24/p16.txt`.
///
/// Both parts of a day share one file.
pub fn puzzle_input_path(data_dir: &Path, id: PuzzleId) -> PathBuf {
    data_dir
        .join(id.year.slug())
        .join(format!("p{:02}.txt", id.day))
}

/// Read an input file, reporting a missing file as [`Error::InputNotFound`].
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading puzzle input");
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let dir = Path::new("/tmp/advent-inputs");
        assert_eq!(resolve_data_dir(Some(dir)).unwrap(), dir);
    }

    #[test]
    fn input_path_is_keyed_by_year_and_day() {
        let id: PuzzleId = "aoc24:p16b".parse().unwrap();
        assert_eq!(
            puzzle_input_path(Path::new("data"), id),
            Path::new("data").join("aoc24").join("p16.txt")
        );
    }

    #[test]
    fn missing_input_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }
}
