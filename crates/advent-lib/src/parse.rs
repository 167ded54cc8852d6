//! Small text helpers shared by the puzzle parsers.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Non-empty lines with trailing whitespace (including `\r`) removed.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}

/// Split text into blocks separated by one or more blank lines.
pub fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Every signed integer embedded in `text`, in order of appearance.
///
/// A `-` counts as a sign only when directly followed by a digit.
pub fn integers(text: &str) -> Vec<i64> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let negative = bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if bytes[i].is_ascii_digit() || negative {
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if let Ok(value) = text[start..i].parse() {
                values.push(value);
            }
        } else {
            i += 1;
        }
    }
    values
}

/// Parse a single token, mapping failure to a puzzle parse error.
pub fn number<T: FromStr>(puzzle: &'static str, token: &str) -> Result<T> {
    token
        .trim()
        .parse()
        .map_err(|_| Error::parse(puzzle, format!("'{}' is not a number", token.trim())))
}

/// Parse every whitespace-separated token of a line.
pub fn numbers<T: FromStr>(puzzle: &'static str, line: &str) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|token| number(puzzle, token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_signed_integers() {
        assert_eq!(integers("p=0,4 v=3,-3"), vec![0, 4, 3, -3]);
        assert_eq!(integers("Button A: X+94, Y+34"), vec![94, 34]);
        assert_eq!(integers("a-b"), Vec::<i64>::new());
    }

    #[test]
    fn splits_blocks_on_blank_lines() {
        let text = "a\nb\r\n\r\n\nc\n";
        assert_eq!(blocks(text), vec!["a\nb".to_string(), "c".to_string()]);
    }

    #[test]
    fn number_errors_name_the_puzzle() {
        let err = number::<i64>("aoc24:p01", "x1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse aoc24:p01 input: 'x1' is not a number"
        );
    }
}
