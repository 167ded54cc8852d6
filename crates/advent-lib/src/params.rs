use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Named overrides for puzzles whose example and full input differ in a
/// constant (bytes fallen, minimum saving, number of connections...).
///
/// Values are kept as strings until a solver asks for them so that the CLI
/// and the fixture book can share one representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleParams {
    values: BTreeMap<String, String>,
}

impl PuzzleParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get_usize(&self, key: &str, default: usize) -> Result<usize> {
        self.get_parsed(key, default)
    }

    pub fn get_u64(&self, key: &str, default: u64) -> Result<u64> {
        self.get_parsed(key, default)
    }

    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        self.get_parsed(key, default)
    }

    fn get_parsed<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.values.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| Error::InvalidParameter {
                key: key.to_string(),
                value: raw.clone(),
            }),
        }
    }
}

impl FromStr for PuzzleParams {
    type Err = Error;

    /// Parse a comma separated `key=value` list, e.g. `bytes=12,min_saving=50`.
    fn from_str(s: &str) -> Result<Self> {
        let mut params = PuzzleParams::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = parse_pair(pair)?;
            params.insert(key, value);
        }
        Ok(params)
    }
}

impl fmt::Display for PuzzleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .values
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Split a single `key=value` override.
pub fn parse_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(Error::InvalidParameter {
            key: pair.to_string(),
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_default() {
        let params = PuzzleParams::new();
        assert_eq!(params.get_usize("bytes", 1024).unwrap(), 1024);
    }

    #[test]
    fn overrides_are_parsed() {
        let params: PuzzleParams = "bytes=12, min_saving=50".parse().unwrap();
        assert_eq!(params.get_usize("bytes", 1024).unwrap(), 12);
        assert_eq!(params.get_i64("min_saving", 100).unwrap(), 50);
        assert_eq!(params.to_string(), "bytes=12,min_saving=50");
    }

    #[test]
    fn bad_values_are_rejected() {
        let params = PuzzleParams::new().with("bytes", "many");
        let err = params.get_usize("bytes", 1024).unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'many' for parameter bytes");
        assert!("novalue".parse::<PuzzleParams>().is_err());
    }
}
