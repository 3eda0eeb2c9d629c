//! Perft suite files.
//!
//! A suite is a TOML file listing positions, the depth to count them to and,
//! optionally, the node count they are expected to reach.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a suite file.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Failed to read the suite file from disk.
    #[error("Failed to read suite file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the suite file as valid TOML.
    #[error("Failed to parse suite: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The suite lists no positions.
    #[error("Suite contains no positions")]
    Empty,
}

/// One position to count.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PositionConfig {
    /// Label printed next to the result.
    pub name: String,
    /// Position in FEN notation.
    pub fen: String,
    /// Search depth. Defaults to 3.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Node count the position must reach, if known.
    #[serde(default)]
    pub expected: Option<u64>,
}

fn default_depth() -> u32 {
    3
}

/// A list of positions loaded from a suite file.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Suite {
    #[serde(default)]
    pub positions: Vec<PositionConfig>,
}

impl Suite {
    /// Loads a suite from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ReadError`] if the file cannot be read,
    /// [`SuiteError::ParseError`] if it is not valid TOML, or
    /// [`SuiteError::Empty`] if it lists no positions.
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses suite TOML already in memory.
    pub fn parse(content: &str) -> Result<Self, SuiteError> {
        let suite: Suite = toml::from_str(content)?;
        if suite.positions.is_empty() {
            return Err(SuiteError::Empty);
        }
        Ok(suite)
    }
}
