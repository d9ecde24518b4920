//! Conformance fixtures.
//!
//! A fixture file is a JSON array of cases:
//!
//! ```json
//! [{ "op": "add", "a": 2, "b": 3, "expected": 5 }]
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arithmetic;

/// Errors raised while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixtures from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Operation a case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Add,
    Multiply,
}

impl Op {
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Op::Add => arithmetic::add(a, b),
            Op::Multiply => arithmetic::multiply(a, b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => f.write_str("+"),
            Op::Multiply => f.write_str("*"),
        }
    }
}

/// A single `a <op> b == expected` scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub op: Op,
    pub a: i32,
    pub b: i32,
    pub expected: i32,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} == {}", self.a, self.op, self.b, self.expected)
    }
}

/// Parse cases from a JSON string.
pub fn parse_cases(json: &str) -> serde_json::Result<Vec<Case>> {
    serde_json::from_str(json)
}

/// Read and parse a fixture file.
pub fn load_cases(path: &Path) -> Result<Vec<Case>, FixtureError> {
    let data = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_cases(&data).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = cases.len(), "loaded fixture cases");
    Ok(cases)
}
