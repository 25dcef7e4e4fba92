//! Error types for su2-io

use std::fmt::{Display, Formatter};
use std::io;

use su2_mesh::MeshError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Su2Error>;

/// Grammar violation in an SU2 file.
///
/// `line` is 1-based; `0` marks the consistency check run on the assembled mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: usize,
    pub message: String,
}

impl FormatError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Error, Debug)]
pub enum Su2Error {
    #[error("malformed SU2 file: {0}")]
    Format(#[from] FormatError),

    #[error("failed to read SU2 stream: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write SU2 stream: {0}")]
    Write(#[source] io::Error),

    #[error("mesh cannot be written as SU2: {0}")]
    InvalidMesh(#[from] MeshError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Su2Error {
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Su2Error::Format(err) => Some(err),
            _ => None,
        }
    }
}
