//! Error types for graph construction, path queries and input parsing.

use thiserror::Error;

/// Process exit codes for the `topopath` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure, e.g. the input file couldn't be read (1)
    Failure = 1,
    /// The caller asked for something the graph can't answer (2)
    Usage = 2,
    /// The input data is malformed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a topology.
///
/// Node ids are stored in their `Debug` rendering so the error type stays independent of the
/// graph's vertex type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("node {node} is unreachable from the source")]
    Unreachable { node: String },

    #[error("no edge between {from} and {to}")]
    InvalidEdge { from: String, to: String },

    #[error("edge {from} -- {to} must have a positive weight")]
    InvalidWeight { from: String, to: String },

    #[error("min-hop paths can only be enumerated over a unit-weight graph")]
    NonUnitWeights,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_node(node: impl std::fmt::Debug) -> Self {
        Error::UnknownNode {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn unreachable(node: impl std::fmt::Debug) -> Self {
        Error::Unreachable {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn invalid_edge(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        Error::InvalidEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid_weight(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        Error::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Returns the exit code the binary reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::UnknownNode { .. } | Error::Unreachable { .. } | Error::NonUnitWeights => {
                ExitCode::Usage
            }
            Error::MalformedInput { .. }
            | Error::InvalidEdge { .. }
            | Error::InvalidWeight { .. } => ExitCode::Data,
            Error::Io(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;
