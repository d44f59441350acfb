//! Error types for board construction, solving and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rook polynomial operations
#[derive(Debug)]
pub enum RookError {
    /// Board dimensions or forbidden cells are invalid
    ///
    /// Raised at board construction, never inside the solver.
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Solver exceeded its step budget
    ResourceExhausted {
        /// Steps processed when the budget ran out
        steps: usize,
        /// Configured step limit
        limit: usize,
    },

    /// Board file contents could not be parsed
    BoardFormat {
        /// 1-based line number of the offending row
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// No non-attacking placement with the requested rook count was found
    PlacementUnavailable {
        /// Number of rooks requested
        rooks: usize,
        /// Why no placement could be produced
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::ResourceExhausted { steps, limit } => {
                write!(
                    f,
                    "Solver step budget exhausted after {steps} steps (limit: {limit})"
                )
            }
            Self::BoardFormat { line, reason } => {
                write!(f, "Invalid board file at line {line}: {reason}")
            }
            Self::PlacementUnavailable { rooks, reason } => {
                write!(f, "Cannot place {rooks} non-attacking rooks: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for RookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rook polynomial results
pub type Result<T> = std::result::Result<T, RookError>;

impl From<std::io::Error> for RookError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RookError {
    RookError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a board file format error
pub fn board_format_error(line: usize, reason: &impl ToString) -> RookError {
    RookError::BoardFormat {
        line,
        reason: reason.to_string(),
    }
}

/// Create a placement error
pub fn placement_unavailable(rooks: usize, reason: &impl ToString) -> RookError {
    RookError::PlacementUnavailable {
        rooks,
        reason: reason.to_string(),
    }
}
