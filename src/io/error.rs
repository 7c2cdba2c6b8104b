//! Error types for maze generation and solving

use std::fmt;
use std::path::PathBuf;

use crate::spatial::cell::Cell;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// The message cannot be encoded into cell residues
    InvalidMessage {
        /// Explanation of why the message was rejected
        reason: String,
    },

    /// The randomized walk search exhausted its budget without producing a
    /// path of the requested length
    ///
    /// Recoverable: a retry with fresh randomness may succeed.
    PathConstruction {
        /// Number of steps the walk was asked to take
        steps: usize,
        /// Search expansions spent before giving up
        expansions: usize,
    },

    /// The weight correction loop hit its round cap before the solver
    /// reproduced the target path
    ///
    /// Recoverable: the caller should retry from path construction rather
    /// than resume correction.
    DidNotConverge {
        /// Correction rounds executed before giving up
        rounds: usize,
    },

    /// No path exists between the two sentinel cells
    ///
    /// Cannot occur on a grid the generator produced; on arbitrary input it
    /// indicates a corrupted or hand-built grid.
    Unreachable {
        /// Starting sentinel cell
        begin: Cell,
        /// Final sentinel cell
        end: Cell,
    },

    /// Persisted grid violates the format invariants
    MalformedGrid {
        /// Description of the violation
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

    /// Grid document could not be encoded or decoded
    Serialization {
        /// Path of the document, when known
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl MazeError {
    /// Whether the caller may retry the failed operation with fresh
    /// randomness
    ///
    /// Only the two expected generation-time signals qualify; everything
    /// else is surfaced as-is.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PathConstruction { .. } | Self::DidNotConverge { .. }
        )
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMessage { reason } => {
                write!(f, "Invalid message: {reason}")
            }
            Self::PathConstruction { steps, expansions } => {
                write!(
                    f,
                    "No {steps}-step path found within {expansions} search expansions"
                )
            }
            Self::DidNotConverge { rounds } => {
                write!(f, "Weight correction did not converge after {rounds} rounds")
            }
            Self::Unreachable { begin, end } => {
                write!(f, "No path from {begin} to {end}")
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
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
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode or decode '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create a file system error carrying the offending path and operation
pub fn file_system_error(
    path: &std::path::Path,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let retryable = MazeError::PathConstruction {
            steps: 12,
            expansions: 99,
        };
        assert!(retryable.is_recoverable());

        let retryable = MazeError::DidNotConverge { rounds: 10_000 };
        assert!(retryable.is_recoverable());

        let fatal = MazeError::MalformedGrid {
            reason: "no BEGIN cell".to_string(),
        };
        assert!(!fatal.is_recoverable());

        let fatal = MazeError::Unreachable {
            begin: Cell::new(0, 0),
            end: Cell::new(3, 1),
        };
        assert!(!fatal.is_recoverable());
    }

    #[test]
    fn test_display_includes_context() {
        let err = MazeError::Unreachable {
            begin: Cell::new(1, 2),
            end: Cell::new(4, 5),
        };
        let text = err.to_string();
        assert!(text.contains("(1, 2)"));
        assert!(text.contains("(4, 5)"));

        let err = MazeError::DidNotConverge { rounds: 42 };
        assert!(err.to_string().contains("42"));
    }
}
