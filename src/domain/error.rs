//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the tree's structural rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unbalanced closing marker at line {line}: no element is open")]
    UnbalancedClosingMarker { line: usize },

    #[error("content at line {line} follows the closed root element")]
    ContentAfterRoot { line: usize },

    #[error("empty document: expected at least a declaration line")]
    EmptyDocument,

    #[error("no table element in document")]
    TableNotFound,

    #[error("row {row} out of range: table has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("node not found: {0:?}")]
    NodeNotFound(Index),
}

impl DomainError {
    /// True for the build-time failures that abort construction.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::UnbalancedClosingMarker { .. } | Self::ContentAfterRoot { .. }
        )
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
