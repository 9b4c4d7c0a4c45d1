use std::error::Error as StdError;
use std::fmt;

/// Failure of a [`SequenceStore`](crate::sequence::SequenceStore) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No replicon with this identifier was loaded.
    NotFound(String),
    /// Requested range has its start after its end.
    OutOfRange {
        id:    String,
        start: usize,
        end:   usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "replicon not found - {}", id),
            StoreError::OutOfRange { id, start, end } => {
                write!(f, "invalid range on {} - {}..{}", id, start, end)
            },
        }
    }
}

impl StdError for StoreError {}
