//! Crate-wide error taxonomy.
//!
//! Every fallible operation surfaces one of these variants directly to
//! the caller; there is no internal retry or recovery.

use thiserror::Error;

/// Errors raised by the data-preparation helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepError {
    /// Subject range outside the supported [SUBJECT_MIN, SUBJECT_MAX]
    /// bounds, or start > stop.
    #[error("invalid subject range {start}..={stop} (supported: 2..=57, start <= stop)")]
    InvalidRange { start: u32, stop: u32 },

    /// Grouped data and labels are not parallel sequences.
    #[error("grouped data has {data_len} groups but {labels_len} labels")]
    LengthMismatch { data_len: usize, labels_len: usize },

    /// A group's row count cannot be partitioned into equal folds.
    #[error("group has {rows} rows, not divisible into {n_splits} folds")]
    SizeMismatch { rows: usize, n_splits: usize },
}

pub type Result<T> = std::result::Result<T, PrepError>;
